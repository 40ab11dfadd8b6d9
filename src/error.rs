// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Errors that can arise while building a [`crate::SymbolicPatternDatabase`].
//!
//! Queries (`get_value`, `evaluate`, `is_dead_end`, ...) never fail: once a
//! database has been constructed, every query is a pure total function.

use thiserror::Error;

use crate::common::OperatorId;

/// Everything that can go wrong while constructing a symbolic pattern
/// database.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpdbError {
    /// The pattern passed to [`crate::SymbolicPatternDatabase::new`] is empty,
    /// unsorted, or contains a duplicate variable.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// The planning task has axioms, which this construction does not
    /// support.
    #[error("the planning task has axioms, which a symbolic pattern database cannot abstract over")]
    AxiomsUnsupported,

    /// The planning task has conditional effects, which this construction
    /// does not support.
    #[error("the planning task has conditional effects, which a symbolic pattern database cannot abstract over")]
    ConditionalEffectsUnsupported,

    /// A caller-supplied operator cost override does not have one entry per
    /// operator of the task.
    #[error("expected {expected} operator costs, but {given} were given")]
    OperatorCostMismatch { expected: usize, given: usize },

    /// A caller-supplied operator cost override is negative.
    #[error("operator {operator:?} was given a negative cost ({cost})")]
    NegativeOperatorCost { operator: OperatorId, cost: i32 },
}
