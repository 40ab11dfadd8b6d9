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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

use crate::error::SpdbError;

// ----------------------------------------------------------------------------
// --- VARIABLE ID --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Identifies a state variable of the planning task at hand. Variables are
/// numbered `0 .. task.num_variables()`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct VariableId(pub usize);
impl VariableId {
    #[inline]
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- OPERATOR ID --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Identifies an operator of the planning task at hand. Operators are
/// numbered `0 .. task.num_operators()`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct OperatorId(pub usize);
impl OperatorId {
    #[inline]
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- FACT ---------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A `[[ variable = value ]]` pair, as it appears in a goal condition, an
/// initial state or an operator effect.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Fact {
    pub var: VariableId,
    pub val: i32,
}

// ----------------------------------------------------------------------------
// --- PATTERN ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The set of state variables a symbolic pattern database abstracts the
/// planning task onto.
///
/// A `Pattern` is a proof that its variables are sorted, duplicate-free and
/// non-empty: the precondition is checked exactly once, at construction time,
/// so every other piece of code can simply assume it holds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pattern {
    vars: Vec<VariableId>,
}
impl Pattern {
    /// Builds a new pattern from the given variables.
    ///
    /// # Errors
    /// Returns [`SpdbError::InvalidPattern`] if `vars` is empty, is not sorted
    /// in strictly increasing order, or contains a duplicate.
    pub fn new(vars: Vec<VariableId>) -> Result<Self, SpdbError> {
        if vars.is_empty() {
            return Err(SpdbError::InvalidPattern("pattern must not be empty".to_string()));
        }
        if !vars.windows(2).all(|w| w[0] < w[1]) {
            return Err(SpdbError::InvalidPattern(
                "pattern must be sorted and duplicate-free".to_string(),
            ));
        }
        Ok(Pattern { vars })
    }

    /// The number of variables in this pattern.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// True iff `var` belongs to this pattern.
    pub fn contains(&self, var: VariableId) -> bool {
        self.vars.binary_search(&var).is_ok()
    }

    /// Iterates over the variables of this pattern in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.vars.iter().copied()
    }

    pub fn as_slice(&self) -> &[VariableId] {
        &self.vars
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
