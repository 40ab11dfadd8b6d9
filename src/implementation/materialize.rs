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

//! Folds the disjoint `closed[h]` layers discovered by the regression engine
//! into a single algebraic decision diagram mapping every abstract state to
//! its heuristic value. States that belong to no layer (no cost term ever
//! touches them) are left at the base leaf of 0; dead-end detection is a
//! separate membership test against the union of the layers, not a sentinel
//! baked into this ADD (see [`crate::SymbolicPatternDatabase::is_dead_end`]).

use std::collections::BTreeMap;

use crate::abstraction::{AddValue, SymVariables};

/// Builds the heuristic ADD out of the disjoint cost layers:
/// `H = sum_h (closed[h] as ADD) * constant(h)`. Because the layers are
/// pairwise disjoint (an invariant maintained by [`crate::regress`]), every
/// assignment contributes to at most one term, so the order in which the
/// terms are summed does not affect the result.
pub fn materialize<S: SymVariables>(sym: &S, closed: &BTreeMap<u32, S::B>) -> S::A {
    let mut heuristic = sym.constant_add(0);
    for (&h, bdd) in closed {
        let layer = sym.bdd_to_add(bdd).times(&sym.constant_add(h as i32));
        heuristic = heuristic.plus(&layer);
    }
    heuristic
}
