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

//! This module defines the seam between this crate and a concrete decision
//! diagram library (such as CUDD or sylvan). The core of the crate never
//! manipulates nodes, tables or caches directly: it only ever calls methods
//! on [`Bdd`], [`AddValue`] and [`SymVariables`], so any host application can
//! plug in whatever manager it already uses to talk to the underlying
//! symbolic variables of its planning task.

use crate::common::{Pattern, VariableId};

/// A handle onto a set of states represented as a reduced, ordered binary
/// decision diagram.
///
/// Implementations are expected to be cheap to [`Clone`] (a shared pointer
/// into a decision diagram manager, typically) and are never mutated in
/// place: every operation returns a new handle.
pub trait Bdd: Clone {
    /// The conjunction of `self` and `other`.
    fn and(&self, other: &Self) -> Self;
    /// The disjunction of `self` and `other`.
    fn or(&self, other: &Self) -> Self;
    /// The complement of `self`.
    fn not(&self) -> Self;
    /// True iff `self` denotes the empty set of states.
    fn is_false(&self) -> bool;
    /// Existentially quantifies away every symbolic variable present in
    /// `cube` (itself a conjunction of literals, i.e. a BDD cube).
    fn exists_abstract(&self, cube: &Self) -> Self;
    /// The number of concrete abstract states represented by `self`, given
    /// the domain size of every pattern variable (in pattern order). This is
    /// a weighted satisfying-assignment count over the symbolic encoding, not
    /// a node count.
    fn state_count(&self, domain_sizes: &[usize]) -> f64;
}

/// A handle onto a function from (abstract) states to integer values,
/// represented as an algebraic decision diagram.
pub trait AddValue: Clone {
    /// Pointwise sum of `self` and `other`.
    fn plus(&self, other: &Self) -> Self;
    /// Pointwise product of `self` and `other`.
    fn times(&self, other: &Self) -> Self;
    /// The largest leaf value appearing in `self`.
    fn max_leaf(&self) -> i32;
}

/// The symbolic-variable manager: the only collaborator able to *create*
/// fresh [`Bdd`]/[`AddValue`] handles from a variable/value pair, a constant,
/// or another handle. Every manager operation is phrased in terms of the
/// underlying planning task's variables, not the decision diagram's
/// low-level encoding.
pub trait SymVariables {
    type B: Bdd;
    type A: AddValue;

    /// The BDD denoting the full state space (no constraint at all).
    fn one_bdd(&self) -> Self::B;
    /// The BDD denoting the empty set of states.
    fn zero_bdd(&self) -> Self::B;
    /// The BDD of the states where `var` is assigned `value` (in the "pre",
    /// i.e. current-state, layer of variables).
    fn pre_bdd(&self, var: VariableId, value: i32) -> Self::B;
    /// The cube (conjunction) of the symbolic variables encoding `var` in the
    /// "pre" layer. Used to existentially abstract `var` away.
    fn pre_vars_cube(&self, var: VariableId) -> Self::B;
    /// The number of values in the domain of `var`.
    fn domain_size(&self, var: VariableId) -> usize;
    /// The ADD that evaluates to `value` everywhere.
    fn constant_add(&self, value: i32) -> Self::A;
    /// Converts a 0/1-valued BDD into the corresponding 0/1-leaved ADD.
    fn bdd_to_add(&self, bdd: &Self::B) -> Self::A;

    /// Convenience: the cube of every symbolic variable outside of `pattern`,
    /// used to project a regressed state set down onto the pattern.
    fn non_pattern_cube(&self, num_variables: usize, pattern: &Pattern) -> Self::B {
        let mut cube = self.one_bdd();
        for v in 0..num_variables {
            let var = VariableId(v);
            if !pattern.contains(var) {
                cube = cube.and(&self.pre_vars_cube(var));
            }
        }
        cube
    }
}
