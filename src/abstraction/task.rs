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

//! The planning-task frontend this crate consumes. Just like [`crate::Bdd`]
//! and [`crate::SymVariables`] abstract over the decision diagram library, a
//! [`TaskProxy`] abstracts over whatever structure a host application uses to
//! represent a parsed planning task.

use crate::common::{Fact, OperatorId, VariableId};

/// A concrete state, read one variable at a time. Implemented by whatever a
/// host application uses to represent a state at query time.
pub trait StateValuation {
    /// The value assigned to `var` in this state.
    fn value_of(&self, var: VariableId) -> i32;
}

/// The transition relation of a single operator, i.e. the relation that maps
/// a successor state set back to the set of its predecessors under that
/// operator.
pub trait TransitionRelation<B> {
    /// Given a set of (abstract) successor states, returns the set of states
    /// from which applying this operator leads into `successors`.
    fn preimage(&self, successors: &B) -> B;
}

/// A read-only view of a parsed planning task, restricted to what a symbolic
/// pattern database needs: variable/operator counts, costs, transition
/// relations, and the goal and initial conditions.
pub trait TaskProxy<B> {
    /// The total number of state variables of the task (not just the
    /// pattern's).
    fn num_variables(&self) -> usize;
    /// The total number of operators of the task.
    fn num_operators(&self) -> usize;
    /// True iff the task defines derived (axiom) variables.
    fn has_axioms(&self) -> bool;
    /// True iff any operator of the task has a conditional effect.
    fn has_conditional_effects(&self) -> bool;
    /// The default cost of operator `op`.
    fn operator_cost(&self, op: OperatorId) -> i32;
    /// The variables that operator `op` has an effect on.
    fn operator_relevant_vars(&self, op: OperatorId) -> &[VariableId];
    /// The transition relation of operator `op`.
    fn operator_transition_relation(&self, op: OperatorId) -> &dyn TransitionRelation<B>;
    /// The facts making up the task's goal condition.
    fn goal_facts(&self) -> &[Fact];
    /// The facts making up the task's initial state (one per variable).
    fn initial_state_facts(&self) -> &[Fact];
}
