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

//! The core of a symbolic pattern database: a backward, cost-layered,
//! uniform-cost regression from the abstract goal. Each iteration pops the
//! cheapest pending bucket of states, freezes it into a disjoint `closed[h]`
//! layer, and regresses it through every operator's transition relation to
//! discover the states at `h + operator_cost`.

use std::collections::BTreeMap;

use crate::abstraction::{SymVariables, TaskProxy};
use crate::common::OperatorId;

/// Runs the backward regression and returns the disjoint cost layers
/// `closed[h]`, keyed by `h` and covering exactly the abstract states
/// reachable backward from the goal.
///
/// `cube` is the cube of non-pattern variables (see
/// [`crate::abstraction_cube`]), `goal` is the already-projected abstract
/// goal (see [`crate::project_goal`]), and `operator_costs` gives the cost of
/// every operator, indexed by [`OperatorId`].
pub fn regress<S: SymVariables>(
    sym: &S,
    task: &impl TaskProxy<S::B>,
    cube: &S::B,
    goal: S::B,
    operator_costs: &[i32],
) -> BTreeMap<u32, S::B> {
    let mut closed: BTreeMap<u32, S::B> = BTreeMap::new();
    let mut pending: BTreeMap<u32, S::B> = BTreeMap::new();
    pending.insert(0, goal);
    let mut visited = sym.zero_bdd();

    while let Some((&g, _)) = pending.iter().next() {
        let states = pending.remove(&g).unwrap();

        // Defensive: a state could in principle have been folded into
        // `visited` by a different bucket before this one was popped. Since
        // buckets are always popped in non-decreasing cost order this should
        // never actually trim anything, but guarding the invariant is cheap.
        let new_states = states.and(&visited.not());
        if new_states.is_false() {
            continue;
        }

        visited = visited.or(&new_states);
        closed.insert(g, new_states.clone());
        tracing::debug!(h = g, "discovered layer");

        for op in 0..task.num_operators() {
            let op_id = OperatorId(op);
            let relation = task.operator_transition_relation(op_id);
            let predecessors = relation.preimage(&new_states);
            let projected = predecessors.exists_abstract(cube);
            if projected.is_false() {
                continue;
            }
            let cost = operator_costs[op];
            debug_assert!(cost >= 0, "operator costs are validated before regression starts");
            let next_g = g + cost as u32;
            pending
                .entry(next_g)
                .and_modify(|bucket| *bucket = bucket.or(&projected))
                .or_insert(projected);
        }
    }

    closed
}
