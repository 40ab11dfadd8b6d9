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

//! The symbolic pattern database itself: the public type that orchestrates
//! the cube builder, the goal/initial projection, the regression engine and
//! the ADD materialization into a single, queryable heuristic.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::abstraction::{AddValue, Bdd, StateValuation, SymVariables, TaskProxy};
use crate::common::{OperatorId, Pattern};
use crate::error::SpdbError;
use crate::implementation::cube::abstraction_cube;
use crate::implementation::materialize::materialize;
use crate::implementation::options::SpdbOptions;
use crate::implementation::projection::{project_goal, project_initial};
use crate::implementation::regression::regress;

/// A symbolic (BDD/ADD-based) pattern database heuristic.
///
/// Construction runs a single backward, cost-layered regression from the
/// abstract goal and materializes the result into an algebraic decision
/// diagram. Once built, every query (`get_value`, `evaluate`, `is_dead_end`)
/// is a pure, total function: it never mutates the database and never
/// fails.
pub struct SymbolicPatternDatabase<'a, S: SymVariables> {
    sym: &'a S,
    pattern: Pattern,
    closed: BTreeMap<u32, S::B>,
    heuristic: S::A,
    /// The union of every `closed[h]` layer, i.e. the set of abstract states
    /// from which the abstract goal is reachable backward at all. Used by
    /// [`Self::is_dead_end`] so dead-end detection never depends on the
    /// numeric value stored in `heuristic`.
    reachable: S::B,
    /// The BDD of the (projected) initial state.
    pub initial: S::B,
    /// The heuristic value of the initial state, or `None` if it is a
    /// dead-end in this pattern's abstraction.
    pub initial_h_val: Option<u32>,
}

impl<'a, S: SymVariables> SymbolicPatternDatabase<'a, S> {
    /// Builds a symbolic pattern database for `pattern` over `task`.
    ///
    /// # Errors
    /// Returns an error if the task has axioms or conditional effects (both
    /// unsupported by this construction), or if `operator_costs` is given
    /// but does not have exactly one entry per operator, or contains a
    /// negative cost.
    ///
    /// # Panics
    /// Panics if `pattern` references a variable outside of
    /// `0 .. task.num_variables()`; this is a contract violation by the
    /// caller, not a recoverable construction error.
    pub fn new(
        sym: &'a S,
        task: &impl TaskProxy<S::B>,
        pattern: Pattern,
        options: SpdbOptions,
    ) -> Result<Self, SpdbError> {
        let _span = tracing::info_span!("create_spdb").entered();

        if task.has_axioms() {
            return Err(SpdbError::AxiomsUnsupported);
        }
        if task.has_conditional_effects() {
            return Err(SpdbError::ConditionalEffectsUnsupported);
        }
        for &var in pattern.as_slice() {
            assert!(
                var.id() < task.num_variables(),
                "pattern references variable {:?} outside of the task's {} variables",
                var,
                task.num_variables()
            );
        }

        let operator_costs = Self::resolve_operator_costs(task, &options)?;

        let start = Instant::now();

        let cube = abstraction_cube(sym, task.num_variables(), &pattern);
        let goal = project_goal(sym, task, &pattern);
        let initial = project_initial(sym, task, &pattern);

        let closed = regress(sym, task, &cube, goal, &operator_costs);
        tracing::debug!(layers = closed.len(), "regression complete");

        let heuristic = materialize(sym, &closed);

        let reachable = closed.values().fold(sym.zero_bdd(), |union, bdd| union.or(bdd));

        let initial_h_val = closed
            .iter()
            .find(|(_, bdd)| !bdd.and(&initial).is_false())
            .map(|(&h, _)| h);

        if options.dump {
            tracing::info!(elapsed = ?start.elapsed(), "symbolic pattern database construction time");
        }

        Ok(SymbolicPatternDatabase {
            sym,
            pattern,
            closed,
            heuristic,
            reachable,
            initial,
            initial_h_val,
        })
    }

    /// The BDD of the single abstract state that `state` projects onto.
    fn point(&self, state: &impl StateValuation) -> S::B {
        let mut point = self.sym.one_bdd();
        for var in self.pattern.iter() {
            point = point.and(&self.sym.pre_bdd(var, state.value_of(var)));
        }
        point
    }

    fn resolve_operator_costs(
        task: &impl TaskProxy<S::B>,
        options: &SpdbOptions,
    ) -> Result<Vec<i32>, SpdbError> {
        match &options.operator_costs {
            Some(costs) => {
                if costs.len() != task.num_operators() {
                    return Err(SpdbError::OperatorCostMismatch {
                        expected: task.num_operators(),
                        given: costs.len(),
                    });
                }
                for (op, &cost) in costs.iter().enumerate() {
                    if cost < 0 {
                        return Err(SpdbError::NegativeOperatorCost { operator: OperatorId(op), cost });
                    }
                }
                Ok(costs.clone())
            }
            None => Ok((0..task.num_operators()).map(|op| task.operator_cost(OperatorId(op))).collect()),
        }
    }

    /// The pattern (set of variables) this database abstracts the task onto.
    pub fn get_pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The number of abstract states of this pattern, i.e. the product of
    /// the domain sizes of its variables.
    pub fn get_size(&self) -> usize {
        self.pattern.iter().map(|v| self.sym.domain_size(v)).product()
    }

    /// The raw heuristic value stored for `state`: its regression cost, or
    /// `0` if the abstract projection of `state` belongs to no cost layer
    /// (the multiplication policy of the ADD query, not a sentinel — use
    /// [`Self::is_dead_end`] to distinguish a genuine dead-end from a
    /// goal state).
    pub fn get_value(&self, state: &impl StateValuation) -> i32 {
        let point_add = self.sym.bdd_to_add(&self.point(state));
        self.heuristic.times(&point_add).max_leaf()
    }

    /// The heuristic value of `state`, or `None` if it is a dead-end in this
    /// pattern's abstraction.
    pub fn evaluate(&self, state: &impl StateValuation) -> Option<u32> {
        if self.is_dead_end(state) {
            None
        } else {
            Some(self.get_value(state) as u32)
        }
    }

    /// True iff the abstract projection of `state` intersects no `closed[h]`
    /// layer, i.e. the abstract goal is unreachable backward from it.
    pub fn is_dead_end(&self, state: &impl StateValuation) -> bool {
        self.point(state).and(&self.reachable).is_false()
    }

    /// The average `h`-value over all abstract states, dead-ends excluded
    /// from both the sum and the count. Returns `f64::INFINITY` if every
    /// abstract state is a dead-end.
    ///
    /// This is only computed when called; avoid repeated calls.
    pub fn compute_mean_finite_h(&self) -> f64 {
        let domain_sizes: Vec<usize> = self.pattern.iter().map(|v| self.sym.domain_size(v)).collect();
        let mut weighted_sum = 0.0f64;
        let mut count = 0.0f64;
        for (&h, bdd) in &self.closed {
            let c = bdd.state_count(&domain_sizes);
            weighted_sum += h as f64 * c;
            count += c;
        }
        if count == 0.0 {
            f64::INFINITY
        } else {
            weighted_sum / count
        }
    }

    /// True iff `op` has an effect on a variable belonging to this pattern.
    pub fn is_operator_relevant(&self, task: &impl TaskProxy<S::B>, op: OperatorId) -> bool {
        task.operator_relevant_vars(op).iter().any(|&v| self.pattern.contains(v))
    }
}
