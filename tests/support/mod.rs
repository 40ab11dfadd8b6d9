//! A tiny, explicit-enumeration `Bdd`/`AddValue`/`SymVariables`/`TaskProxy`
//! backend used only by the integration tests in `tests/scenarios.rs`. It
//! represents every set of states as a `HashSet` of full variable
//! assignments rather than a compact decision diagram: correct for the toy
//! two-variable tasks exercised here, and not meant to stand in for a real
//! CUDD/sylvan-backed manager.

use std::collections::HashSet;

use symbolic_pdb::{AddValue, Bdd, Fact, OperatorId, TaskProxy, TransitionRelation, VariableId};

pub type State = Vec<i32>;

/// All four full assignments of the toy task's two boolean variables. Fixed
/// because every scenario in this test suite uses the same two-variable toy
/// task.
fn full_universe() -> HashSet<State> {
    let mut states = HashSet::new();
    for v0 in 0..2 {
        for v1 in 0..2 {
            states.insert(vec![v0, v1]);
        }
    }
    states
}

/// A set of full-length state assignments, or a cube (list of variable
/// indices to existentially quantify away).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockBdd {
    States(HashSet<State>),
    Cube(Vec<usize>),
}

impl MockBdd {
    fn states(&self) -> &HashSet<State> {
        match self {
            MockBdd::States(s) => s,
            MockBdd::Cube(_) => panic!("a cube is not a set of states"),
        }
    }
}

impl Bdd for MockBdd {
    fn and(&self, other: &Self) -> Self {
        MockBdd::States(self.states().intersection(other.states()).cloned().collect())
    }

    fn or(&self, other: &Self) -> Self {
        MockBdd::States(self.states().union(other.states()).cloned().collect())
    }

    fn not(&self) -> Self {
        MockBdd::States(full_universe().difference(self.states()).cloned().collect())
    }

    fn is_false(&self) -> bool {
        self.states().is_empty()
    }

    fn exists_abstract(&self, cube: &Self) -> Self {
        let quantified = match cube {
            MockBdd::Cube(vars) => vars,
            MockBdd::States(_) => panic!("exists_abstract expects a cube argument"),
        };
        if quantified.is_empty() {
            return self.clone();
        }
        let mut out = HashSet::new();
        for assignment in self.states() {
            for var in quantified {
                for value in [0, 1] {
                    let mut expanded = assignment.clone();
                    expanded[*var] = value;
                    out.insert(expanded);
                }
            }
        }
        MockBdd::States(out)
    }

    fn state_count(&self, _domain_sizes: &[usize]) -> f64 {
        // Exact for the full-pattern scenarios this mock is exercised with:
        // with no quantified variable ever dropped from the representation,
        // every kept assignment is already a distinct abstract state.
        self.states().len() as f64
    }
}

/// Every ADD in this mock is represented directly as a map from full state
/// assignment to leaf value, with a single default leaf for everything
/// outside of that map.
#[derive(Clone, Debug)]
pub struct MockAdd {
    default: i32,
    overrides: std::collections::HashMap<State, i32>,
}

impl AddValue for MockAdd {
    fn plus(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a + b)
    }

    fn times(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a * b)
    }

    fn max_leaf(&self) -> i32 {
        self.overrides
            .values()
            .copied()
            .chain(std::iter::once(self.default))
            .max()
            .unwrap()
    }
}

impl MockAdd {
    fn combine(&self, other: &Self, op: impl Fn(i32, i32) -> i32) -> Self {
        let mut overrides = std::collections::HashMap::new();
        for key in self.overrides.keys().chain(other.overrides.keys()) {
            let a = self.overrides.get(key).copied().unwrap_or(self.default);
            let b = other.overrides.get(key).copied().unwrap_or(other.default);
            overrides.insert(key.clone(), op(a, b));
        }
        MockAdd { default: op(self.default, other.default), overrides }
    }
}

/// The manager: knows the universe of all full-length state assignments
/// (two boolean variables) and builds fresh `MockBdd`/`MockAdd` handles.
pub struct MockSymVariables {
    pub num_variables: usize,
}

impl MockSymVariables {
    fn universe(&self) -> HashSet<State> {
        full_universe()
    }
}

impl symbolic_pdb::SymVariables for MockSymVariables {
    type B = MockBdd;
    type A = MockAdd;

    fn one_bdd(&self) -> Self::B {
        MockBdd::States(self.universe())
    }

    fn zero_bdd(&self) -> Self::B {
        MockBdd::States(HashSet::new())
    }

    fn pre_bdd(&self, var: VariableId, value: i32) -> Self::B {
        MockBdd::States(self.universe().into_iter().filter(|s| s[var.id()] == value).collect())
    }

    fn pre_vars_cube(&self, var: VariableId) -> Self::B {
        MockBdd::Cube(vec![var.id()])
    }

    fn domain_size(&self, _var: VariableId) -> usize {
        2
    }

    fn constant_add(&self, value: i32) -> Self::A {
        MockAdd { default: value, overrides: std::collections::HashMap::new() }
    }

    fn bdd_to_add(&self, bdd: &Self::B) -> Self::A {
        let mut overrides = std::collections::HashMap::new();
        for state in self.universe() {
            let value = if bdd.states().contains(&state) { 1 } else { 0 };
            overrides.insert(state, value);
        }
        MockAdd { default: 0, overrides }
    }

    // The default `non_pattern_cube` builds the cube by `and`-ing together
    // the per-variable cubes returned by `pre_vars_cube`; that is correct
    // for a real BDD library (a cube's AND is itself a cube) but this mock's
    // `Cube` variant is a bare list of indices, not a state set, so it is
    // overridden here to just collect the indices directly.
    fn non_pattern_cube(&self, num_variables: usize, pattern: &symbolic_pdb::Pattern) -> Self::B {
        let quantified = (0..num_variables).filter(|&v| !pattern.contains(VariableId(v))).collect();
        MockBdd::Cube(quantified)
    }
}

/// A single toggle/identity operator of the toy task, defined by its
/// forward transition function over the full (v0, v1) state.
pub struct ToyOperator {
    pub cost: i32,
    pub relevant: Vec<VariableId>,
    apply: fn(&State) -> State,
}

impl TransitionRelation<MockBdd> for ToyOperator {
    fn preimage(&self, successors: &MockBdd) -> MockBdd {
        let mut predecessors = HashSet::new();
        for v0 in 0..2 {
            for v1 in 0..2 {
                let s = vec![v0, v1];
                let next = (self.apply)(&s);
                if successors.states().contains(&next) {
                    predecessors.insert(s);
                }
            }
        }
        MockBdd::States(predecessors)
    }
}

fn flip0(s: &State) -> State {
    vec![1 - s[0], s[1]]
}
fn flip1(s: &State) -> State {
    vec![s[0], 1 - s[1]]
}
fn flip_both(s: &State) -> State {
    vec![1 - s[0], 1 - s[1]]
}
fn identity(s: &State) -> State {
    s.clone()
}

/// The toy task: two boolean switches, goal is both set, initial state is
/// both unset.
pub struct ToyTask {
    pub operators: Vec<ToyOperator>,
    pub goal: Vec<Fact>,
    pub initial: Vec<Fact>,
}

impl ToyTask {
    /// `op_flip0` (cost 1), `op_flip1` (cost 1), `op_flip_both` (cost 2) and
    /// `op_noop` (cost 0, touches no variable).
    pub fn new() -> Self {
        ToyTask {
            operators: vec![
                ToyOperator { cost: 1, relevant: vec![VariableId(0)], apply: flip0 },
                ToyOperator { cost: 1, relevant: vec![VariableId(1)], apply: flip1 },
                ToyOperator { cost: 2, relevant: vec![VariableId(0), VariableId(1)], apply: flip_both },
                ToyOperator { cost: 0, relevant: vec![], apply: identity },
            ],
            goal: vec![Fact { var: VariableId(0), val: 1 }, Fact { var: VariableId(1), val: 1 }],
            initial: vec![Fact { var: VariableId(0), val: 0 }, Fact { var: VariableId(1), val: 0 }],
        }
    }

    /// Same task, without the two operators able to reach variable 1 at all:
    /// only `op_flip0` survives, so no operator can ever fix `v1`'s value.
    pub fn with_unreachable_v1() -> Self {
        ToyTask {
            operators: vec![ToyOperator { cost: 1, relevant: vec![VariableId(0)], apply: flip0 }],
            goal: vec![Fact { var: VariableId(0), val: 1 }, Fact { var: VariableId(1), val: 1 }],
            initial: vec![Fact { var: VariableId(0), val: 0 }, Fact { var: VariableId(1), val: 0 }],
        }
    }

    /// Same task, but without the zero-cost `op_noop` self-loop.
    pub fn without_noop() -> Self {
        let mut task = Self::new();
        task.operators.retain(|op| op.cost != 0);
        task
    }
}

impl TaskProxy<MockBdd> for ToyTask {
    fn num_variables(&self) -> usize {
        2
    }

    fn num_operators(&self) -> usize {
        self.operators.len()
    }

    fn has_axioms(&self) -> bool {
        false
    }

    fn has_conditional_effects(&self) -> bool {
        false
    }

    fn operator_cost(&self, op: OperatorId) -> i32 {
        self.operators[op.id()].cost
    }

    fn operator_relevant_vars(&self, op: OperatorId) -> &[VariableId] {
        &self.operators[op.id()].relevant
    }

    fn operator_transition_relation(&self, op: OperatorId) -> &dyn TransitionRelation<MockBdd> {
        &self.operators[op.id()]
    }

    fn goal_facts(&self) -> &[Fact] {
        &self.goal
    }

    fn initial_state_facts(&self) -> &[Fact] {
        &self.initial
    }
}

/// A concrete state usable with `StateValuation`.
pub struct ToyState(pub State);
impl symbolic_pdb::StateValuation for ToyState {
    fn value_of(&self, var: VariableId) -> i32 {
        self.0[var.id()]
    }
}
