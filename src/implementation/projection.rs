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

//! Projects the full-state goal condition and initial state of the planning
//! task down onto a pattern: facts whose variable does not belong to the
//! pattern are simply dropped, since the pattern abstraction never
//! constrains them in the first place.

use crate::abstraction::{SymVariables, TaskProxy};
use crate::common::{Fact, Pattern};

fn project_facts<S: SymVariables>(sym: &S, facts: &[Fact], pattern: &Pattern) -> S::B {
    let mut bdd = sym.one_bdd();
    for fact in facts {
        if pattern.contains(fact.var) {
            bdd = bdd.and(&sym.pre_bdd(fact.var, fact.val));
        }
    }
    bdd
}

/// The BDD of the abstract goal: the conjunction of every goal fact whose
/// variable belongs to `pattern`.
pub fn project_goal<S: SymVariables>(
    sym: &S,
    task: &impl TaskProxy<S::B>,
    pattern: &Pattern,
) -> S::B {
    project_facts(sym, task.goal_facts(), pattern)
}

/// The BDD of the abstract initial state: the conjunction of every initial
/// fact whose variable belongs to `pattern`.
pub fn project_initial<S: SymVariables>(
    sym: &S,
    task: &impl TaskProxy<S::B>,
    pattern: &Pattern,
) -> S::B {
    project_facts(sym, task.initial_state_facts(), pattern)
}
