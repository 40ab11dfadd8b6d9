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

//! # symbolic-pdb
//! `symbolic-pdb` computes a symbolic pattern database heuristic for
//! cost-optimal classical planning. A pattern database abstracts a planning
//! task onto a subset of its state variables (the *pattern*) and records, for
//! every abstract state, the cheapest cost to reach the abstract goal from
//! it. This crate computes that table without ever enumerating abstract
//! states one at a time: it represents whole sets of states as binary
//! decision diagrams (BDDs) and the final heuristic as a single algebraic
//! decision diagram (ADD), and builds it with one backward, cost-layered
//! regression from the abstract goal.
//!
//! ## Side benefit
//! Because the heuristic is computed symbolically, the cost of construction
//! mostly depends on the structure of the task (how compactly its reachable
//! abstract states can be represented as a BDD), not on the raw size of the
//! abstract state space. Patterns whose concrete size would make an
//! explicit pattern database infeasible can still be tractable here.
//!
//! ## Quick Example
//! This crate does not ship a BDD/ADD library, a symbolic-variable encoding,
//! or a planning-task frontend of its own: you bring your own, by
//! implementing the [`Bdd`], [`AddValue`], [`SymVariables`] and [`TaskProxy`]
//! traits against whatever decision-diagram manager and parsed task your
//! planner already uses.
//!
//! ```ignore
//! use symbolic_pdb::*;
//!
//! // `sym` implements `SymVariables`, `task` implements `TaskProxy<MyBdd>`.
//! let pattern = Pattern::new(vec![VariableId(0), VariableId(2)])?;
//! let pdb = SymbolicPatternDatabase::new(&sym, &task, pattern, SpdbOptions::default())?;
//!
//! // `state` implements `StateValuation`.
//! match pdb.evaluate(&state) {
//!     Some(h) => println!("h = {h}"),
//!     None    => println!("dead end"),
//! }
//! # Ok::<(), SpdbError>(())
//! ```
//!
//! ## Going further / Getting a grasp on the codebase
//! The easiest way to get your way around with this crate is to start with
//! the traits in [`abstraction`]: [`SymVariables`] and [`TaskProxy`] are the
//! two seams you must implement. After that, [`implementation::regress`] and
//! [`implementation::materialize`] are where the actual heuristic
//! computation happens, and [`SymbolicPatternDatabase`] is the type that
//! ties everything together behind a small, pure query surface.

mod abstraction;
mod common;
mod error;
mod implementation;

pub use abstraction::*;
pub use common::*;
pub use error::*;
pub use implementation::*;
