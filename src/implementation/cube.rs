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

//! Builds the cube of symbolic variables the regression engine existentially
//! quantifies away after every preimage step, so that regressed state sets
//! stay expressed purely in terms of the pattern's variables.

use crate::abstraction::SymVariables;
use crate::common::Pattern;

/// Returns the cube (conjunction) of every symbolic variable *not* belonging
/// to `pattern`. Abstracting a BDD with this cube projects it down onto the
/// pattern.
pub fn abstraction_cube<S: SymVariables>(sym: &S, num_variables: usize, pattern: &Pattern) -> S::B {
    sym.non_pattern_cube(num_variables, pattern)
}
