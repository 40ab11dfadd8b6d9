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

//! Construction-time configuration of a symbolic pattern database.

use derive_builder::Builder;

/// This is how you configure the construction of a [`crate::SymbolicPatternDatabase`].
#[derive(Debug, Clone, Builder)]
pub struct SpdbOptions {
    /// If set to true, the wall-clock construction time is logged (at
    /// `info` level) once the database has been built.
    #[builder(default = "false")]
    pub dump: bool,
    /// Overrides the default operator costs of the task, one entry per
    /// operator. Useful for action cost partitioning. Left empty (the
    /// default), the task's own operator costs are used.
    #[builder(default = "None")]
    pub operator_costs: Option<Vec<i32>>,
}

impl Default for SpdbOptions {
    fn default() -> Self {
        SpdbOptions { dump: false, operator_costs: None }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_options {
    use super::*;

    #[test]
    fn default_options_disable_dump_and_keep_task_costs() {
        let options = SpdbOptions::default();
        assert!(!options.dump);
        assert!(options.operator_costs.is_none());
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = SpdbOptionsBuilder::default()
            .dump(true)
            .operator_costs(Some(vec![1, 2, 3]))
            .build()
            .unwrap();
        assert!(options.dump);
        assert_eq!(Some(vec![1, 2, 3]), options.operator_costs);
    }
}
