//! Shared doubles for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;

use sitepush::domain::ports::{CommandOutput, CommandRunner, Invocation};
use sitepush::SitepushResult;

/// Records every invocation; the calls whose 0-based position is in
/// `failing` exit with status 1.
#[derive(Default)]
pub struct RecordingRunner {
    pub failing: HashSet<usize>,
    pub calls: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn failing(failing: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing: failing.into_iter().collect(),
            calls: RefCell::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> SitepushResult<CommandOutput> {
        let mut calls = self.calls.borrow_mut();
        let index = calls.len();
        calls.push(invocation.clone());
        if self.failing.contains(&index) {
            Ok(CommandOutput::failure(1, "Permission denied"))
        } else {
            Ok(CommandOutput::success(""))
        }
    }
}

/// Relative paths such as `cmk/utils/x.py` or `.werks/12`.
pub fn relative_path() -> impl proptest::strategy::Strategy<Value = String> {
    proptest::string::string_regex("(\\.werks|bin|cmk|agents|tests|\\.github)(/[a-z_]{1,8}){0,3}(\\.py)?")
        .expect("valid regex")
}
