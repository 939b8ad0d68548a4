//! Test doubles for the domain ports.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use chrono::DateTime;

use crate::domain::entities::{Commit, FileChange, FileStats};
use crate::domain::ports::{CommandOutput, CommandRunner, Invocation, Repository};
use crate::error::{SitepushError, SitepushResult};

/// Scripted runner: queued outputs per program, success with empty output
/// once a queue runs dry. Every invocation is recorded.
#[derive(Default)]
pub struct FakeRunner {
    scripted: RefCell<HashMap<String, VecDeque<CommandOutput>>>,
    missing: Vec<String>,
    calls: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, program: &str, output: CommandOutput) -> Self {
        self.scripted
            .borrow_mut()
            .entry(program.to_string())
            .or_default()
            .push_back(output);
        self
    }

    /// Make `program` fail to spawn.
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program == program)
            .cloned()
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> SitepushResult<CommandOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.missing.contains(&invocation.program) {
            return Err(SitepushError::CommandSpawn {
                program: invocation.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        let next = self
            .scripted
            .borrow_mut()
            .get_mut(&invocation.program)
            .and_then(VecDeque::pop_front);
        Ok(next.unwrap_or_else(|| CommandOutput::success("")))
    }
}

/// In-memory repository with a fixed HEAD.
pub struct FakeRepository {
    pub root: PathBuf,
    pub head: Option<Commit>,
    pub user_name: Option<String>,
}

impl FakeRepository {
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            root: PathBuf::from("/home/dev/check_mk"),
            head: Some(commit("Jane Dev", files)),
            user_name: Some("Jane Dev".to_string()),
        }
    }
}

impl Repository for FakeRepository {
    fn working_tree_root(&self) -> &Path {
        &self.root
    }

    fn head_commit(&self) -> SitepushResult<Commit> {
        self.head
            .clone()
            .ok_or_else(|| SitepushError::MalformedRepository {
                message: "HEAD is unborn".to_string(),
            })
    }

    fn config_value(&self, key: &str) -> SitepushResult<Option<String>> {
        Ok(match key {
            "user.name" => self.user_name.clone(),
            _ => None,
        })
    }
}

pub fn commit(author: &str, files: &[&str]) -> Commit {
    Commit {
        author: author.to_string(),
        committed_at: DateTime::parse_from_rfc3339("2026-10-19T14:03:59+02:00")
            .expect("valid timestamp"),
        message: "Fix agent plugin\n".to_string(),
        files: files
            .iter()
            .map(|p| FileChange {
                path: PathBuf::from(p),
                stats: FileStats::new(1, 1),
            })
            .collect(),
    }
}
