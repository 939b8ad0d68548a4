//! Deploy Event Port
//!
//! Provides an observable interface for the copy phase so the terminal can
//! show progress and per-file outcomes while the use case stays I/O free.

use std::path::PathBuf;

/// Event emitted while copying files into a site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Copy phase started
    Started { site: String, file_count: usize },

    /// A copy is about to run
    FileStarted { index: usize, destination: PathBuf },

    /// The copy command exited with status 0
    FileCopied { index: usize, destination: PathBuf },

    /// The copy command failed; `error` is its captured diagnostic text
    FileFailed {
        index: usize,
        destination: PathBuf,
        error: String,
    },

    /// Every file was attempted
    Completed { copied: usize, failed: usize },
}

/// Receiver for deploy events.
pub trait DeployEventSink {
    fn on_event(&mut self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&mut self, _event: DeployEvent) {}
}

impl DeployEventSink for Vec<DeployEvent> {
    fn on_event(&mut self, event: DeployEvent) {
        self.push(event);
    }
}
