//! Deploy use case - copies changed files into a site's runtime directory
//!
//! The plan computed here is both what the user is shown and what gets
//! executed, so the two can never diverge.

use std::path::{Path, PathBuf};

use crate::domain::ports::{CommandRunner, DeployEvent, DeployEventSink, Invocation};
use crate::domain::value_objects::{ChangedFile, Site, SiteLayout};
use crate::error::{SitepushError, SitepushResult};

/// One file to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStep {
    pub file: ChangedFile,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl CopyStep {
    /// Final path component of the destination, used in outcome lines.
    pub fn display_name(&self) -> String {
        self.destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.destination.display().to_string())
    }
}

/// Ordered copy plan for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub site: Site,
    /// Copies run from here
    pub working_tree_root: PathBuf,
    pub steps: Vec<CopyStep>,
}

impl DeployPlan {
    pub fn destinations(&self) -> impl Iterator<Item = &Path> {
        self.steps.iter().map(|s| s.destination.as_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub step: CopyStep,
    pub outcome: CopyOutcome,
}

/// Per-file outcomes of an executed plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployResult {
    pub results: Vec<FileResult>,
}

impl DeployResult {
    pub fn copied(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == CopyOutcome::Copied)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.copied()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Builds and executes copy plans with an elevated copy command.
pub struct DeployUseCase<R: CommandRunner> {
    runner: R,
    layout: SiteLayout,
    copy_command: Vec<String>,
}

impl<R: CommandRunner> DeployUseCase<R> {
    pub fn new(runner: R, layout: SiteLayout, copy_command: Vec<String>) -> SitepushResult<Self> {
        if copy_command.is_empty() {
            return Err(SitepushError::EmptyCommand {
                setting: "deploy.copy_command".to_string(),
            });
        }
        Ok(Self {
            runner,
            layout,
            copy_command,
        })
    }

    pub fn plan(&self, site: &Site, files: &[ChangedFile], working_tree_root: &Path) -> DeployPlan {
        let steps = files
            .iter()
            .map(|file| CopyStep {
                file: file.clone(),
                source: file.source_in(working_tree_root),
                destination: self.layout.destination(site, file),
            })
            .collect();
        DeployPlan {
            site: site.clone(),
            working_tree_root: working_tree_root.to_path_buf(),
            steps,
        }
    }

    /// Copy every file in order.
    ///
    /// A failed copy is recorded and the next file is still attempted.
    /// Nothing is retried or rolled back.
    pub fn execute(&self, plan: &DeployPlan, sink: &mut dyn DeployEventSink) -> DeployResult {
        sink.on_event(DeployEvent::Started {
            site: plan.site.name().to_string(),
            file_count: plan.steps.len(),
        });

        let mut result = DeployResult::default();
        for (index, step) in plan.steps.iter().enumerate() {
            sink.on_event(DeployEvent::FileStarted {
                index,
                destination: step.destination.clone(),
            });

            let outcome = self.copy(step, &plan.working_tree_root);
            match &outcome {
                CopyOutcome::Copied => sink.on_event(DeployEvent::FileCopied {
                    index,
                    destination: step.destination.clone(),
                }),
                CopyOutcome::Failed { error } => sink.on_event(DeployEvent::FileFailed {
                    index,
                    destination: step.destination.clone(),
                    error: error.clone(),
                }),
            }

            result.results.push(FileResult {
                step: step.clone(),
                outcome,
            });
        }

        sink.on_event(DeployEvent::Completed {
            copied: result.copied(),
            failed: result.failed(),
        });
        result
    }

    fn copy(&self, step: &CopyStep, cwd: &Path) -> CopyOutcome {
        let Some(invocation) = Invocation::from_argv(&self.copy_command) else {
            return CopyOutcome::Failed {
                error: "no copy command configured".to_string(),
            };
        };
        let invocation = invocation
            .arg(&step.source)
            .arg(&step.destination)
            .current_dir(cwd);

        match self.runner.run(&invocation) {
            Ok(output) if output.is_success() => CopyOutcome::Copied,
            Ok(output) => {
                let stderr = output.stderr.trim();
                let error = if stderr.is_empty() {
                    match output.code {
                        Some(code) => format!("exit status {code}"),
                        None => "terminated by signal".to_string(),
                    }
                } else {
                    stderr.to_string()
                };
                CopyOutcome::Failed { error }
            }
            Err(err) => CopyOutcome::Failed {
                error: err.to_string(),
            },
        }
    }
}
