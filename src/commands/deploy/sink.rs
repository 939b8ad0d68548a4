//! Terminal rendering of copy-phase events

use std::io::Write;

use crossterm::{cursor, QueueableCommand};

use sitepush::application::{CopyOutcome, DeployPlan};
use sitepush::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::views::copy::{render_copy_outcome, COPYING};
use crate::ui::widgets::spinner::Spinner;

/// Prints one outcome line per file. With animation on, a spinner naming
/// the current file stays below the outcome lines until the phase ends, and
/// the cursor is hidden meanwhile.
pub struct ConsoleSink<'a> {
    plan: &'a DeployPlan,
    ui: UiContext,
    out: &'a mut dyn Write,
    live: Option<(LiveRegion, Spinner)>,
}

impl<'a> ConsoleSink<'a> {
    pub fn new(plan: &'a DeployPlan, ui: UiContext, out: &'a mut dyn Write) -> Self {
        Self {
            plan,
            ui,
            out,
            live: None,
        }
    }

    fn outcome(&mut self, index: usize, outcome: &CopyOutcome) {
        let Some(step) = self.plan.steps.get(index) else {
            return;
        };
        let line = render_copy_outcome(step, outcome, &self.ui);
        match &mut self.live {
            Some((region, spinner)) => {
                let _ = region.print_above(self.out, &line, &spinner.render(self.ui.unicode));
            }
            None => {
                let _ = self.out.write_all(line.as_bytes());
                let _ = self.out.flush();
            }
        }
    }
}

impl DeployEventSink for ConsoleSink<'_> {
    fn on_event(&mut self, event: DeployEvent) {
        match event {
            DeployEvent::Started { .. } => {
                if self.ui.animation {
                    let spinner = Spinner::new(COPYING);
                    let mut region = LiveRegion::new();
                    let _ = self.out.queue(cursor::Hide);
                    let _ = region.update(self.out, &spinner.render(self.ui.unicode));
                    self.live = Some((region, spinner));
                }
            }
            DeployEvent::FileStarted { index, destination } => {
                let total = self.plan.steps.len();
                if let Some((region, spinner)) = &mut self.live {
                    let name = destination
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    spinner.tick();
                    spinner.set_detail(format!("({}/{}) {}", index + 1, total, name));
                    let _ = region.update(self.out, &spinner.render(self.ui.unicode));
                }
            }
            DeployEvent::FileCopied { index, .. } => self.outcome(index, &CopyOutcome::Copied),
            DeployEvent::FileFailed { index, error, .. } => {
                self.outcome(index, &CopyOutcome::Failed { error })
            }
            DeployEvent::Completed { .. } => {
                if let Some((mut region, _)) = self.live.take() {
                    let _ = region.clear(self.out);
                    let _ = self.out.queue(cursor::Show);
                    let _ = self.out.flush();
                }
            }
        }
    }
}
