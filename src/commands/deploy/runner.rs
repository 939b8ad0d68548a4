//! Command runner that echoes what it runs

use sitepush::domain::ports::{CommandOutput, CommandRunner, Invocation};
use sitepush::SitepushResult;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

/// Wraps another runner; with `-v` prints each command to stderr before it
/// runs, with `-vv` also the stdout of commands that failed.
pub struct VerboseRunner<'a> {
    inner: &'a dyn CommandRunner,
    ui: UiContext,
}

impl<'a> VerboseRunner<'a> {
    pub fn new(inner: &'a dyn CommandRunner, ui: UiContext) -> Self {
        Self { inner, ui }
    }
}

impl CommandRunner for VerboseRunner<'_> {
    fn run(&self, invocation: &Invocation) -> SitepushResult<CommandOutput> {
        if let Some(line) = describe(invocation, &self.ui) {
            eprintln!("{line}");
        }
        let output = self.inner.run(invocation)?;
        if let Some(text) = failure_output(&output, &self.ui) {
            eprintln!("{text}");
        }
        Ok(output)
    }
}

fn describe(invocation: &Invocation, ui: &UiContext) -> Option<String> {
    (ui.verbose >= 1).then(|| ColoredText::dim(format!("$ {invocation}")).render(ui.color))
}

fn failure_output(output: &CommandOutput, ui: &UiContext) -> Option<String> {
    let stdout = output.stdout.trim_end();
    (ui.verbose >= 2 && !output.is_success() && !stdout.is_empty())
        .then(|| ColoredText::dim(stdout).render(ui.color))
}
