//! `sitepush` - the deploy command

mod flow;
mod runner;
mod sink;

use std::io::{self, Write};

use anyhow::Result;

use sitepush::config;
use sitepush::infrastructure::{GitRepository, SystemCommandRunner};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::prompt::DialoguerPrompter;
use crate::ui::views::commit::render_repository_hint;

pub use flow::{AbortReason, Outcome};

use flow::DeployFlow;
use runner::VerboseRunner;

pub fn cmd_deploy(cli: &Cli) -> Result<Outcome> {
    let loaded = config::resolve(cli.config.as_deref())?;
    let ui = UiContext::new(cli.verbose, cli.color, cli.no_animation, &loaded.config);

    if let Some(source) = &loaded.source {
        if ui.verbose > 0 {
            eprintln!("Using config {}", source.display());
        }
    }
    print_config_warnings(&ui, &loaded.warnings);

    let system = SystemCommandRunner::new();
    let runner = VerboseRunner::new(&system, ui);
    let mut stdout = io::stdout();

    let cwd = std::env::current_dir()?;
    let repo = match GitRepository::discover(&runner, &cwd) {
        Ok(repo) => repo,
        Err(err) if err.is_repository_error() => {
            if ui.verbose > 0 {
                eprintln!("{err}");
            }
            write!(stdout, "{}", render_repository_hint(&ui))?;
            return Ok(Outcome::Aborted(AbortReason::NotARepository));
        }
        Err(err) => return Err(err.into()),
    };

    let mut prompter = DialoguerPrompter::new(&ui);
    let outcome = DeployFlow {
        runner: &runner,
        repo: &repo,
        prompter: &mut prompter,
        config: &loaded.config,
        ui,
        out: &mut stdout,
    }
    .run()?;

    if outcome == Outcome::Aborted(AbortReason::NotARepository) {
        write!(stdout, "{}", render_repository_hint(&ui))?;
    }
    stdout.flush()?;
    Ok(outcome)
}
