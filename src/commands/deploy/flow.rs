//! The interactive deploy workflow as an explicit state machine
//!
//! ```text
//! SelectingSite -> InspectingCommit -> Reporting -> NoOp
//!                                               \-> AwaitingConfirmation -> Skipped
//!                                                                        \-> Copying -> Done
//! ```
//!
//! Quitting from the menu, Ctrl-C at a prompt and an unreadable repository
//! end the run early as `Aborted`.

use std::io::Write;

use anyhow::{bail, Result};

use sitepush::application::{inspect_last_commit, list_sites, DeployPlan, DeployResult, DeployUseCase};
use sitepush::config::Config;
use sitepush::domain::ports::{CommandRunner, Repository};
use sitepush::domain::value_objects::{ChangedFile, Site, SiteEntry};

use super::sink::ConsoleSink;
use crate::ui::context::UiContext;
use crate::ui::prompt::{PromptError, Prompter};
use crate::ui::views::changes::{render_change_report, render_no_changes, CONFIRM_PROMPT};
use crate::ui::views::commit::render_last_commit;
use crate::ui::views::copy::render_deploy_summary;
use crate::ui::views::sites::{render_site_menu, MENU_PROMPT};

/// The only answer that starts the copy.
pub const CONFIRM_ANSWER: &str = "y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    Quit,
    Interrupted,
    NotARepository,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every file was attempted; individual copies may have failed
    Done(DeployResult),
    /// Confirmation declined
    Skipped,
    /// Nothing to deploy
    NoOp,
    Aborted(AbortReason),
}

impl Outcome {
    /// Copy failures never change the exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Aborted(AbortReason::Quit) => 1,
            Outcome::Aborted(AbortReason::Interrupted) => 130,
            Outcome::Aborted(AbortReason::NotARepository)
            | Outcome::Done(_)
            | Outcome::Skipped
            | Outcome::NoOp => 0,
        }
    }
}

enum State {
    SelectingSite,
    InspectingCommit(Site),
    Reporting { site: Site, files: Vec<ChangedFile> },
    AwaitingConfirmation(DeployPlan),
    Copying(DeployPlan),
    Finished(Outcome),
}

/// Everything one run talks to.
pub struct DeployFlow<'a> {
    pub runner: &'a dyn CommandRunner,
    pub repo: &'a dyn Repository,
    pub prompter: &'a mut dyn Prompter,
    pub config: &'a Config,
    pub ui: UiContext,
    pub out: &'a mut dyn Write,
}

impl DeployFlow<'_> {
    pub fn run(mut self) -> Result<Outcome> {
        let deployer = DeployUseCase::new(
            self.runner,
            self.config.layout(),
            self.config.deploy.copy_command.clone(),
        )?;

        let mut state = State::SelectingSite;
        loop {
            state = match state {
                State::SelectingSite => self.select_site()?,
                State::InspectingCommit(site) => self.inspect(site)?,
                State::Reporting { site, files } => self.report(&deployer, site, files)?,
                State::AwaitingConfirmation(plan) => self.confirm(plan)?,
                State::Copying(plan) => self.copy(&deployer, plan)?,
                State::Finished(outcome) => return Ok(outcome),
            };
        }
    }

    fn select_site(&mut self) -> Result<State> {
        let menu = list_sites(self.runner, &self.config.sites.list_command)?;
        if let Some(site) = menu.sole_site() {
            return Ok(State::InspectingCommit(site.clone()));
        }

        write!(self.out, "{}", render_site_menu(&menu, &self.ui))?;
        let Some(answer) = answered(self.prompter.choose(MENU_PROMPT, &menu.choices()))? else {
            return Ok(aborted(AbortReason::Interrupted));
        };

        match answer.parse::<usize>().ok().and_then(|n| menu.entry(n)) {
            Some(SiteEntry::Site(site)) => Ok(State::InspectingCommit(site)),
            Some(SiteEntry::Quit) => Ok(aborted(AbortReason::Quit)),
            None => bail!("'{answer}' is not a menu entry"),
        }
    }

    fn inspect(&mut self, site: Site) -> Result<State> {
        let inspection = match inspect_last_commit(self.repo, &self.config.excluded_dirs()) {
            Ok(inspection) => inspection,
            Err(err) if err.is_repository_error() => {
                return Ok(aborted(AbortReason::NotARepository))
            }
            Err(err) => return Err(err.into()),
        };

        write!(self.out, "{}", render_last_commit(&inspection, &self.ui))?;
        Ok(State::Reporting {
            site,
            files: inspection.changed_files,
        })
    }

    fn report<R: CommandRunner>(
        &mut self,
        deployer: &DeployUseCase<R>,
        site: Site,
        files: Vec<ChangedFile>,
    ) -> Result<State> {
        if files.is_empty() {
            write!(self.out, "{}", render_no_changes(&self.ui))?;
            return Ok(State::Finished(Outcome::NoOp));
        }

        let plan = deployer.plan(&site, &files, self.repo.working_tree_root());
        write!(self.out, "{}", render_change_report(&plan, &self.ui))?;
        Ok(State::AwaitingConfirmation(plan))
    }

    fn confirm(&mut self, plan: DeployPlan) -> Result<State> {
        let Some(answer) = answered(self.prompter.input(CONFIRM_PROMPT))? else {
            return Ok(aborted(AbortReason::Interrupted));
        };

        if answer == CONFIRM_ANSWER {
            Ok(State::Copying(plan))
        } else {
            Ok(State::Finished(Outcome::Skipped))
        }
    }

    fn copy<R: CommandRunner>(&mut self, deployer: &DeployUseCase<R>, plan: DeployPlan) -> Result<State> {
        let result = {
            let mut sink = ConsoleSink::new(&plan, self.ui, &mut *self.out);
            deployer.execute(&plan, &mut sink)
        };

        write!(
            self.out,
            "\n{}",
            render_deploy_summary(plan.site.name(), &result, &self.ui)
        )?;
        Ok(State::Finished(Outcome::Done(result)))
    }
}

fn aborted(reason: AbortReason) -> State {
    State::Finished(Outcome::Aborted(reason))
}

/// `Ok(None)` when the user pressed Ctrl-C at the prompt.
fn answered(result: std::result::Result<String, PromptError>) -> Result<Option<String>> {
    match result {
        Ok(answer) => Ok(Some(answer)),
        Err(PromptError::Interrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
