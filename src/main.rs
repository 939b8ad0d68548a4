//! sitepush CLI - deploy the last commit of a check_mk checkout into an OMD site
//!
//! Usage: sitepush [--config PATH] [--color WHEN] [--no-animation] [-v...]
//!
//! Exit status:
//!   0    deployed, nothing to deploy, declined, or not in a repository
//!   1    quit from the site menu, or a fatal error
//!   130  interrupted

mod cli;
mod commands;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

/// Exit status after Ctrl-C.
const INTERRUPTED: i32 = 130;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // SIGINT outside a prompt: the copy spinner hides the cursor, so show
    // it again and leave without output
    ctrlc::set_handler(|| {
        let _ = crossterm::execute!(io::stdout(), crossterm::cursor::Show);
        std::process::exit(INTERRUPTED);
    })?;

    let outcome = commands::deploy::cmd_deploy(&cli)?;
    match outcome.exit_code() {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::deploy::Outcome;

    #[test]
    fn interrupt_code_matches_outcome() {
        assert_eq!(
            Outcome::Aborted(commands::deploy::AbortReason::Interrupted).exit_code(),
            INTERRUPTED
        );
    }
}
