//! System command runner backed by `std::process`

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutput, CommandRunner, Invocation};
use crate::error::{SitepushError, SitepushResult};

/// Runs commands as real child processes.
///
/// stdout and stderr are captured; stdin stays attached to the terminal so
/// `sudo` can still ask for a password.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, invocation: &Invocation) -> SitepushResult<CommandOutput> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output().map_err(|source| SitepushError::CommandSpawn {
            program: invocation.program.clone(),
            source,
        })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
