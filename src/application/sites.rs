//! Site enumeration

use crate::domain::ports::{CommandRunner, Invocation};
use crate::domain::value_objects::SiteMenu;
use crate::error::{SitepushError, SitepushResult};

/// Run the site listing command and build the menu from its output.
///
/// A missing command, a non-zero exit and an empty listing are all
/// environment precondition failures.
pub fn list_sites(runner: &dyn CommandRunner, command: &[String]) -> SitepushResult<SiteMenu> {
    let invocation = Invocation::from_argv(command).ok_or_else(|| SitepushError::EmptyCommand {
        setting: "sites.list_command".to_string(),
    })?;

    let output = runner.run(&invocation)?;
    if !output.is_success() {
        return Err(SitepushError::CommandFailed {
            program: invocation.to_string(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        });
    }

    let menu = SiteMenu::parse(&output.stdout);
    if menu.is_empty() {
        return Err(SitepushError::NoSites);
    }
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::CommandOutput;
    use crate::domain::value_objects::Site;
    use crate::testing::FakeRunner;

    fn omd_sites() -> Vec<String> {
        vec!["omd".to_string(), "sites".to_string()]
    }

    #[test]
    fn lists_sites_from_command_output() {
        let runner = FakeRunner::new().respond(
            "omd",
            CommandOutput::success("SITE             VERSION          COMMENTS\n"),
        );
        let menu = list_sites(&runner, &omd_sites()).unwrap();
        assert_eq!(menu.sites(), &[Site::new("SITE")]);
        assert_eq!(runner.calls()[0].args_lossy(), vec!["sites"]);
    }

    #[test]
    fn parses_multiple_sites() {
        let runner = FakeRunner::new().respond(
            "omd",
            CommandOutput::success("prod 2.3.0p1 default\nstaging 2.4.0\n\n"),
        );
        let menu = list_sites(&runner, &omd_sites()).unwrap();
        assert_eq!(menu.sites(), &[Site::new("prod"), Site::new("staging")]);
    }

    #[test]
    fn missing_command_is_fatal() {
        let runner = FakeRunner::new().missing("omd");
        let err = list_sites(&runner, &omd_sites()).unwrap_err();
        assert!(matches!(err, SitepushError::CommandSpawn { .. }));
    }

    #[test]
    fn failing_command_is_fatal() {
        let runner = FakeRunner::new().respond("omd", CommandOutput::failure(2, "omd: broken\n"));
        let err = list_sites(&runner, &omd_sites()).unwrap_err();
        assert!(matches!(err, SitepushError::CommandFailed { code: Some(2), .. }));
    }

    #[test]
    fn empty_listing_is_no_sites() {
        let runner = FakeRunner::new().respond("omd", CommandOutput::success("\n"));
        let err = list_sites(&runner, &omd_sites()).unwrap_err();
        assert!(matches!(err, SitepushError::NoSites));
    }

    #[test]
    fn empty_command_is_rejected() {
        let runner = FakeRunner::new();
        let err = list_sites(&runner, &[]).unwrap_err();
        assert!(matches!(err, SitepushError::EmptyCommand { .. }));
        assert!(runner.calls().is_empty());
    }
}
