//! Property tests for copy plans and their execution.

use std::path::Path;

use proptest::prelude::*;

use sitepush::domain::ports::NoopEventSink;
use sitepush::{ChangedFile, DeployUseCase, Site, SiteLayout};

use crate::common::{relative_path, RecordingRunner};

fn copy_command() -> Vec<String> {
    vec!["sudo".to_string(), "cp".to_string()]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One copy per file, in plan order, whatever fails.
    #[test]
    fn property_every_file_is_attempted_once(
        paths in proptest::collection::vec(relative_path(), 0..=10),
        failing in proptest::collection::hash_set(0usize..10, 0..=10),
    ) {
        let files: Vec<ChangedFile> = paths.iter().map(ChangedFile::new).collect();
        let runner = RecordingRunner::failing(failing.iter().copied());
        let deployer = DeployUseCase::new(&runner, SiteLayout::default(), copy_command())
            .expect("copy command is set");
        let plan = deployer.plan(&Site::new("prod"), &files, Path::new("/repo"));

        let result = deployer.execute(&plan, &mut NoopEventSink);

        prop_assert_eq!(runner.call_count(), files.len());
        prop_assert_eq!(result.results.len(), files.len());
        let expected_failed = failing.iter().filter(|i| **i < files.len()).count();
        prop_assert_eq!(result.failed(), expected_failed);

        let destinations: Vec<String> = runner
            .calls
            .borrow()
            .iter()
            .map(|c| c.args_lossy().last().cloned().unwrap_or_default())
            .collect();
        let planned: Vec<String> = plan
            .destinations()
            .map(|d| d.display().to_string())
            .collect();
        prop_assert_eq!(destinations, planned);
    }

    /// PROPERTY: Destinations mirror the repository path under the site runtime dir.
    #[test]
    fn property_destination_mirrors_relative_path(
        site in "[a-z]{1,8}",
        path in relative_path(),
    ) {
        let runner = RecordingRunner::default();
        let deployer = DeployUseCase::new(&runner, SiteLayout::default(), copy_command())
            .expect("copy command is set");
        let plan = deployer.plan(&Site::new(site.as_str()), &[ChangedFile::new(path.as_str())], Path::new("/repo"));

        let expected = Path::new("/omd/sites").join(&site).join("lib/python3").join(&path);
        prop_assert_eq!(plan.steps[0].destination.clone(), expected);
        prop_assert_eq!(plan.steps[0].source.clone(), Path::new("/repo").join(&path));
    }
}
