use sitepush::application::{CopyOutcome, CopyStep, DeployResult};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const COPYING: &str = "Copying files...";

/// Marker line for one attempted copy.
///
/// A failure is preceded by the captured error text so the marker stays the
/// last thing printed for each file.
pub fn render_copy_outcome(step: &CopyStep, outcome: &CopyOutcome, ui: &UiContext) -> String {
    match outcome {
        CopyOutcome::Copied => format!(
            "  '{}' {}\n",
            step.display_name(),
            Icon::Success.colored(ui.color, ui.unicode)
        ),
        CopyOutcome::Failed { error } => format!(
            "\n{}\n  '{}' {}\n",
            ColoredText::error(format!(" Error copying file: {error}")).render(ui.color),
            step.display_name(),
            Icon::Error.colored(ui.color, ui.unicode)
        ),
    }
}

pub fn render_deploy_summary(site: &str, result: &DeployResult, ui: &UiContext) -> String {
    let mut summary = if result.is_success() {
        ResultSummary::success(format!("Deployed to '{site}'"))
    } else {
        ResultSummary::partial(format!("Deployed to '{site}' with errors"))
    };

    summary.add_stat("copied", result.copied());
    if result.failed() > 0 {
        summary.add_stat("failed", result.failed());
        for failed in result
            .results
            .iter()
            .filter(|r| matches!(r.outcome, CopyOutcome::Failed { .. }))
        {
            summary.add_warning(failed.step.destination.display().to_string());
        }
        summary.with_next_step("fix the errors above and commit again, or copy by hand");
    }

    summary.render(ui.color, ui.unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitepush::application::FileResult;
    use sitepush::domain::value_objects::ChangedFile;
    use std::path::PathBuf;

    fn step(path: &str) -> CopyStep {
        CopyStep {
            file: ChangedFile::new(path),
            source: PathBuf::from("/home/dev/check_mk").join(path),
            destination: PathBuf::from("/omd/sites/prod/lib/python3").join(path),
        }
    }

    #[test]
    fn success_marker_uses_file_name() {
        let line = render_copy_outcome(&step("cmk/plugin.py"), &CopyOutcome::Copied, &UiContext::unicode());
        assert_eq!(line, "  'plugin.py' ✓\n");
    }

    #[test]
    fn failure_marker_follows_error_text() {
        let outcome = CopyOutcome::Failed {
            error: "cp: cannot stat 'Pipfile': No such file or directory".to_string(),
        };
        let line = render_copy_outcome(&step("Pipfile"), &outcome, &UiContext::unicode());
        assert_eq!(
            line,
            "\n Error copying file: cp: cannot stat 'Pipfile': No such file or directory\n  'Pipfile' ✗\n"
        );
    }

    #[test]
    fn ascii_markers() {
        let line = render_copy_outcome(&step("Pipfile"), &CopyOutcome::Copied, &UiContext::plain());
        insta::assert_snapshot!(line.trim(), @"'Pipfile' [OK]");
    }

    #[test]
    fn summary_counts_copied_and_failed() {
        let result = DeployResult {
            results: vec![
                FileResult {
                    step: step("cmk/plugin.py"),
                    outcome: CopyOutcome::Copied,
                },
                FileResult {
                    step: step("Pipfile"),
                    outcome: CopyOutcome::Failed {
                        error: "denied".to_string(),
                    },
                },
            ],
        };
        let rendered = render_deploy_summary("prod", &result, &UiContext::plain());
        assert!(rendered.contains("[WARN] Deployed to 'prod' with errors"));
        assert!(rendered.contains("1 copied"));
        assert!(rendered.contains("1 failed"));
        assert!(rendered.contains("[WARN] /omd/sites/prod/lib/python3/Pipfile"));
    }

    #[test]
    fn summary_for_clean_run() {
        let result = DeployResult {
            results: vec![FileResult {
                step: step("Pipfile"),
                outcome: CopyOutcome::Copied,
            }],
        };
        let rendered = render_deploy_summary("prod", &result, &UiContext::plain());
        assert!(rendered.contains("[OK] Deployed to 'prod'"));
        assert!(!rendered.contains("failed"));
    }
}
