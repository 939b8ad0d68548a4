use sitepush::application::CommitInspection;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

pub const REPOSITORY_HINT: &str = "Make sure you are in a check_mk git repository.";

/// Author, timestamp and message of HEAD.
///
/// Green when the commit is yours, yellow otherwise. The color is only a
/// hint; it never changes what gets deployed.
pub fn render_last_commit(inspection: &CommitInspection, ui: &UiContext) -> String {
    let commit = &inspection.commit;
    let text = format!(
        "\nLast commit: {}\t{}\n\n{:.>30}",
        commit.author,
        commit.formatted_timestamp(),
        commit.message
    );

    let styled = if inspection.own_commit {
        ColoredText::success(text)
    } else {
        ColoredText::warning(text)
    };
    let mut out = styled.render(ui.color);
    out.push('\n');
    out
}

/// Shown instead of a traceback when HEAD cannot be read.
pub fn render_repository_hint(ui: &UiContext) -> String {
    format!("\n{}\n", ColoredText::error(REPOSITORY_HINT).render(ui.color))
}
