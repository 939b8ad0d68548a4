use sitepush::application::DeployPlan;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

pub const CONFIRM_PROMPT: &str = " Press Y to copy";
pub const NO_CHANGES: &str = "No changed files.";

/// Destinations that a confirmed copy will write, in copy order.
pub fn render_change_report(plan: &DeployPlan, ui: &UiContext) -> String {
    let header = format!(" Update the following files on site '{}'", plan.site);
    let mut out = ColoredText::info(header).bold().render(ui.color);
    out.push('\n');
    for destination in plan.destinations() {
        out.push_str(&format!("  '{}'\n", destination.display()));
    }
    out.push('\n');
    out
}

pub fn render_no_changes(ui: &UiContext) -> String {
    format!("{}\n", ColoredText::info(NO_CHANGES).render(ui.color))
}
