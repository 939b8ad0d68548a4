use sitepush::domain::value_objects::SiteMenu;

use crate::ui::context::UiContext;
use crate::ui::primitives::border::titled_rule;
use crate::ui::primitives::text::ColoredText;

pub const MENU_TITLE: &str = "Available sites";
pub const MENU_PROMPT: &str = "Select a site";

const RULE_WIDTH: usize = 40;

/// Numbered site menu, quit entry last.
pub fn render_site_menu(menu: &SiteMenu, ui: &UiContext) -> String {
    let width = RULE_WIDTH.min(usize::from(ui.caps.width));
    let rule = titled_rule(MENU_TITLE, width, ui.unicode);
    let mut out = ColoredText::info(rule).render(ui.color);
    out.push('\n');
    for (number, entry) in (1..).zip(menu.entries()) {
        out.push_str(&format!("{:<3}{}\n", number, entry.label()));
    }
    out
}
