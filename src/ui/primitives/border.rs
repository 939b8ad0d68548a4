use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use crate::ui::theme::{borders as u, borders_ascii as a};
        match self {
            BorderChar::TopLeft => pick(supports_unicode, u::TOP_LEFT, a::TOP_LEFT),
            BorderChar::TopRight => pick(supports_unicode, u::TOP_RIGHT, a::TOP_RIGHT),
            BorderChar::BottomLeft => pick(supports_unicode, u::BOTTOM_LEFT, a::BOTTOM_LEFT),
            BorderChar::BottomRight => pick(supports_unicode, u::BOTTOM_RIGHT, a::BOTTOM_RIGHT),
            BorderChar::Horizontal => pick(supports_unicode, u::HORIZONTAL, a::HORIZONTAL),
            BorderChar::Vertical => pick(supports_unicode, u::VERTICAL, a::VERTICAL),
        }
    }
}

fn pick(supports_unicode: bool, unicode: &'static str, ascii: &'static str) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}

/// A horizontal rule with a centered title, `width` columns wide.
///
/// The title is never truncated; a title wider than `width` gets two
/// horizontal characters on each side.
pub fn titled_rule(title: &str, width: usize, supports_unicode: bool) -> String {
    let h = BorderChar::Horizontal.render(supports_unicode);
    let label = format!(" {title} ");
    let fill = width.saturating_sub(label.width()).max(4);
    let left = fill / 2;
    let right = fill - left;
    format!("{}{}{}", h.repeat(left), label, h.repeat(right))
}
