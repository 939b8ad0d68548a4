const FRAMES_UNICODE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// A single-line spinner; advanced by hand, one frame per event.
#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
    detail: Option<String>,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
            detail: None,
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    /// Secondary text shown after the message, e.g. the file being copied.
    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = Some(detail.into());
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = if supports_unicode {
            FRAMES_UNICODE
        } else {
            FRAMES_ASCII
        };
        let frame = frames[self.current % frames.len()];
        match &self.detail {
            Some(detail) => format!("{} {} {}", frame, self.message, detail),
            None => format!("{} {}", frame, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_braille_frames_when_unicode_supported() {
        let s = Spinner::new("Copying files...");
        assert_eq!(s.render(true), "⠋ Copying files...");
    }

    #[test]
    fn render_uses_ascii_frames_when_unicode_unsupported() {
        let s = Spinner::new("Copying files...");
        assert!(s.render(false).starts_with('-'));
    }

    #[test]
    fn tick_advances_frame_and_wraps() {
        let mut s = Spinner::new("Copying files...");
        let first = s.render(false);
        s.tick();
        assert_ne!(first, s.render(false));
        for _ in 0..3 {
            s.tick();
        }
        assert_eq!(first, s.render(false));
    }

    #[test]
    fn detail_follows_message() {
        let mut s = Spinner::new("Copying files...");
        s.set_detail("(1/2) plugin.py");
        assert_eq!(s.render(false), "- Copying files... (1/2) plugin.py");
    }
}
