use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// Lines at the bottom of the terminal that are redrawn in place.
///
/// Permanent output must go through [`LiveRegion::print_above`] while the
/// region is active, otherwise the next redraw erases it.
#[derive(Debug, Default)]
pub struct LiveRegion {
    last_lines: usize,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.update(out, "")
    }

    /// Replace the region's content.
    pub fn update(&mut self, out: &mut dyn Write, content: &str) -> io::Result<()> {
        self.erase(out)?;

        let mut content = content.to_string();
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        out.write_all(content.as_bytes())?;
        out.flush()?;

        self.last_lines = content.matches('\n').count();
        Ok(())
    }

    /// Write permanent text, then redraw `content` below it.
    pub fn print_above(&mut self, out: &mut dyn Write, text: &str, content: &str) -> io::Result<()> {
        self.erase(out)?;
        self.last_lines = 0;
        out.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        self.update(out, content)
    }

    fn erase(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let lines = self.last_lines.min(u16::MAX as usize) as u16;
        if lines == 0 {
            return Ok(());
        }

        out.queue(cursor::MoveUp(lines))?;
        for _ in 0..lines {
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            out.queue(cursor::MoveDown(1))?;
        }
        out.queue(cursor::MoveUp(lines))?;
        Ok(())
    }
}
