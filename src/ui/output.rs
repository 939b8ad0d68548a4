use std::io::{self, Write};

use sitepush::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    let _ = write_config_warnings(&mut io::stderr(), ui, warnings);
}

fn write_config_warnings(
    out: &mut dyn Write,
    ui: &UiContext,
    warnings: &[ConfigWarning],
) -> io::Result<()> {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        match w.line {
            Some(line) => writeln!(
                out,
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            )?,
            None => writeln!(
                out,
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                w.file.display()
            )?,
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?\n", suggestion)?;
        }
    }
    Ok(())
}
