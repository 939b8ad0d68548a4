use std::io;

use dialoguer::Input;
use thiserror::Error;

use crate::ui::context::UiContext;
use crate::ui::theme::SitepushTheme;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Ctrl-C while the prompt owned the terminal
    #[error("interrupted")]
    Interrupted,

    #[error("prompt failed: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            PromptError::Interrupted
        } else {
            PromptError::Io(err)
        }
    }
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        PromptError::from(io::Error::from(err))
    }
}

/// The two questions the deploy flow asks.
pub trait Prompter {
    /// Ask until the answer is one of `choices`.
    fn choose(&mut self, prompt: &str, choices: &[String]) -> Result<String, PromptError>;

    /// Free-form answer; may be empty.
    fn input(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Line-edited prompts on the controlling terminal.
pub struct DialoguerPrompter {
    theme: SitepushTheme,
}

impl DialoguerPrompter {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            theme: SitepushTheme::new(ui.color, ui.unicode),
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn choose(&mut self, prompt: &str, choices: &[String]) -> Result<String, PromptError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("{} [{}]", prompt, choices.join("/")))
            .validate_with(|input: &String| -> Result<(), String> {
                if choices.iter().any(|c| c == input.trim()) {
                    Ok(())
                } else {
                    Err("Please select one of the available options".to_string())
                }
            })
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn input(&mut self, prompt: &str) -> Result<String, PromptError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
