use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::CliError;

const DISCARD_PROMPT: &str = "Discard unsaved expenses and exit?";

/// Outcome of asking the user for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Interrupted,
    Closed,
}

/// Source of user input lines for the shell.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent, CliError>;

    /// Whether `read_line` displays the prompt itself.
    fn renders_prompt(&self) -> bool;

    /// Asked after an interrupt; `true` ends the session without saving.
    fn confirm_discard(&mut self) -> Result<bool, CliError> {
        Ok(true)
    }
}

/// Interactive terminal input backed by `rustyline`.
pub struct EditorSource {
    editor: DefaultEditor,
    theme: ColorfulTheme,
}

impl EditorSource {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            theme: ColorfulTheme::default(),
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(InputEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Closed),
            Err(err) => Err(err.into()),
        }
    }

    fn renders_prompt(&self) -> bool {
        true
    }

    fn confirm_discard(&mut self) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(DISCARD_PROMPT)
            .default(false)
            .interact()?)
    }
}

/// Line-by-line input from any buffered reader (piped stdin, test fixtures).
pub struct ScriptSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<InputEvent, CliError> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(InputEvent::Closed);
        }
        let line = buffer
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(&buffer);
        Ok(InputEvent::Line(line.to_string()))
    }

    fn renders_prompt(&self) -> bool {
        false
    }
}
