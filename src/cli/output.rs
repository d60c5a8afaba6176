use colored::Colorize;
use std::{
    fmt,
    io::{self, Write},
};

/// Message categories used by the shell output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    Success,
    Warning,
    Error,
    Title,
}

fn apply_style(kind: MessageKind, text: String, styled: bool) -> String {
    if !styled {
        return text;
    }
    match kind {
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Warning => text.bright_yellow().to_string(),
        MessageKind::Error => text.bright_red().to_string(),
        MessageKind::Title => text.bold().to_string(),
        MessageKind::Plain => text,
    }
}

/// Line-oriented writer for shell output.
///
/// Styling is only applied when `styled` is set, so scripted sessions and tests see plain text.
pub struct Output<W: Write> {
    writer: W,
    styled: bool,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, styled: bool) -> Self {
        Self { writer, styled }
    }

    pub fn plain(writer: W) -> Self {
        Self::new(writer, false)
    }

    pub fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        let formatted = apply_style(kind, message.to_string(), self.styled);
        writeln!(self.writer, "{formatted}")
    }

    pub fn line(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Plain, message)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Warning, message)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Error, message)
    }

    pub fn title(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Title, message)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Writes a prompt without a trailing newline and flushes it.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
