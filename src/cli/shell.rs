use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use tracing::{debug, info, warn};

use crate::{
    config::{Config, ConfigManager},
    errors::{CliError, ExpenseError},
    ledger::ExpenseTracker,
};

use super::{
    io::{EditorSource, InputEvent, LineSource, ScriptSource},
    menu::{self, INVALID_OPTION, MENU_PROMPT},
    output::Output,
    state::{FieldCollection, Request, ShellState},
    table::{expense_table, format_amount, TableRenderer},
};

/// Why the shell loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user chose "save and exit" and the store was written.
    Saved,
    /// Input ended before "save and exit"; nothing was written.
    InputClosed,
    /// The user interrupted and confirmed discarding the session.
    Interrupted,
}

enum Input {
    Line(String),
    Quit(ExitReason),
}

enum Step {
    Next(ShellState),
    Quit(ExitReason),
}

/// Menu-driven session over an [`ExpenseTracker`].
pub struct Shell<'a, W: Write> {
    tracker: &'a mut ExpenseTracker,
    data_path: PathBuf,
    currency: String,
    out: Output<W>,
    state: ShellState,
}

impl<'a, W: Write> Shell<'a, W> {
    pub fn new(
        tracker: &'a mut ExpenseTracker,
        data_path: PathBuf,
        config: &Config,
        out: Output<W>,
    ) -> Self {
        Self {
            tracker,
            data_path,
            currency: config.currency_symbol.clone(),
            out,
            state: ShellState::default(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn into_output(self) -> Output<W> {
        self.out
    }

    /// Runs until the user saves and exits, input ends, or an interrupt is confirmed.
    pub fn run<S: LineSource>(&mut self, source: &mut S) -> Result<ExitReason, CliError> {
        loop {
            let step = match std::mem::take(&mut self.state) {
                ShellState::Finished => {
                    self.state = ShellState::Finished;
                    info!("session finished");
                    return Ok(ExitReason::Saved);
                }
                ShellState::AwaitingMenuChoice => self.choose(source)?,
                ShellState::CollectingFields(collection) => self.collect(source, collection)?,
                ShellState::Executing(request) => Step::Next(self.execute(request)?),
            };
            match step {
                Step::Next(next) => self.state = next,
                Step::Quit(reason) => return self.quit(reason),
            }
        }
    }

    fn choose<S: LineSource>(&mut self, source: &mut S) -> Result<Step, CliError> {
        menu::render(&mut self.out)?;
        let line = match self.read(source, MENU_PROMPT)? {
            Input::Line(line) => line,
            Input::Quit(reason) => return Ok(Step::Quit(reason)),
        };
        match ShellState::after_choice(&line)? {
            Some(next) => Ok(Step::Next(next)),
            None => {
                debug!(choice = line.trim(), "invalid menu choice");
                self.out.warning(INVALID_OPTION)?;
                Ok(Step::Next(ShellState::AwaitingMenuChoice))
            }
        }
    }

    fn collect<S: LineSource>(
        &mut self,
        source: &mut S,
        mut collection: FieldCollection,
    ) -> Result<Step, CliError> {
        if let Some(field) = collection.next_field() {
            let line = match self.read(source, field.prompt)? {
                Input::Line(line) => line,
                Input::Quit(reason) => return Ok(Step::Quit(reason)),
            };
            if let Err(err) = collection.accept(&line) {
                debug!(field = field.name, %err, "rejected field input");
                self.out.warning(err)?;
            }
        }
        Ok(Step::Next(ShellState::after_fields(collection)?))
    }

    fn execute(&mut self, request: Request) -> Result<ShellState, CliError> {
        debug!(?request, "executing");
        match request {
            Request::Add {
                category,
                amount,
                date,
                note,
            } => match self
                .tracker
                .add(category, amount, date.as_deref(), Some(note.as_str()))
            {
                Ok(_) => self.out.success("Expense added.")?,
                Err(ExpenseError::Validation(message)) => self.out.warning(message)?,
                Err(err) => return Err(err.into()),
            },
            Request::List { month } => {
                let expenses = self.tracker.list(month.as_deref());
                let table = expense_table(&expenses, &self.currency);
                TableRenderer::render(&table, &mut self.out)?;
            }
            Request::MonthlyTotal { month } => {
                let total = self.tracker.monthly_total(&month);
                self.out.line(format!(
                    "Total expenses for {month}: {}",
                    format_amount(&self.currency, total)
                ))?;
            }
            Request::CategoryTotal { month, category } => {
                let total = self.tracker.category_total(&month, &category);
                self.out.line(format!(
                    "Total for {category} in {month}: {}",
                    format_amount(&self.currency, total)
                ))?;
            }
            Request::SaveAndExit => {
                self.tracker.save(&self.data_path)?;
                self.out.success("Expenses saved. Goodbye!")?;
                self.out.flush()?;
                return Ok(ShellState::Finished);
            }
        }
        Ok(ShellState::AwaitingMenuChoice)
    }

    fn read<S: LineSource>(&mut self, source: &mut S, prompt: &str) -> Result<Input, CliError> {
        loop {
            if !source.renders_prompt() {
                self.out.prompt(prompt)?;
            }
            match source.read_line(prompt)? {
                InputEvent::Line(line) => {
                    // Piped input is not echoed, so end the prompt line ourselves.
                    if !source.renders_prompt() {
                        self.out.blank_line()?;
                    }
                    return Ok(Input::Line(line));
                }
                InputEvent::Closed => return Ok(Input::Quit(ExitReason::InputClosed)),
                InputEvent::Interrupted => {
                    if source.confirm_discard()? {
                        return Ok(Input::Quit(ExitReason::Interrupted));
                    }
                }
            }
        }
    }

    fn quit(&mut self, reason: ExitReason) -> Result<ExitReason, CliError> {
        warn!(?reason, unsaved = self.tracker.len(), "session ended without saving");
        self.out.blank_line()?;
        self.out.warning("Exiting without saving.")?;
        self.out.flush()?;
        self.state = ShellState::Finished;
        Ok(reason)
    }
}

/// Loads configuration and expenses, then runs the shell on stdin/stdout.
///
/// A terminal gets the line editor; piped input is read line by line with prompts echoed.
pub fn run_cli(config_manager: &ConfigManager) -> Result<ExitReason, CliError> {
    let config = config_manager.load_or_init()?;
    let data_path = config_manager.data_path(&config);

    let mut tracker = ExpenseTracker::new();
    tracker.load(&data_path)?;

    let stdout = io::stdout();
    let styled = config.color && stdout.is_terminal();
    let mut shell = Shell::new(&mut tracker, data_path, &config, Output::new(stdout, styled));

    if io::stdin().is_terminal() {
        let mut source = EditorSource::new()?;
        shell.run(&mut source)
    } else {
        let mut source = ScriptSource::new(io::stdin().lock());
        shell.run(&mut source)
    }
}
