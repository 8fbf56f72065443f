//! Interactive expense-entry session and its script-mode twin.

pub mod output;

use std::{
    borrow::Cow,
    io::{self, Lines, StdinLock},
};

use dialoguer::{theme::ColorfulTheme, Input};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use thiserror::Error;

use crate::{
    config::{self, ConfigManager},
    errors::TrackerError,
    expense::Tracker,
    storage,
};

const DONE_COMMAND: &str = "DONE";
const SEARCH_COMMAND: &str = "SEARCH";
const CATEGORY_PROMPT: &str = "expense> ";

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Banner printed before the entry loop starts.
pub fn print_instructions() {
    output::section("Personal Expense Tracker");
    output::info(format!(
        "Log expenses by category and amount. Type {} to look up a category, {} to finish.",
        SEARCH_COMMAND, DONE_COMMAND
    ));
}

/// Runs one full session: load, entry loop, summary, save.
///
/// Any validation error aborts the session before the save; records entered
/// in an aborted session are not persisted.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("EXPENSE_CORE_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config = ConfigManager::new()?.load()?;
    let data_file = config::resolve_data_file(&config);

    let existing = data_file.exists();
    let mut tracker = Tracker::from_expenses(storage::load_expenses(&data_file)?);
    if existing {
        output::info(format!(
            "Welcome back! Loaded {} expense(s) from {}.",
            tracker.len(),
            data_file.display()
        ));
    } else {
        output::info("No existing expense file found. Starting fresh.");
    }

    let mut prompter = Prompter::new(mode)?;
    run_entry_loop(&mut tracker, &mut prompter)?;

    display_expenses(&tracker);
    let total = tracker.total()?;
    output::info(format!("Total spending: ${}", total));

    storage::save_expenses(&data_file, tracker.expenses())?;
    output::success(format!("Expenses saved to {}.", data_file.display()));
    Ok(())
}

fn run_entry_loop(tracker: &mut Tracker, prompter: &mut Prompter) -> Result<(), CliError> {
    loop {
        let Some(line) = prompter.read_category()? else {
            break;
        };
        let category = line.trim();
        if category.is_empty() {
            continue;
        }
        if category == DONE_COMMAND {
            break;
        }
        if category == SEARCH_COMMAND {
            let Some(needle) = prompter.read_value("Enter category to search")? else {
                break;
            };
            report_matches(tracker, needle.trim());
            continue;
        }

        let Some(raw_amount) = prompter.read_value(&format!("Amount spent on {}", category))?
        else {
            break;
        };
        let expense = tracker.add_expense(category, &raw_amount)?;
        output::success(format!(
            "Added expense: {} - ${}",
            expense.category, expense.amount
        ));
    }
    Ok(())
}

fn report_matches(tracker: &Tracker, category: &str) {
    let matches = tracker.search(category);
    if matches.is_empty() {
        output::warning(format!("No expenses found in category: {}", category));
        return;
    }
    for expense in matches {
        println!("- {}: ${}", expense.category, expense.amount);
    }
}

fn display_expenses(tracker: &Tracker) {
    if tracker.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    output::section("Recorded Expenses");
    for expense in tracker.expenses() {
        println!("- {}: ${}", expense.category, expense.amount);
    }
}

/// Line source for the session: rustyline + dialoguer when attached to a
/// terminal, raw stdin lines in script mode.
enum Prompter {
    Interactive {
        editor: Editor<CommandHelper, DefaultHistory>,
        theme: ColorfulTheme,
    },
    Script {
        lines: Lines<StdinLock<'static>>,
    },
}

impl Prompter {
    fn new(mode: CliMode) -> Result<Self, CliError> {
        match mode {
            CliMode::Interactive => {
                let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
                editor.set_helper(Some(CommandHelper::new()));
                editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
                Ok(Prompter::Interactive {
                    editor,
                    theme: ColorfulTheme::default(),
                })
            }
            CliMode::Script => Ok(Prompter::Script {
                lines: io::stdin().lines(),
            }),
        }
    }

    /// Reads the next category line. `None` means end of input, which the
    /// entry loop treats the same as `DONE`.
    fn read_category(&mut self) -> Result<Option<String>, CliError> {
        match self {
            Prompter::Interactive { editor, .. } => match editor.readline(CATEGORY_PROMPT) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        editor.add_history_entry(trimmed).ok();
                    }
                    Ok(Some(line))
                }
                Err(ReadlineError::Eof) => Ok(None),
                Err(ReadlineError::Interrupted) => {
                    output::info("Interrupted. Wrapping up.");
                    Ok(None)
                }
                Err(err) => Err(err.into()),
            },
            Prompter::Script { lines } => Ok(lines.next().transpose()?),
        }
    }

    /// Reads a follow-up value (amount or search needle) for `label`.
    fn read_value(&mut self, label: &str) -> Result<Option<String>, CliError> {
        match self {
            Prompter::Interactive { theme, .. } => {
                let value = Input::<String>::with_theme(theme)
                    .with_prompt(label)
                    .allow_empty(true)
                    .interact_text()?;
                Ok(Some(value))
            }
            Prompter::Script { lines } => Ok(lines.next().transpose()?),
        }
    }
}

struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new() -> Self {
        Self {
            commands: vec![DONE_COMMAND, SEARCH_COMMAND],
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Commands are only meaningful as the whole category line.
        if prefix.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let needle = prefix.to_ascii_uppercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}
