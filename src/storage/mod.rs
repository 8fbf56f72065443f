//! Flat-text persistence for expense records.
//!
//! The format is one `<category> <amount>` pair per line, whitespace
//! separated, no header and no escaping. Categories containing whitespace
//! are not representable; see DESIGN.md for the accepted limitation.

use std::{fs, path::Path};

use crate::{errors::Result, expense::Expense};

/// Reads `(category, amount)` pairs from `path` until end-of-input or the
/// first malformed pair; a malformed tail is silently truncated. A missing
/// file is not an error; the tracker simply starts fresh.
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no expense file found, starting empty");
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)?;
    let mut expenses = Vec::new();
    let mut tokens = data.split_whitespace();
    while let Some(category) = tokens.next() {
        let amount = match tokens.next().map(str::parse::<f64>) {
            Some(Ok(amount)) => amount,
            // Dangling category or unparseable amount: truncate here.
            _ => break,
        };
        expenses.push(Expense::new(category, amount));
    }

    tracing::debug!(path = %path.display(), count = expenses.len(), "loaded expenses");
    Ok(expenses)
}

/// Overwrites `path` with every record in insertion order, staging to a
/// temporary file first so a failed write never clobbers the previous data.
pub fn save_expenses(path: &Path, expenses: &[Expense]) -> Result<()> {
    let mut contents = String::new();
    for expense in expenses {
        contents.push_str(&format!("{} {}\n", expense.category, expense.amount));
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(tmp, path)?;
    tracing::debug!(path = %path.display(), count = expenses.len(), "saved expenses");
    Ok(())
}
