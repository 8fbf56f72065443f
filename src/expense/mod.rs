//! Expense domain models and the in-memory tracker that owns them.

use crate::errors::{Result, TrackerError};

/// A single category/amount record.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub category: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Owns the full expense sequence for one session, in insertion order.
///
/// Records are immutable once added; duplicate categories are kept as
/// separate entries, never merged.
#[derive(Debug, Default)]
pub struct Tracker {
    expenses: Vec<Expense>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records loaded from storage without revalidating them.
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Parses `raw_amount` and appends a new record on success.
    pub fn add_expense(&mut self, category: impl Into<String>, raw_amount: &str) -> Result<&Expense> {
        let trimmed = raw_amount.trim();
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| TrackerError::InvalidInput(trimmed.to_string()))?;
        if !amount.is_finite() {
            return Err(TrackerError::InvalidInput(trimmed.to_string()));
        }
        if amount < 0.0 {
            return Err(TrackerError::OutOfRange(amount));
        }

        self.expenses.push(Expense::new(category, amount));
        Ok(self.expenses.last().expect("record just pushed"))
    }

    /// Returns every record whose category matches exactly, in insertion order.
    pub fn search(&self, category: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| expense.category == category)
            .collect()
    }

    /// Sum of all recorded amounts. Asking for a total with no records is
    /// reported as an error rather than silently returning zero.
    pub fn total(&self) -> Result<f64> {
        if self.expenses.is_empty() {
            return Err(TrackerError::EmptyState);
        }
        Ok(self.expenses.iter().map(|expense| expense.amount).sum())
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }
}
