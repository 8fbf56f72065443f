use thiserror::Error;

/// Error type that captures tracker and persistence failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid input: {0:?} is not a numeric amount")]
    InvalidInput(String),
    #[error("Expense amount cannot be negative: {0}")]
    OutOfRange(f64),
    #[error("No expenses recorded. Add expenses before calculating the total.")]
    EmptyState,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Config(err.to_string())
    }
}
