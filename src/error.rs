use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanteenError {
    #[error("Invalid item '{name}': price must be a positive integer, got {price}")]
    InvalidItem { name: String, price: i64 },

    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("Unknown category '{input}'{}", suggestion_hint(.suggestion))]
    UnknownCategory {
        input: String,
        suggestion: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CanteenError>;
