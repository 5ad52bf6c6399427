//! Error types for input validation and reference lookups

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A numeric input was outside the range the calculation accepts.
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Pipe size label not present in the conversion table.
    #[error("unknown pipe size: {label}{}", format_suggestions(.suggestions))]
    UnknownPipeSize {
        label: String,
        suggestions: Vec<String>,
    },

    /// Refrigerant not present in the reference table.
    #[error("unknown refrigerant: {name}{}", format_suggestions(.suggestions))]
    UnknownRefrigerant {
        name: String,
        suggestions: Vec<String>,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(". Did you mean '{}'?", only),
        _ => format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
