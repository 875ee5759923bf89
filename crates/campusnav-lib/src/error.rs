use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The source document lacks the expected feature collection structure.
    #[error("malformed map document: {message}")]
    MalformedInput { message: String },

    /// Map file could not be located at the resolved path.
    #[error("campus map not found at {path}")]
    MapNotFound { path: PathBuf },

    /// No suitable data directory could be resolved for this platform.
    #[error("failed to resolve a data directory for the campus map")]
    DataDirUnavailable,

    /// Raised when a node id (building name) is absent from the graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when both endpoints exist but lie in different components.
    #[error("no path exists between {start} and {goal}")]
    NoPathExists { start: String, goal: String },

    /// Route summaries require at least one step.
    #[error("route contained no steps")]
    EmptyRoute,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON syntax errors while reading a map document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedInput {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
