//! Typed errors for calendar generation.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while generating or exporting a calendar.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Required configuration missing or invalid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Completion service call failed
    #[error("completion service error: {0}")]
    Completion(#[from] groq_client::GroqError),

    /// The model reply contained no JSON array
    #[error("no JSON array found in reply")]
    NoArrayFound {
        /// The reply text, kept for diagnosis
        reply: String,
    },

    /// The extracted text was not a valid JSON array of records
    #[error("malformed JSON in reply: {source}")]
    MalformedJson {
        #[source]
        source: serde_json::Error,
        /// The text that failed to decode
        context: String,
    },

    /// JSON encoding failed during export
    #[error("JSON encode error: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

/// Result type alias for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
