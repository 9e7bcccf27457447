//! Completion results and display utilities
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 2.0.0: CompletionResult replaces string-prefixed error returns
//! - 1.0.0: Extracted preview truncation from the form

use std::fmt;

/// Prefix carried by the displayed form of every failure
pub const ERROR_PREFIX: &str = "Error: ";

/// Maximum characters of model output echoed into log lines
pub const PREVIEW_LIMIT: usize = 120;

/// Terminal outcome of one completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// Text of the first choice, verbatim
    Success { text: String },
    /// Human readable failure description
    Failure { message: String },
}

impl CompletionResult {
    pub fn success(text: impl Into<String>) -> Self {
        CompletionResult::Success { text: text.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        CompletionResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompletionResult::Success { .. })
    }
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionResult::Success { text } => f.write_str(text),
            CompletionResult::Failure { message } => write!(f, "{ERROR_PREFIX}{message}"),
        }
    }
}

/// Truncate text for log output, adding ellipsis if needed (UTF-8 safe)
pub fn preview(text: &str, max_size: usize) -> String {
    if text.len() <= max_size {
        return text.to_string();
    }
    // Find a safe UTF-8 boundary
    let mut end = max_size.saturating_sub(3);
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
