//! Data models shared across the processing services.
//!
//! - [`ProcessingMode`]: selects which fixed transform an operation applies
//! - [`ProcessingResult`]: per-call outcome record carried back to the caller
//!
//! Recoverable operation failures are expressed as a `ProcessingResult` with
//! `success == false` and a human-readable message; they never panic.

use std::fmt;

/// Transform selection for item and batch processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    /// Uppercase the input and tag it with `[SIMPLE]`
    Simple,
    /// Reverse the input, lowercase it, and tag it with `[ADVANCED]`
    Advanced,
    /// Trim surrounding whitespace and tag it with `[BATCH]`
    Batch,
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessingMode::Simple => "SIMPLE",
            ProcessingMode::Advanced => "ADVANCED",
            ProcessingMode::Batch => "BATCH",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a single processing call.
///
/// Created fresh per call and never persisted. `error_message` is meaningful
/// only when `success` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub success: bool,
    pub output: String,
    pub error_message: String,
    pub processed_items: usize,
}

impl ProcessingResult {
    /// Build a successful result carrying the transformed output.
    pub fn ok(output: impl Into<String>, processed_items: usize) -> Self {
        Self {
            success: true,
            output: output.into(),
            error_message: String::new(),
            processed_items,
        }
    }

    /// Build a failed result carrying a human-readable message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error_message: message.into(),
            processed_items: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(ProcessingMode::Simple.to_string(), "SIMPLE");
        assert_eq!(ProcessingMode::Advanced.to_string(), "ADVANCED");
        assert_eq!(ProcessingMode::Batch.to_string(), "BATCH");
    }

    #[test]
    fn test_ok_result() {
        let result = ProcessingResult::ok("out", 3);
        assert!(result.success);
        assert_eq!(result.output, "out");
        assert_eq!(result.processed_items, 3);
        assert!(result.error_message.is_empty());
    }

    #[test]
    fn test_fail_result() {
        let result = ProcessingResult::fail("boom");
        assert!(!result.success);
        assert_eq!(result.error_message, "boom");
        assert_eq!(result.processed_items, 0);
    }
}
