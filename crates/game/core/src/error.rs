//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `CharacterError`, `CraftError`) are defined in their
//! respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each module has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Caller Recovery**: Every error here is reported back to the surrounding
//!   interface; none of them ends the session

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The player may retry, possibly after changing state (earning points, finding items)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted reference data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: no skill points yet, missing crafting ingredients
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown recipe, unknown enemy type
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: resolving a round of an encounter that already ended
    Internal,

    /// Fatal error - reference data unusable, cannot continue.
    ///
    /// Examples: duplicate table entries, recipes naming unknown items
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller can report the error and keep playing.
    ///
    /// Validation errors count: the input is rejected, the session goes on.
    pub const fn is_recoverable(&self) -> bool {
        !self.is_internal()
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// This trait provides a uniform interface for error classification
/// across all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    ///
    /// This is used for error handling strategies and logging priorities.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable machine-readable code for this error.
    fn error_code(&self) -> &'static str;

    /// Returns true if the caller can re-prompt and try again.
    fn is_recoverable(&self) -> bool {
        self.severity().is_recoverable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }

    #[test]
    fn internal_covers_fatal() {
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
    }

    #[test]
    fn only_internal_and_fatal_stop_the_caller() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(ErrorSeverity::Validation.is_recoverable());
        assert!(!ErrorSeverity::Internal.is_recoverable());
        assert!(!ErrorSeverity::Fatal.is_recoverable());
    }
}
