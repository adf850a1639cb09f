//! Flow error types.

use thiserror::Error;

/// Submission attempted before every cell was filled.
///
/// Recoverable: the code is left untouched so the user can finish typing.
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter the complete {required}-digit code")]
pub struct IncompleteError {
    /// Number of characters the code must have.
    pub required: usize,
}

/// Invalid flow configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Code length outside the supported range.
    #[error("code length must be between {min} and {max}, got {actual}")]
    CodeLength {
        /// Requested length.
        actual: usize,
        /// Smallest supported length.
        min: usize,
        /// Largest supported length.
        max: usize,
    },

    /// Contact value to verify is empty.
    #[error("contact value must not be empty")]
    EmptyContact,
}
