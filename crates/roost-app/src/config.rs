//! Flow configuration.

use crate::ConfigError;

/// Code length used when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest code the flow accepts.
pub const MAX_CODE_LENGTH: usize = 12;

/// Configuration for one OTP verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConfig {
    /// Number of single-character cells.
    pub code_length: usize,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self { code_length: DEFAULT_CODE_LENGTH }
    }
}

impl FlowConfig {
    /// Configuration with the given code length.
    pub fn with_code_length(code_length: usize) -> Self {
        Self { code_length }
    }

    /// Check that the configuration describes a usable flow.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CodeLength`] if the length is outside
    /// `1..=MAX_CODE_LENGTH`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            return Err(ConfigError::CodeLength {
                actual: self.code_length,
                min: 1,
                max: MAX_CODE_LENGTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_six_cells() {
        assert_eq!(FlowConfig::default().code_length, 6);
        assert!(FlowConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(matches!(
            FlowConfig::with_code_length(0).validate(),
            Err(ConfigError::CodeLength { actual: 0, .. })
        ));
        assert!(FlowConfig::with_code_length(MAX_CODE_LENGTH).validate().is_ok());
        assert!(FlowConfig::with_code_length(MAX_CODE_LENGTH + 1).validate().is_err());
    }
}
