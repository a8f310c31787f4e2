//! Configuration validation

use thiserror::Error;

use super::types::EngineConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A limit was set to a value that disables the feature it bounds
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// Function name is empty or otherwise unusable
    #[error("Invalid function name: {0}")]
    InvalidFunctionName(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant describing the first problem.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_sequence_len == 0 {
            return Err(ConfigurationError::InvalidLimit(
                "max_sequence_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_sequence_cap_is_rejected() {
        let config = EngineConfig::default().with_max_sequence_len(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidLimit(_))
        ));
    }
}
