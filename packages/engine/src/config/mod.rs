//! Engine configuration
//!
//! A single `EngineConfig` travels from the compiler into every scope a
//! query creates. Defaults live in `defaults`, fluent setters in `builders`
//! and checks in `validation`.

mod builders;
mod defaults;
mod types;
pub mod validation;

pub use defaults::DEFAULT_MAX_SEQUENCE_LEN;
pub use types::EngineConfig;
pub use validation::{ConfigResult, ConfigurationError, Validator};
