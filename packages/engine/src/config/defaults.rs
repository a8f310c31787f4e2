//! Default values for `EngineConfig`

use super::types::EngineConfig;

/// Default cap on generated sequence length
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 100_000;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
            unwrap_singletons: false,
            fast_path: false,
        }
    }
}
