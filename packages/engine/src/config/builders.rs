//! Builder methods for engine configuration

use super::types::EngineConfig;

impl EngineConfig {
    /// Set the cap on generated sequence length
    ///
    /// # Examples
    /// ```
    /// use pathor_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::default().with_max_sequence_len(10);
    /// assert_eq!(config.max_sequence_len, 10);
    /// ```
    #[must_use]
    pub fn with_max_sequence_len(mut self, len: usize) -> Self {
        self.max_sequence_len = len;
        self
    }

    /// Unwrap single-element results
    ///
    /// With this enabled `Children[Name='child2'].Size` yields `2` rather
    /// than `[2]`.
    #[must_use]
    pub fn with_unwrap_singletons(mut self, enabled: bool) -> Self {
        self.unwrap_singletons = enabled;
        self
    }

    /// Wrap query roots in the fast-path variant
    #[must_use]
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.fast_path = enabled;
        self
    }
}
