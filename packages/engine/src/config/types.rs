//! Engine configuration types

/// Tunables shared by compiled queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Longest sequence the range generator may produce
    pub max_sequence_len: usize,
    /// Return the sole element of a single-element result instead of the
    /// one-element sequence
    pub unwrap_singletons: bool,
    /// Wrap query roots in the fast-path located variant
    pub fast_path: bool,
}
