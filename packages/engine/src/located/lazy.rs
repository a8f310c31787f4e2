//! Lazily decoded documents
//!
//! The bytes are decoded at most once, on first navigation or inspection,
//! and the outcome (a reflective root or a decode failure) is reused by
//! every clone of the located value.

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::Located;
use crate::error::PathError;
use crate::value::Value;

/// Undecoded document plus its one-time decode result
#[derive(Clone)]
pub struct LazyDocument {
    path: String,
    bytes: Arc<[u8]>,
    decoded: Arc<OnceLock<Located>>,
}

impl LazyDocument {
    pub(crate) fn new(bytes: Arc<[u8]>) -> Self {
        Self {
            path: String::new(),
            bytes,
            decoded: Arc::new(OnceLock::new()),
        }
    }

    /// Breadcrumb of the document root
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw document bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the document has been decoded yet
    #[must_use]
    pub fn is_decoded(&self) -> bool {
        self.decoded.get().is_some()
    }

    pub(crate) fn decoded_json(&self) -> &Located {
        self.decoded.get_or_init(|| {
            tracing::debug!(
                target: "pathor::lazy",
                bytes = self.bytes.len(),
                "decoding json document"
            );
            match serde_json::from_slice::<serde_json::Value>(&self.bytes) {
                Ok(json) => Located::at(self.path.clone(), Value::from(json)),
                Err(e) => Located::invalid(
                    self.path.clone(),
                    PathError::Decode {
                        format: "json",
                        message: e.to_string(),
                    },
                ),
            }
        })
    }

    pub(crate) fn decoded_yaml(&self) -> &Located {
        self.decoded.get_or_init(|| {
            tracing::debug!(
                target: "pathor::lazy",
                bytes = self.bytes.len(),
                "decoding yaml document"
            );
            match serde_yaml::from_slice::<serde_yaml::Value>(&self.bytes) {
                Ok(yaml) => Located::at(self.path.clone(), Value::from(yaml)),
                Err(e) => Located::invalid(
                    self.path.clone(),
                    PathError::Decode {
                        format: "yaml",
                        message: e.to_string(),
                    },
                ),
            }
        })
    }

    pub(crate) fn with_path(&self, path: String) -> Self {
        let decoded = OnceLock::new();
        if let Some(done) = self.decoded.get() {
            let _ = decoded.set(done.clone().with_path(path.clone()));
        }
        Self {
            path,
            bytes: Arc::clone(&self.bytes),
            decoded: Arc::new(decoded),
        }
    }
}

impl fmt::Debug for LazyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyDocument")
            .field("path", &self.path)
            .field("bytes", &self.bytes.len())
            .field("decoded", &self.is_decoded())
            .finish()
    }
}
