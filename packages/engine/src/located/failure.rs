//! Invalid located values

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::Segment;
use crate::error::PathError;

/// Failure carried by an invalid located value
///
/// The causal error is shared: every value navigated from this one holds
/// the same `Arc`.
#[derive(Debug, Clone)]
pub struct Failure {
    path: String,
    error: Arc<PathError>,
}

impl Failure {
    pub(crate) fn new(path: impl Into<String>, error: PathError) -> Self {
        Self {
            path: path.into(),
            error: Arc::new(error),
        }
    }

    /// Breadcrumb at which the failure was observed
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Causal error
    #[must_use]
    pub fn error(&self) -> &PathError {
        &self.error
    }

    /// Shared handle to the causal error
    #[must_use]
    pub fn shared_error(&self) -> &Arc<PathError> {
        &self.error
    }

    pub(crate) fn extended(&self, segment: &Segment) -> Self {
        self.at(segment.extend(&self.path))
    }

    pub(crate) fn at(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            error: Arc::clone(&self.error),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{}: {}", self.path, self.error)
        }
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.error.as_ref())
    }
}
