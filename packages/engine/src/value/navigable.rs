//! User-defined navigable objects
//!
//! Types that want to control their own navigation implement `Navigable`
//! and are wrapped with `Value::navigable`. Located values over them use the
//! adapter variant.

use std::error::Error;
use std::fmt;

use super::Value;

/// Error reported by a navigable object
pub type NavigableError = Box<dyn Error + Send + Sync>;

/// Two-method navigation capability, plus optional breadcrumb formatting
pub trait Navigable: Send + Sync + fmt::Debug {
    /// Resolve one segment; `Ok(None)` means there is nothing there
    ///
    /// # Errors
    ///
    /// Implementations return an error when the lookup itself failed, as
    /// opposed to finding nothing.
    fn get(&self, segment: &str) -> Result<Option<Value>, NavigableError>;

    /// The object's own value
    fn raw(&self) -> Value;

    /// Custom breadcrumb for `segment` appended to `previous`
    ///
    /// Returning `None` keeps the default dot-join rule.
    fn format_path(&self, previous: &str, segment: &str) -> Option<String> {
        let _ = (previous, segment);
        None
    }
}
