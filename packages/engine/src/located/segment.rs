//! Path segments and breadcrumb extension

use std::fmt;

/// One navigation step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Field, method, map key or anything else addressed by text
    Name(String),
    /// Sequence position; negative values count from the end
    Index(i64),
}

impl Segment {
    /// Breadcrumb after taking this step from `previous`
    ///
    /// The first name is bare, later names join with `.`, and indexes render
    /// as `[i]`.
    #[must_use]
    pub fn extend(&self, previous: &str) -> String {
        match self {
            Segment::Name(name) if previous.is_empty() => name.clone(),
            Segment::Name(name) => format!("{previous}.{name}"),
            Segment::Index(index) => format!("{previous}[{index}]"),
        }
    }

    /// Integer form of the segment, when it is or cleanly parses as one
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Name(name) => name.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Name(name.to_string())
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Name(name)
    }
}

impl From<&String> for Segment {
    fn from(name: &String) -> Self {
        Segment::Name(name.clone())
    }
}

impl From<i64> for Segment {
    fn from(index: i64) -> Self {
        Segment::Index(index)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(i64::from(index))
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}
