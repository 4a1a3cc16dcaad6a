//! Error types for particle system operations.

use std::fmt;

/// Errors reported by the particle system's indexed operations.
///
/// Out-of-range access fails loudly instead of handing back a silent
/// null-like value; "not found" during by-id removal is an expected outcome
/// and is reported as `false` by those operations, not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// An index-based accessor or removal was given an index past the end
    /// of its collection.
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        count: usize,
    },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::IndexOutOfRange { what, index, count } => {
                write!(f, "{} index {} out of range (count: {})", what, index, count)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
