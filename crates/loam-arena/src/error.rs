//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use loam_core::AllocError;

/// Errors that can occur during arena operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The request does not fit in the arena's remaining capacity.
    CapacityExceeded {
        /// Number of bytes requested, including alignment padding.
        requested: usize,
        /// Bytes still available at the cursor.
        remaining: usize,
    },
    /// The deferred backing allocation itself failed.
    BackingAllocFailed {
        /// The underlying allocation error.
        source: AllocError,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena allocation of {requested} bytes failed: {remaining} bytes remaining"
                )
            }
            Self::BackingAllocFailed { source } => {
                write!(f, "arena backing allocation failed: {source}")
            }
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BackingAllocFailed { source } => Some(source),
            Self::CapacityExceeded { .. } => None,
        }
    }
}

impl From<AllocError> for ArenaError {
    fn from(source: AllocError) -> Self {
        Self::BackingAllocFailed { source }
    }
}
