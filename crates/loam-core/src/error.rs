//! Error types shared across the loam workspace.
//!
//! Two failure classes exist in this library: resource exhaustion
//! ([`AllocError`]) and index-contract violations ([`BoundsError`]).
//! Both are closed enums so callers and tests can match on them
//! exhaustively. Nothing in loam clamps, wraps, or retries.

use std::error::Error;
use std::fmt;

/// Resource-exhaustion failures from the allocation layer.
///
/// Allocation failure is an observable `Err` so callers and tests can
/// assert on it, but it is unrecoverable in the sense that no container
/// offers a fallback or partial-allocation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The underlying allocator refused the reservation, or the requested
    /// byte count overflowed `usize`.
    OutOfMemory {
        /// Number of bytes requested. `usize::MAX` when the size
        /// computation itself overflowed.
        requested: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "allocation of {requested} bytes failed")
            }
        }
    }
}

impl Error for AllocError {}

/// Index-contract violations from span and string indexing.
///
/// Negative indices count from the end (`-1` is the last byte), so the
/// raw caller-supplied index is kept as `isize` for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsError {
    /// An index normalised outside `[0, len]`.
    IndexOutOfRange {
        /// The index as supplied by the caller (possibly negative).
        index: isize,
        /// Length of the indexed view.
        len: usize,
    },
    /// A reslice range whose normalised start exceeds its normalised end.
    InvalidRange {
        /// Normalised start bound.
        start: usize,
        /// Normalised end bound.
        end: usize,
    },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} exceeds end {end}")
            }
        }
    }
}

impl Error for BoundsError {}
