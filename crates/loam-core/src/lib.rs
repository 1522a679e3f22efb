//! Core primitives for the loam container library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! closed set of error kinds shared by every loam container and [`RawBuf`],
//! the zero-initialised byte buffer that the arena, the owned string, and
//! the growable containers are built on.
//!
//! Loam's failure policy is "no silent recovery": allocation failure and
//! index-contract violations surface as `Err` of a small closed enum, never
//! as clamping, wrapping, or partial state. There is no retry and no
//! fallback allocation strategy anywhere in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod raw;

pub use error::{AllocError, BoundsError};
pub use raw::RawBuf;
