//! Bump-allocated arena for the loam container library.
//!
//! An [`Arena`] carves sequential, alignment-padded regions out of a single
//! backing allocation and reclaims them only as a whole. There is no
//! per-object bookkeeping and no free list: individual regions are never
//! returned, shrinking reclaims nothing, and growth always copies into
//! fresh space. That trade makes allocation a cursor bump and suits
//! bounded-lifetime workloads where sizing mistakes should surface
//! immediately as [`ArenaError::CapacityExceeded`] rather than be papered
//! over.
//!
//! Regions are addressed by [`ArenaSlot`] — an offset/length pair into the
//! arena — rather than by pointer, so the whole crate stays in safe Rust.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;

pub use arena::{Arena, ArenaSlot};
pub use config::ArenaConfig;
pub use error::ArenaError;
