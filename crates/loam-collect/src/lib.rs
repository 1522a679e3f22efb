//! Growable containers for the loam library.
//!
//! - [`FlexVec`] — a contiguous dynamic array with geometric growth
//!   (factor 1.618, floor capacity 8) and an explicit, observable
//!   allocation path.
//! - [`StrMap`] — an open-addressing hash map from byte-string keys to
//!   arbitrary values, with linear probing, FNV-1a hashing, and a 0.75
//!   maximum load factor.
//!
//! Both are single-threaded, single-owner structures: no operation blocks,
//! suspends, or synchronises, and no pair of operations is atomic as a
//! pair.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod flex;
pub mod strmap;

pub use flex::FlexVec;
pub use strmap::StrMap;
