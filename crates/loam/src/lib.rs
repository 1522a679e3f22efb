//! Loam: a small foundation layer of manually-tuned containers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! The library provides five building blocks, each with explicit capacity
//! policy and an observable allocation path (no abort-on-OOM, no silent
//! clamping):
//!
//! - a bump [`Arena`](arena::Arena) with alignment-aware allocation and
//!   whole-arena reclamation,
//! - a growable vector ([`FlexVec`](collect::FlexVec), golden-ratio
//!   growth, floor capacity 8),
//! - an owned byte string ([`ByteString`](text::ByteString), O(1) length,
//!   guaranteed trailing NUL),
//! - a non-owning span ([`Span`](text::Span)) with Python/Go-style
//!   negative indexing and trim/tokenize/search utilities,
//! - an open-addressing string-keyed map ([`StrMap`](collect::StrMap),
//!   linear probing, load factor 0.75).
//!
//! Everything is single-threaded and byte-oriented by design.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // Tokenize a sentence without allocating.
//! let delims = ByteSet::from_bytes(b",. ");
//! let mut words = Span::from("a few words to check");
//! assert_eq!(words.next_token(&delims), "a");
//! assert_eq!(words.next_token(&delims), "few");
//!
//! // Build strings; every allocation is a `Result`.
//! let left = ByteString::from_bytes(b"Hello, ").unwrap();
//! let joined = left.concat("world!").unwrap();
//! assert_eq!(joined.len(), 13);
//!
//! // Collect word counts.
//! let mut counts: StrMap<u32> = StrMap::new();
//! for word in Span::from("to be or not to be").fields(&delims) {
//!     match counts.get_mut(word.as_bytes()) {
//!         Some(n) => *n += 1,
//!         None => {
//!             counts.set(word.as_bytes(), 1).unwrap();
//!         }
//!     }
//! }
//! assert_eq!(counts.get("to"), Some(&2));
//!
//! // Carve scratch space out of an arena.
//! let mut arena = Arena::new(4096);
//! let slot = arena.alloc_array::<u64>(16).unwrap();
//! assert_eq!(arena.bytes(slot).len(), 128);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`base`] | `loam-core` | Error types, raw byte buffers |
//! | [`arena`] | `loam-arena` | Bump arena, slots, arena config |
//! | [`text`] | `loam-text` | Byte strings, spans, byte sets |
//! | [`collect`] | `loam-collect` | Growable vector, string map |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error types and raw allocation (`loam-core`).
///
/// The closed failure set of the whole library lives here:
/// [`base::AllocError`] and [`base::BoundsError`].
pub use loam_core as base;

/// Bump-allocated arena (`loam-arena`).
///
/// Fixed-capacity, alignment-aware, whole-arena reclamation. Regions are
/// addressed by [`arena::ArenaSlot`] offset handles.
pub use loam_arena as arena;

/// Byte strings and spans (`loam-text`).
///
/// Owned [`text::ByteString`], non-owning [`text::Span`], the
/// [`text::StringBuilder`] accumulator, and the [`text::ByteSet`] charset
/// used by the scanners.
pub use loam_text as text;

/// Growable containers (`loam-collect`).
///
/// [`collect::FlexVec`] and the open-addressing [`collect::StrMap`].
pub use loam_collect as collect;

/// Common imports for typical loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    // Errors
    pub use loam_core::{AllocError, BoundsError};

    // Raw allocation
    pub use loam_core::RawBuf;

    // Arena
    pub use loam_arena::{Arena, ArenaConfig, ArenaError, ArenaSlot};

    // Text
    pub use loam_text::{normalize_index, ByteSet, ByteString, Span, StringBuilder};

    // Containers
    pub use loam_collect::{FlexVec, StrMap};
}
