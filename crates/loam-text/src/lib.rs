//! Byte-oriented string types for the loam container library.
//!
//! Three complementary types:
//!
//! - [`ByteString`] — an owned, immutable, heap-allocated byte string with
//!   O(1) length and a guaranteed trailing NUL. Operations that "modify" a
//!   string allocate a new one.
//! - [`Span`] — a non-owning, bounds-checked view over any byte buffer with
//!   Python/Go-style negative indexing, plus trimming, splitting, and
//!   searching utilities. Two words, `Copy`, never allocates.
//! - [`StringBuilder`] — an append-only accumulator for assembling a
//!   [`ByteString`] from many parts without one allocation per part.
//!
//! [`ByteSet`] supports the charset-driven scanners (`span_accept`,
//! `span_reject`, tokenizing).
//!
//! Everything here is byte-oriented; there is no Unicode awareness
//! anywhere (a deliberate non-goal).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod byteset;
pub mod span;
pub mod string;

pub use builder::StringBuilder;
pub use byteset::ByteSet;
pub use span::{normalize_index, Span};
pub use string::ByteString;
