//! Byte membership sets for charset-driven scanning.

use std::fmt;

/// A set of byte values with O(1) membership tests.
///
/// Used as the charset argument to [`Span::span_accept`],
/// [`Span::span_reject`], and the tokenizers. Construction walks the
/// input once; lookups index a 256-entry table.
///
/// [`Span::span_accept`]: crate::Span::span_accept
/// [`Span::span_reject`]: crate::Span::span_reject
#[derive(Clone, Copy)]
pub struct ByteSet {
    table: [bool; 256],
}

impl ByteSet {
    /// Build a set containing every byte that occurs in `bytes`.
    ///
    /// Duplicates are harmless. `const`, so delimiter sets can live in
    /// statics.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            table[bytes[i] as usize] = true;
            i += 1;
        }
        Self { table }
    }

    /// Whether `b` is a member of the set.
    pub const fn contains(&self, b: u8) -> bool {
        self.table[b as usize]
    }
}

// Listing the raw table would drown the output; show the members instead.
impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<u8> = (0u8..=255).filter(|&b| self.contains(b)).collect();
        f.debug_tuple("ByteSet")
            .field(&members.as_slice().escape_ascii().to_string())
            .finish()
    }
}
