//! Owned, immutable, NUL-terminated byte strings.
//!
//! [`ByteString`] stores its length in an ordinary named field next to the
//! payload buffer, keeping O(1) length lookup without any pointer tricks.
//! No caller ever sees the layout; the public surface is constructors,
//! accessors, and `concat`.

use std::fmt;

use loam_core::{AllocError, RawBuf};

use crate::span::Span;

/// An owned byte string with O(1) length and a guaranteed trailing NUL.
///
/// The payload occupies `len` bytes of a `len + 1`-byte buffer; the final
/// byte is always zero. The terminator comes from the buffer's
/// zero-initialisation — nothing ever writes it explicitly, so the
/// invariant holds by construction in every code path.
///
/// Strings are immutable once built: every "modifying" operation
/// ([`ByteString::concat`], [`ByteString::duplicate`]) allocates a fresh
/// string and leaves its inputs untouched. Interior NUL bytes in the
/// payload are permitted — the library is byte-oriented, and only
/// [`ByteString::from_terminated`] assigns meaning to NUL.
///
/// There is no `Clone` impl; duplication allocates and is therefore
/// explicit and fallible ([`ByteString::duplicate`]). Release is `Drop`.
pub struct ByteString {
    len: usize,
    buf: RawBuf,
}

impl ByteString {
    /// Copy `bytes` into a fresh string.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AllocError> {
        let len = bytes.len();
        let mut buf = RawBuf::allocate(len + 1, 1)?;
        buf.as_mut_slice()[..len].copy_from_slice(bytes);
        // buf[len] is already 0 from zero-initialisation.
        Ok(Self { len, buf })
    }

    /// Copy `buf` up to (not including) its first NUL byte, or all of it
    /// when no NUL occurs.
    pub fn from_terminated(buf: &[u8]) -> Result<Self, AllocError> {
        let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Self::from_bytes(&buf[..len])
    }

    /// Copy this string into a fresh, independently owned allocation.
    pub fn duplicate(&self) -> Result<Self, AllocError> {
        Self::from_bytes(self.as_bytes())
    }

    /// Build a new string holding `self` followed by `other`.
    ///
    /// Always allocates, sized to the sum of both lengths; neither input
    /// is mutated. `other` may be a `&str`, `&[u8]`, another
    /// `ByteString`, or anything else byte-viewable.
    pub fn concat(&self, other: impl AsRef<[u8]>) -> Result<Self, AllocError> {
        let other = other.as_ref();
        let len = self.len + other.len();
        let mut buf = RawBuf::allocate(len + 1, 1)?;
        buf.as_mut_slice()[..self.len].copy_from_slice(self.as_bytes());
        buf.as_mut_slice()[self.len..len].copy_from_slice(other);
        Ok(Self { len, buf })
    }

    /// Payload length in bytes, excluding the terminator. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the payload is zero bytes long.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The payload bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_slice()[..self.len]
    }

    /// The payload bytes plus the trailing NUL.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// A non-owning view of the payload.
    pub fn as_span(&self) -> Span<'_> {
        Span::new(self.as_bytes())
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buf.memory_bytes()
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteString(\"{}\")", self.as_bytes().escape_ascii())
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
