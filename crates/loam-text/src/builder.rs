//! Incremental construction of byte strings.
//!
//! [`StringBuilder`] accumulates appended bytes in one growable buffer so
//! that building a string from many parts costs amortised O(1) per byte
//! instead of one allocation per [`ByteString::concat`]. Every append
//! copies its input; the caller keeps full ownership of whatever it passed
//! in. [`StringBuilder::build`] consumes the builder and produces a
//! [`ByteString`] with the usual trailing-NUL invariant.

use std::fmt;

use loam_core::{AllocError, RawBuf};

use crate::span::Span;
use crate::string::ByteString;

/// Buffer capacity after the first append.
const INITIAL_CAPACITY: usize = 16;

/// An append-only accumulator for building a [`ByteString`].
///
/// The builder starts empty and unallocated. Capacity doubles on growth
/// from a floor of 16 bytes; an append larger than the doubled capacity
/// sizes the buffer to fit it exactly (plus one spare byte). Appends are
/// fallible like every other allocation in the library.
///
/// For formatted appends the builder implements [`fmt::Write`], so
/// `write!(builder, ...)` works; an allocation failure surfaces there as
/// [`fmt::Error`] since the trait cannot carry richer payloads.
#[derive(Debug, Default)]
pub struct StringBuilder {
    buf: RawBuf,
    len: usize,
}

impl StringBuilder {
    /// Create an empty builder that owns no allocation.
    pub fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Append a copy of `bytes` to the accumulated content.
    ///
    /// Accepts `&str`, `&[u8]`, a [`ByteString`], or anything else
    /// byte-viewable. The input is copied; the builder never borrows it.
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> Result<(), AllocError> {
        let bytes = bytes.as_ref();
        let new_len = self.len + bytes.len();
        self.grow_to(new_len)?;
        self.buf.as_mut_slice()[self.len..new_len].copy_from_slice(bytes);
        self.len = new_len;
        Ok(())
    }

    /// Append a copy of the bytes a [`Span`] views.
    pub fn append_span(&mut self, span: Span<'_>) -> Result<(), AllocError> {
        self.append(span.as_bytes())
    }

    /// Consume the builder and produce the accumulated [`ByteString`].
    pub fn build(self) -> Result<ByteString, AllocError> {
        ByteString::from_bytes(self.as_bytes())
    }

    /// Number of bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffer capacity in bytes. Zero until the first append.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The accumulated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_slice()[..self.len]
    }

    /// A non-owning view of the accumulated bytes.
    pub fn as_span(&self) -> Span<'_> {
        Span::new(self.as_bytes())
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buf.memory_bytes()
    }

    /// Grow the buffer so at least `needed` bytes fit.
    ///
    /// Doubles from a floor of [`INITIAL_CAPACITY`]; when doubling is not
    /// enough the buffer is sized to `needed + 1`.
    fn grow_to(&mut self, needed: usize) -> Result<(), AllocError> {
        if needed <= self.buf.len() {
            return Ok(());
        }
        let mut new_cap = if self.buf.is_empty() {
            INITIAL_CAPACITY
        } else {
            self.buf.len() * 2
        };
        if new_cap < needed {
            new_cap = needed + 1;
        }
        self.buf.reallocate(new_cap, 1)
    }
}

impl fmt::Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map_err(|_| fmt::Error)
    }
}
