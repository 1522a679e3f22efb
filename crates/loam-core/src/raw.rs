//! Zero-initialised byte buffers over the platform allocator.
//!
//! [`RawBuf`] is the byte-level allocation primitive: arena backings and
//! string payloads obtain their storage here. The typed containers apply
//! the same discipline to their own element buffers. Reservations go
//! through `try_reserve_exact`, which is what turns the platform
//! allocator's refusal into an observable [`AllocError`] instead of an
//! abort.

use crate::error::AllocError;

/// An owned, zero-initialised, growable byte buffer.
///
/// `RawBuf` sizes itself in `count * elem_size` units so callers state
/// element counts rather than raw byte math; the multiplication is
/// overflow-checked. New bytes — at creation and after growth — are always
/// zero, which is what lets the owned string type get its trailing NUL
/// without ever writing one explicitly.
///
/// Deallocation is `Drop`. Dropping an empty buffer does nothing.
#[derive(Debug, Default)]
pub struct RawBuf {
    data: Vec<u8>,
}

impl RawBuf {
    /// Create an empty buffer that owns no allocation.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Allocate a zero-initialised buffer of `count` elements of
    /// `elem_size` bytes each.
    pub fn allocate(count: usize, elem_size: usize) -> Result<Self, AllocError> {
        let mut buf = Self::new();
        buf.reallocate(count, elem_size)?;
        Ok(buf)
    }

    /// Resize the buffer to `count` elements of `elem_size` bytes each.
    ///
    /// Existing bytes are preserved up to `min(old_len, new_len)`; bytes
    /// beyond the old length are zero. Shrinking keeps the existing
    /// reservation.
    pub fn reallocate(&mut self, count: usize, elem_size: usize) -> Result<(), AllocError> {
        let bytes = checked_size(count, elem_size)?;
        if bytes > self.data.len() {
            let additional = bytes - self.data.len();
            self.data
                .try_reserve_exact(additional)
                .map_err(|_| AllocError::OutOfMemory { requested: bytes })?;
        }
        self.data.resize(bytes, 0);
        Ok(())
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer owns zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shared view of the whole buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the whole buffer.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.capacity()
    }

    /// Release the backing allocation, leaving an empty buffer.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }
}

/// Overflow-checked `count * elem_size`.
fn checked_size(count: usize, elem_size: usize) -> Result<usize, AllocError> {
    count.checked_mul(elem_size).ok_or(AllocError::OutOfMemory {
        requested: usize::MAX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_is_zero_initialised() {
        let buf = RawBuf::allocate(16, 4).unwrap();
        assert_eq!(buf.len(), 64);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn reallocate_preserves_existing_bytes() {
        let mut buf = RawBuf::allocate(4, 1).unwrap();
        buf.as_mut_slice().copy_from_slice(b"abcd");
        buf.reallocate(8, 1).unwrap();
        assert_eq!(&buf.as_slice()[..4], b"abcd");
        assert!(buf.as_slice()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn reallocate_shrink_truncates() {
        let mut buf = RawBuf::allocate(8, 1).unwrap();
        buf.as_mut_slice().copy_from_slice(b"abcdefgh");
        buf.reallocate(3, 1).unwrap();
        assert_eq!(buf.as_slice(), b"abc");
    }

    #[test]
    fn overflowing_size_is_out_of_memory() {
        let err = RawBuf::allocate(usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            AllocError::OutOfMemory {
                requested: usize::MAX
            }
        );
    }

    #[test]
    fn release_drops_the_allocation() {
        let mut buf = RawBuf::allocate(128, 1).unwrap();
        buf.release();
        assert!(buf.is_empty());
        assert_eq!(buf.memory_bytes(), 0);
    }

    #[test]
    fn zero_count_owns_nothing() {
        let buf = RawBuf::allocate(0, 8).unwrap();
        assert!(buf.is_empty());
    }
}
