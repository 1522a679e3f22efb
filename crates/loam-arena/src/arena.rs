//! Linear (bump) allocation over a single backing buffer.
//!
//! [`Arena`] hands out non-overlapping byte regions by advancing a cursor
//! through one [`RawBuf`]. The backing allocation is deferred until the
//! first request, so constructing an arena is free. Regions come back as
//! [`ArenaSlot`] offset handles and are read through [`Arena::bytes`] /
//! [`Arena::bytes_mut`]; they are all invalidated together by
//! [`Arena::release`] or [`Arena::reset`].

use loam_core::RawBuf;

use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// A region previously allocated from an [`Arena`].
///
/// Slots are offset/length pairs, cheap to copy and impossible to
/// dereference without the arena they came from. A slot does not track the
/// arena's generation: using one after `release` or `reset` is a documented
/// caller contract, not a runtime check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaSlot {
    offset: usize,
    len: usize,
}

impl ArenaSlot {
    /// The empty slot: zero offset, zero length. The starting point for
    /// [`Arena::grow_array`].
    pub const EMPTY: ArenaSlot = ArenaSlot { offset: 0, len: 0 };

    /// Byte offset of the region within the arena.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the region in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the region is zero bytes long.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A fixed-capacity bump allocator.
///
/// The arena records its capacity at construction and allocates the
/// backing buffer lazily on first use. It never grows: a request that does
/// not fit the remaining capacity fails with
/// [`ArenaError::CapacityExceeded`] naming the requested size, with no
/// partial-allocation fallback. Individual regions are never reclaimed —
/// the whole arena is released at once.
pub struct Arena {
    buf: RawBuf,
    cursor: usize,
    capacity: usize,
}

impl Arena {
    /// Create an arena with the given capacity in bytes.
    ///
    /// No memory is allocated until the first [`Arena::alloc`].
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: RawBuf::new(),
            cursor: 0,
            capacity,
        }
    }

    /// Create an arena from a config.
    pub fn with_config(config: &ArenaConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Bump-allocate `count` elements of `elem_size` bytes, padding the
    /// cursor so the region's offset is a multiple of `align`.
    ///
    /// The returned region is zeroed, never overlaps a previously returned
    /// one, and lies entirely within the arena. Alignment is relative to
    /// the arena base.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    pub fn alloc(
        &mut self,
        elem_size: usize,
        align: usize,
        count: usize,
    ) -> Result<ArenaSlot, ArenaError> {
        assert!(align.is_power_of_two(), "align must be a power of two");
        self.ensure_backing()?;

        let padding = self.cursor.wrapping_neg() & (align - 1);
        let remaining = self.capacity - self.cursor;
        let bytes = match count.checked_mul(elem_size) {
            Some(b) if b <= usize::MAX - padding => b,
            _ => {
                return Err(ArenaError::CapacityExceeded {
                    requested: usize::MAX,
                    remaining,
                })
            }
        };
        if padding + bytes > remaining {
            return Err(ArenaError::CapacityExceeded {
                requested: padding + bytes,
                remaining,
            });
        }

        let offset = self.cursor + padding;
        self.cursor = offset + bytes;
        // Reset leaves stale bytes behind; zero the region on every hand-out.
        self.buf.as_mut_slice()[offset..offset + bytes].fill(0);
        Ok(ArenaSlot { offset, len: bytes })
    }

    /// Typed convenience for [`Arena::alloc`] using `T`'s size and
    /// alignment.
    pub fn alloc_array<T>(&mut self, count: usize) -> Result<ArenaSlot, ArenaError> {
        self.alloc(std::mem::size_of::<T>(), std::mem::align_of::<T>(), count)
    }

    /// Resize an array previously allocated from this arena.
    ///
    /// If `new_count` elements fit in the slot, the slot is returned
    /// unchanged — shrinking reclaims nothing. Otherwise a fresh region is
    /// allocated and the old bytes are copied forward; the old region is
    /// not reused (the arena has no free list).
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two, or if `slot` does not lie
    /// within the arena's allocated region.
    pub fn realloc(
        &mut self,
        slot: ArenaSlot,
        elem_size: usize,
        align: usize,
        new_count: usize,
    ) -> Result<ArenaSlot, ArenaError> {
        let new_bytes = new_count.checked_mul(elem_size).unwrap_or(usize::MAX);
        if new_bytes <= slot.len {
            return Ok(slot);
        }
        let new_slot = self.alloc(elem_size, align, new_count)?;
        self.buf
            .as_mut_slice()
            .copy_within(slot.offset..slot.offset + slot.len, new_slot.offset);
        Ok(new_slot)
    }

    /// Grow an array slot for one more round of pushes, doubling its
    /// element capacity.
    ///
    /// An empty slot is grown to [`ArenaConfig::DEFAULT_ARRAY_CAPACITY`]
    /// elements. Returns the (possibly fresh) slot and its new element
    /// capacity.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size` is zero or `align` is not a power of two.
    pub fn grow_array(
        &mut self,
        slot: ArenaSlot,
        elem_size: usize,
        align: usize,
    ) -> Result<(ArenaSlot, usize), ArenaError> {
        assert!(elem_size > 0, "elem_size must be nonzero");
        let old_count = slot.len / elem_size;
        let new_count = if old_count == 0 {
            ArenaConfig::DEFAULT_ARRAY_CAPACITY
        } else {
            old_count * 2
        };
        let new_slot = self.realloc(slot, elem_size, align, new_count)?;
        Ok((new_slot, new_count))
    }

    /// Shared view of an allocated region.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not lie within the arena's used region.
    pub fn bytes(&self, slot: ArenaSlot) -> &[u8] {
        &self.buf.as_slice()[slot.offset..slot.offset + slot.len]
    }

    /// Mutable view of an allocated region.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not lie within the arena's used region.
    pub fn bytes_mut(&mut self, slot: ArenaSlot) -> &mut [u8] {
        &mut self.buf.as_mut_slice()[slot.offset..slot.offset + slot.len]
    }

    /// Rewind the cursor to zero without deallocating.
    ///
    /// All previously returned slots become stale. Stale bytes remain in
    /// the buffer; the next `alloc` zeroes each region it hands out.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Free the backing allocation and zero the capacity.
    ///
    /// All slots become stale and the arena stays unusable (every `alloc`
    /// fails) until replaced via a fresh [`Arena::new`].
    pub fn release(&mut self) {
        self.buf.release();
        self.cursor = 0;
        self.capacity = 0;
    }

    /// Bytes handed out so far, including alignment padding.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes still available at the cursor.
    pub fn remaining(&self) -> usize {
        self.capacity - self.cursor
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Memory usage of the backing storage in bytes. Zero until the first
    /// allocation.
    pub fn memory_bytes(&self) -> usize {
        self.buf.memory_bytes()
    }

    fn ensure_backing(&mut self) -> Result<(), ArenaError> {
        if self.buf.is_empty() && self.capacity > 0 {
            self.buf.reallocate(self.capacity, 1)?;
        }
        Ok(())
    }
}
