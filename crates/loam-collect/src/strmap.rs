//! An open-addressing hash map keyed by byte strings.
//!
//! [`StrMap`] stores every entry directly in its slot array and resolves
//! collisions by linear probing. The table capacity is always a power of
//! two (starting at 8, doubling) and grows once the load factor would
//! exceed 0.75. Keys are hashed with FNV-1a; a probe matches only when
//! the stored hash and the key bytes both agree.
//!
//! Removal does not exist: a slot, once occupied, stays occupied for the
//! life of the map, and re-inserting an existing key replaces the value
//! in place while key and slot stay put. That rule is what keeps plain
//! linear probing correct without tombstones.

use loam_core::AllocError;
use loam_text::ByteString;

/// Maximum load factor, as a (numerator, denominator) pair: 3/4.
const MAX_LOAD: (usize, usize) = (3, 4);

/// Slot-table capacity after the first growth.
const BASE_CAPACITY: usize = 8;

/// FNV-1a over the key bytes.
fn hash_key(key: &[u8]) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for &b in key {
        hash ^= u32::from(b);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

/// An occupied slot: owned key, its cached hash, and the payload.
#[derive(Debug)]
struct Slot<V> {
    key: ByteString,
    hash: u32,
    value: V,
}

/// An open-addressing map from byte-string keys to values of `V`.
///
/// The map owns a copy of every key (taken on first insert). Lookups and
/// inserts accept any byte view, so callers pass `&str`, `&[u8]`, or a
/// [`ByteString`] interchangeably.
#[derive(Debug)]
pub struct StrMap<V> {
    /// Power-of-two slot table; `None` marks an empty slot.
    slots: Vec<Option<Slot<V>>>,
    /// Number of occupied slots. Invariant: `count <= capacity * 3/4`.
    count: usize,
}

impl<V> StrMap<V> {
    /// Create an empty map with no slot table.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            count: 0,
        }
    }

    /// Insert or replace the value for `key`.
    ///
    /// Returns `Ok(true)` when the key was new and `Ok(false)` when an
    /// existing entry's value was replaced — in which case the stored key
    /// and its slot are untouched and `len()` does not change. Growth (at
    /// load factor 0.75) rehashes every occupied slot into a table of
    /// twice the capacity.
    pub fn set(&mut self, key: impl AsRef<[u8]>, value: V) -> Result<bool, AllocError> {
        let key = key.as_ref();
        if (self.count + 1) * MAX_LOAD.1 > self.slots.len() * MAX_LOAD.0 {
            self.grow()?;
        }
        let hash = hash_key(key);
        let idx = Self::probe(&self.slots, hash, key);
        match &mut self.slots[idx] {
            Some(slot) => {
                slot.value = value;
                Ok(false)
            }
            empty => {
                *empty = Some(Slot {
                    key: ByteString::from_bytes(key)?,
                    hash,
                    value,
                });
                self.count += 1;
                Ok(true)
            }
        }
    }

    /// Shared reference to the value for `key`, or `None` when absent.
    ///
    /// Never mutates the table; an empty map answers without probing.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&V> {
        if self.count == 0 {
            return None;
        }
        let key = key.as_ref();
        let idx = Self::probe(&self.slots, hash_key(key), key);
        self.slots[idx].as_ref().map(|slot| &slot.value)
    }

    /// Mutable reference to the value for `key`, or `None` when absent.
    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut V> {
        if self.count == 0 {
            return None;
        }
        let key = key.as_ref();
        let idx = Self::probe(&self.slots, hash_key(key), key);
        self.slots[idx].as_mut().map(|slot| &mut slot.value)
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Slot-table capacity. Always zero or a power of two.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Memory usage of the slot table in bytes, excluding key payloads.
    pub fn memory_bytes(&self) -> usize {
        self.slots.capacity() * std::mem::size_of::<Option<Slot<V>>>()
    }

    /// Find the slot for `key`: either the occupied slot whose hash and
    /// bytes both match, or the first empty slot on the probe path.
    ///
    /// The load-factor cap guarantees an empty slot exists, so the probe
    /// loop always terminates.
    fn probe(slots: &[Option<Slot<V>>], hash: u32, key: &[u8]) -> usize {
        let capacity = slots.len();
        let mut idx = hash as usize % capacity;
        loop {
            match &slots[idx] {
                None => return idx,
                Some(slot) if slot.hash == hash && slot.key == key => return idx,
                _ => idx = (idx + 1) % capacity,
            }
        }
    }

    /// Double the slot table (minimum 8) and rehash every occupied slot.
    fn grow(&mut self) -> Result<(), AllocError> {
        let new_capacity = (self.slots.len() * 2).max(BASE_CAPACITY);
        let mut new_slots: Vec<Option<Slot<V>>> = Vec::new();
        new_slots.try_reserve_exact(new_capacity).map_err(|_| {
            AllocError::OutOfMemory {
                requested: new_capacity
                    .checked_mul(std::mem::size_of::<Option<Slot<V>>>())
                    .unwrap_or(usize::MAX),
            }
        })?;
        new_slots.resize_with(new_capacity, || None);

        // Walk the full old table; occupied slots can sit anywhere in it.
        for old in self.slots.drain(..) {
            if let Some(slot) = old {
                let idx = Self::probe(&new_slots, slot.hash, slot.key.as_bytes());
                new_slots[idx] = Some(slot);
            }
        }
        self.slots = new_slots;
        Ok(())
    }
}

impl<V> Default for StrMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
