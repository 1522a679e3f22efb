//! A growable vector with tuned geometric growth.
//!
//! [`FlexVec`] keeps its backing storage at full capacity, default-filled,
//! with an explicit cursor marking the in-use prefix — the same shape as a
//! bump-allocated segment. Growth multiplies capacity by the golden-ratio
//! factor 1.618 (never less than 8, never less than what the push needs)
//! and reserves through `try_reserve_exact` so exhaustion surfaces as
//! [`AllocError`] instead of aborting.

use loam_core::AllocError;

/// First allocation size in elements.
const BASE_CAPACITY: usize = 8;

/// Capacity multiplier on growth.
const GROWTH_FACTOR: f64 = 1.618;

/// A contiguous dynamic array of `T`.
///
/// `T: Default + Clone` because the capacity region beyond the in-use
/// prefix is kept default-filled — the typed analogue of handing out
/// zeroed bytes. Capacity never shrinks; [`FlexVec::release`] drops the
/// backing storage outright and leaves a reusable empty vector.
#[derive(Debug)]
pub struct FlexVec<T> {
    /// Backing storage, always default-filled to full capacity.
    data: Vec<T>,
    /// Number of elements in use; `data[len..]` is spare capacity.
    len: usize,
}

impl<T: Default + Clone> FlexVec<T> {
    /// Create an empty vector with zero capacity.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty vector with at least `capacity` elements reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut v = Self::new();
        if capacity > 0 {
            v.grow_to(capacity)?;
        }
        Ok(v)
    }

    /// Append an element, growing the backing storage if it is full.
    ///
    /// On growth the new capacity is
    /// `max(8, 1 + floor(1.618 * old_capacity), len + 1)` and every
    /// previously pushed element is preserved. The growth step is
    /// evaluated in `f64`, so capacities above 2^53 round before the
    /// floor is taken; the `len + 1` clamp still guarantees the push
    /// fits.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.data.len() {
            self.grow_to(self.len + 1)?;
        }
        self.data[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` when empty.
    ///
    /// The vacated slot is reset to `T::default()` to restore the
    /// default-filled spare-capacity invariant.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::take(&mut self.data[self.len]))
    }

    /// Number of elements in use.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no elements are in use.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated capacity in elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The element at `index`, or `None` past the in-use prefix.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.data[index])
        } else {
            None
        }
    }

    /// The last in-use element.
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).map(|i| &self.data[i])
    }

    /// Shared view of the in-use prefix.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Mutable view of the in-use prefix.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Drop the backing storage and reset both counters to zero.
    ///
    /// The released vector stays valid: it is simply empty with zero
    /// capacity, and may be reused.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.len = 0;
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<T>()
    }

    /// Grow the backing storage so at least `needed` elements fit.
    fn grow_to(&mut self, needed: usize) -> Result<(), AllocError> {
        let mut new_cap = 1 + (GROWTH_FACTOR * self.data.len() as f64) as usize;
        if new_cap < needed {
            new_cap = needed;
        }
        if new_cap < BASE_CAPACITY {
            new_cap = BASE_CAPACITY;
        }
        let additional = new_cap - self.data.len();
        self.data.try_reserve_exact(additional).map_err(|_| {
            AllocError::OutOfMemory {
                requested: new_cap
                    .checked_mul(std::mem::size_of::<T>())
                    .unwrap_or(usize::MAX),
            }
        })?;
        self.data.resize(new_cap, T::default());
        Ok(())
    }
}

impl<T: Default + Clone> Default for FlexVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_is_empty_with_zero_capacity() {
        let v: FlexVec<u32> = FlexVec::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn first_push_allocates_the_floor_capacity() {
        let mut v = FlexVec::new();
        v.push(1u32).unwrap();
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn growth_sequence_follows_the_golden_ratio() {
        let mut v = FlexVec::new();
        for i in 0..9u32 {
            v.push(i).unwrap();
        }
        // 0 -> 8 on the first push, then 8 -> 1 + floor(1.618 * 8) = 13.
        assert!(v.capacity() >= 9);
        assert_eq!(v.capacity(), 13);
        assert_eq!(v.len(), 9);
    }

    #[test]
    fn pushes_survive_reallocation() {
        let mut v = FlexVec::new();
        for i in 0..100u32 {
            v.push(i).unwrap();
            for j in 0..=i {
                assert_eq!(v.get(j as usize), Some(&j));
            }
        }
        assert_eq!(v.len(), 100);
    }

    #[test]
    fn spare_capacity_is_default_filled() {
        let mut v = FlexVec::new();
        v.push(7u32).unwrap();
        assert!(v.data[v.len..].iter().all(|&x| x == 0));
    }

    #[test]
    fn capacity_never_shrinks() {
        let mut v = FlexVec::new();
        for i in 0..20u32 {
            v.push(i).unwrap();
        }
        let cap = v.capacity();
        while v.pop().is_some() {}
        assert_eq!(v.capacity(), cap);
        assert!(v.is_empty());
    }

    #[test]
    fn pop_returns_in_reverse_order() {
        let mut v = FlexVec::new();
        for i in 0..3u32 {
            v.push(i).unwrap();
        }
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.last(), Some(&0));
        assert_eq!(v.pop(), Some(0));
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn release_resets_both_counters() {
        let mut v = FlexVec::new();
        for i in 0..50u32 {
            v.push(i).unwrap();
        }
        v.release();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert_eq!(v.memory_bytes(), 0);
        // The released vector is reusable as an empty one.
        v.push(1).unwrap();
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn with_capacity_reserves_up_front() {
        let v: FlexVec<u64> = FlexVec::with_capacity(100).unwrap();
        assert_eq!(v.len(), 0);
        assert!(v.capacity() >= 100);
    }

    #[test]
    fn get_past_len_is_none_even_within_capacity() {
        let mut v = FlexVec::new();
        v.push(1u32).unwrap();
        assert!(v.capacity() > 1);
        assert_eq!(v.get(1), None);
    }

    proptest! {
        #[test]
        fn matches_a_vec_model(values in proptest::collection::vec(any::<u16>(), 0..200)) {
            let mut v = FlexVec::new();
            for &x in &values {
                v.push(x).unwrap();
            }
            prop_assert_eq!(v.as_slice(), values.as_slice());
            prop_assert!(v.capacity() >= v.len());
        }
    }
}
