//! SlotVec: a contiguous slot buffer with an exact, caller-controlled capacity.
//!
//! `SlotVec<T>` is the storage layer underneath `arraylist-core`'s backing store.
//! Unlike `Vec<T>`, it:
//! - Never grows on its own. Callers decide when and by how much via [`SlotVec::reallocate`].
//! - Keeps capacity exact. `capacity()` is the number of slots, not an allocator hint.
//! - Clears every slot past the logical length, so removed elements are dropped
//!   immediately instead of lingering in the buffer.
//!
//! ```text
//! slots:  [ Some(a) | Some(b) | Some(c) | None | None ]
//!           └──────── len = 3 ───────┘
//!           └──────────── capacity = 5 ────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use arraylist_slot_vec::SlotVec;
//!
//! let mut slots = SlotVec::with_capacity(4);
//! slots.push(1);
//! slots.push(3);
//! slots.insert(1, 2);
//! assert_eq!(slots.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! assert_eq!(slots.remove(0), 1);
//! assert!(slots.is_slot_cleared(2));
//! assert_eq!(slots.capacity(), 4);
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

use alloc::{boxed::Box, vec::Vec};
use core::{cmp::Ordering, fmt};

pub struct SlotVec<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> SlotVec<T> {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Self {
        Self {
            slots: Box::new([]),
            len: 0,
        }
    }

    /// Creates an empty buffer with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Self::new();
        slots.reallocate(capacity);
        slots
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots still free before a reallocation is needed.
    pub fn spare(&self) -> usize {
        self.capacity() - self.len
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.slots[index].as_mut()
        } else {
            None
        }
    }

    /// Returns `true` if the slot at `index` holds nothing.
    ///
    /// Every slot in `len..capacity` is cleared; out-of-bounds indices report `true`.
    pub fn is_slot_cleared(&self, index: usize) -> bool {
        self.slots.get(index).is_none_or(Option::is_none)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        Live {
            inner: self.slots[..self.len].iter(),
        }
    }

    /// Moves the live elements into a new allocation of exactly `new_cap` slots.
    ///
    /// # Panics
    ///
    /// Panics if `new_cap < len`.
    pub fn reallocate(&mut self, new_cap: usize) {
        assert!(new_cap >= self.len, "reallocate below length");
        if new_cap == self.capacity() {
            return;
        }
        let mut slots = Vec::with_capacity(new_cap);
        slots.extend(self.slots[..self.len].iter_mut().map(Option::take));
        slots.resize_with(new_cap, || None);
        self.slots = slots.into_boxed_slice();
    }

    /// Appends `value` after the last live element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    pub fn push(&mut self, value: T) {
        assert!(self.len < self.capacity(), "push into a full SlotVec");
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        assert!(index < self.len, "replace out of bounds");
        self.slots[index]
            .replace(value)
            .unwrap_or_else(|| unreachable!("live slot {index} is empty"))
    }

    /// Inserts `value` at `index`, shifting `index..len` right by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or the buffer is full.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "insert out of bounds");
        assert!(self.len < self.capacity(), "insert into a full SlotVec");
        // slots[len] is cleared, rotating brings it to `index`
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
    }

    /// Inserts all of `items` at `index` with a single shift of the tail.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, if there are not enough spare slots, or if the
    /// iterator yields a different number of items than it reported.
    pub fn insert_many<I>(&mut self, index: usize, items: I)
    where
        I: IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    {
        let items = items.into_iter();
        let count = items.len();
        assert!(index <= self.len, "insert out of bounds");
        assert!(count <= self.spare(), "insert_many into a full SlotVec");
        if count == 0 {
            return;
        }

        self.slots[index..self.len + count].rotate_right(count);
        let mut filled = 0;
        for (slot, item) in self.slots[index..index + count].iter_mut().zip(items) {
            *slot = Some(item);
            filled += 1;
        }
        assert_eq!(filled, count, "ExactSizeIterator reported a wrong length");
        self.len += count;
    }

    /// Removes and returns the element at `index`, clearing the vacated tail slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "remove out of bounds");
        let value = self.slots[index]
            .take()
            .unwrap_or_else(|| unreachable!("live slot {index} is empty"));
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        value
    }

    /// Drops `count` elements starting at `index` and closes the gap.
    ///
    /// # Panics
    ///
    /// Panics if `index + count > len`.
    pub fn remove_range(&mut self, index: usize, count: usize) {
        assert!(
            index <= self.len && count <= self.len - index,
            "remove_range out of bounds"
        );
        if count == 0 {
            return;
        }
        for slot in &mut self.slots[index..index + count] {
            *slot = None;
        }
        self.slots[index..self.len].rotate_left(count);
        self.len -= count;
    }

    /// Shortens the buffer to `len` elements, clearing the rest. No-op if already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        for slot in &mut self.slots[len..self.len] {
            *slot = None;
        }
        self.len = len;
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Sorts `index..index + count` in place.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds `len`.
    pub fn sort_range_by<F>(&mut self, index: usize, count: usize, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        assert!(
            index <= self.len && count <= self.len - index,
            "sort_range_by out of bounds"
        );
        self.slots[index..index + count].sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            _ => unreachable!("live slot is empty"),
        });
    }

    /// Reverses `index..index + count` in place.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds `len`.
    pub fn reverse_range(&mut self, index: usize, count: usize) {
        assert!(
            index <= self.len && count <= self.len - index,
            "reverse_range out of bounds"
        );
        self.slots[index..index + count].reverse();
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        assert!(a < self.len && b < self.len, "swap out of bounds");
        self.slots.swap(a, b);
    }
}

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SlotVec<T> {
    /// Copies the live elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut slots = Self::with_capacity(self.capacity());
        slots.insert_many(0, self.iter().cloned());
        slots
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &Items(self))
            .finish()
    }
}

struct Items<'a, T>(&'a SlotVec<T>);

impl<T: fmt::Debug> fmt::Debug for Items<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T> FromIterator<T> for SlotVec<T> {
    /// Collects into a buffer whose capacity equals the number of items.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut slots = Self::with_capacity(items.len());
        slots.insert_many(0, items);
        slots
    }
}

struct Live<'a, T> {
    inner: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Live<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Live<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Live<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{rc::Rc, vec};

    fn collect(slots: &SlotVec<i32>) -> Vec<i32> {
        slots.iter().copied().collect()
    }

    #[test]
    fn test_new_is_unallocated() {
        let slots = SlotVec::<i32>::new();
        assert_eq!(slots.len(), 0);
        assert_eq!(slots.capacity(), 0);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_push_and_reallocate() {
        let mut slots = SlotVec::with_capacity(2);
        slots.push(1);
        slots.push(2);
        assert_eq!(slots.spare(), 0);

        slots.reallocate(5);
        assert_eq!(slots.capacity(), 5);
        slots.push(3);
        assert_eq!(collect(&slots), vec![1, 2, 3]);
        assert!(slots.is_slot_cleared(3));
        assert!(slots.is_slot_cleared(4));
    }

    #[test]
    #[should_panic(expected = "reallocate below length")]
    fn test_reallocate_below_len_panics() {
        let mut slots = SlotVec::with_capacity(4);
        slots.push(1);
        slots.push(2);
        slots.reallocate(1);
    }

    #[test]
    #[should_panic(expected = "push into a full SlotVec")]
    fn test_push_never_grows() {
        let mut slots = SlotVec::with_capacity(1);
        slots.push(1);
        slots.push(2);
    }

    #[test]
    fn test_insert_shifts_tail() {
        let mut slots = SlotVec::with_capacity(4);
        slots.push(1);
        slots.push(3);
        slots.insert(1, 2);
        slots.insert(3, 4);
        assert_eq!(collect(&slots), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_many_single_shift() {
        let mut slots = SlotVec::with_capacity(6);
        slots.push(0);
        slots.push(4);
        slots.insert_many(1, vec![1, 2, 3]);
        assert_eq!(collect(&slots), vec![0, 1, 2, 3, 4]);
        assert!(slots.is_slot_cleared(5));
    }

    #[test]
    fn test_remove_clears_trailing_slot() {
        let element = Rc::new(7);
        let mut slots = SlotVec::with_capacity(4);
        slots.push(Rc::clone(&element));
        slots.push(Rc::new(8));
        assert_eq!(Rc::strong_count(&element), 2);

        let removed = slots.remove(0);
        drop(removed);
        assert_eq!(Rc::strong_count(&element), 1);
        assert_eq!(slots.len(), 1);
        assert!(slots.is_slot_cleared(1));
    }

    #[test]
    fn test_remove_range() {
        let mut slots: SlotVec<i32> = (0..6).collect();
        slots.remove_range(1, 3);
        assert_eq!(collect(&slots), vec![0, 4, 5]);
        for index in 3..6 {
            assert!(slots.is_slot_cleared(index));
        }
        assert_eq!(slots.capacity(), 6);
    }

    #[test]
    fn test_truncate_and_clear() {
        let mut slots: SlotVec<i32> = (0..4).collect();
        slots.truncate(2);
        assert_eq!(collect(&slots), vec![0, 1]);
        assert!(slots.is_slot_cleared(2));
        slots.clear();
        assert!(slots.is_empty());
        assert!(slots.is_slot_cleared(0));
    }

    #[test]
    fn test_sort_and_reverse_range() {
        let mut slots: SlotVec<i32> = vec![5, 4, 3, 2, 1].into_iter().collect();
        slots.sort_range_by(1, 3, |a, b| a.cmp(b));
        assert_eq!(collect(&slots), vec![5, 2, 3, 4, 1]);
        slots.reverse_range(0, 5);
        assert_eq!(collect(&slots), vec![1, 4, 3, 2, 5]);
    }

    #[test]
    fn test_replace() {
        let mut slots: SlotVec<i32> = (0..3).collect();
        assert_eq!(slots.replace(1, 10), 1);
        assert_eq!(collect(&slots), vec![0, 10, 2]);
    }

    #[test]
    fn test_clone_keeps_capacity() {
        let mut slots = SlotVec::with_capacity(8);
        slots.push(1);
        slots.push(2);
        let cloned = slots.clone();
        assert_eq!(cloned.capacity(), 8);
        assert_eq!(collect(&cloned), vec![1, 2]);
    }
}
