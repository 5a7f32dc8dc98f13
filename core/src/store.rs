//! The backing store: a growable, versioned array of element slots.
//!
//! [`ArrayList`] owns its elements in a [`SlotVec`] and counts every change to its
//! logical content in a monotonic `version`. Capacity tuning (`set_capacity`,
//! `trim_to_size`) never touches the version, so code that only depends on the
//! contents is not disturbed by it.
//!
//! `ArrayList` is a plain owned value with `&mut self` mutators. To share one
//! store between views and iterators, wrap it in a [`List`](crate::List).

use core::cmp::Ordering;
use core::fmt;

use arraylist_slot_vec::SlotVec;

use crate::error::{ListError, Result, check_index, check_range, check_target};
use crate::options::{ListOptions, MAX_ARRAY_LENGTH};

pub struct ArrayList<T> {
    slots: SlotVec<T>,
    version: u64,
    options: ListOptions,
}

impl<T> ArrayList<T> {
    /// Creates an empty list. Nothing is allocated until the first element arrives.
    pub fn new() -> Self {
        Self::with_options(ListOptions::default())
    }

    /// Creates an empty list with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_ARRAY_LENGTH`].
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_ARRAY_LENGTH,
            "capacity {capacity} exceeds MAX_ARRAY_LENGTH"
        );
        Self {
            slots: SlotVec::with_capacity(capacity),
            version: 0,
            options: ListOptions::default(),
        }
    }

    /// Like [`ArrayList::with_capacity`], but reports an oversized request as
    /// [`ListError::CapacityOverflow`] instead of allocating.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        if capacity > MAX_ARRAY_LENGTH {
            return Err(ListError::CapacityOverflow {
                requested: capacity,
            });
        }
        Ok(Self::with_capacity(capacity))
    }

    pub fn with_options(options: ListOptions) -> Self {
        Self {
            slots: SlotVec::new(),
            version: 0,
            options,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Modification counter. Increments on every content change, never on capacity changes.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` if the slot at `index` no longer references an element.
    ///
    /// All slots past `len()` are cleared after any shrink.
    pub fn is_slot_cleared(&self, index: usize) -> bool {
        self.slots.is_slot_cleared(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.slots.iter()
    }

    fn bump(&mut self) {
        self.version += 1;
        tracing::trace!(version = self.version, "list modified");
    }

    /// Makes room for at least `min` elements, growing by the configured policy.
    fn ensure_capacity(&mut self, min: usize) -> Result<()> {
        let current = self.capacity();
        if current >= min {
            return Ok(());
        }
        let new_cap = self
            .options
            .grow(current, min)
            .ok_or(ListError::CapacityOverflow { requested: min })?;
        tracing::debug!(from = current, to = new_cap, "growing list");
        self.slots.reallocate(new_cap);
        Ok(())
    }

    /// Sets the number of allocated slots.
    ///
    /// Setting it to zero reallocates to the default capacity instead of an empty buffer.
    /// The version is left untouched.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len() {
            return Err(ListError::CapacityTooSmall {
                requested: capacity,
                len: self.len(),
            });
        }
        if capacity > self.options.max_capacity {
            return Err(ListError::CapacityOverflow {
                requested: capacity,
            });
        }
        let capacity = if capacity == 0 {
            self.options.default_capacity
        } else {
            capacity
        };
        if capacity != self.capacity() {
            tracing::debug!(from = self.capacity(), to = capacity, "reallocating list");
            self.slots.reallocate(capacity);
        }
        Ok(())
    }

    /// Sets capacity to the current length (to the default capacity when empty).
    pub fn trim_to_size(&mut self) {
        let len = self.len();
        // len never exceeds max_capacity, so this cannot fail
        if let Err(err) = self.set_capacity(len) {
            unreachable!("trimming to the current length failed: {err}");
        }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots.get(index).ok_or(ListError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        check_index(index, self.len())?;
        let old = self.slots.replace(index, value);
        self.bump();
        Ok(old)
    }

    /// Appends `value`, returning the index it was stored at.
    pub fn add(&mut self, value: T) -> Result<usize> {
        let index = self.len();
        self.ensure_capacity(index + 1)?;
        self.slots.push(value);
        self.bump();
        Ok(index)
    }

    /// Inserts `value` at `index`. Inserting at `len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(ListError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        self.ensure_capacity(self.len() + 1)?;
        self.slots.insert(index, value);
        self.bump();
        Ok(())
    }

    /// Inserts every item at `index`, shifting the tail once by the number of items.
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    {
        let items = items.into_iter();
        if index > self.len() {
            return Err(ListError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        let count = items.len();
        if count == 0 {
            return Ok(());
        }
        let min = self
            .len()
            .checked_add(count)
            .ok_or(ListError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        self.ensure_capacity(min)?;
        self.slots.insert_many(index, items);
        self.bump();
        Ok(())
    }

    pub fn add_range<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    {
        self.insert_range(self.len(), items)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        let value = self.slots.remove(index);
        self.bump();
        Ok(value)
    }

    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        check_range(index, count, self.len())?;
        if count > 0 {
            self.slots.remove_range(index, count);
            self.bump();
        }
        Ok(())
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.bump();
    }

    /// Overwrites `index..index + items.len()` with `items`.
    pub fn set_range<I>(&mut self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    {
        let items = items.into_iter();
        check_range(index, items.len(), self.len())?;
        if items.len() == 0 {
            return Ok(());
        }
        for (offset, item) in items.enumerate() {
            self.slots.replace(index + offset, item);
        }
        self.bump();
        Ok(())
    }

    /// Finds the first element in `index..index + count` matching `predicate`.
    pub fn position_in<P>(&self, index: usize, count: usize, mut predicate: P) -> Result<Option<usize>>
    where
        P: FnMut(&T) -> bool,
    {
        check_range(index, count, self.len())?;
        Ok(self
            .slots
            .iter()
            .skip(index)
            .take(count)
            .position(|item| predicate(item))
            .map(|offset| index + offset))
    }

    /// Finds the last element in `index..index + count` matching `predicate`.
    pub fn rposition_in<P>(&self, index: usize, count: usize, mut predicate: P) -> Result<Option<usize>>
    where
        P: FnMut(&T) -> bool,
    {
        check_range(index, count, self.len())?;
        Ok(self
            .slots
            .iter()
            .skip(index)
            .take(count)
            .rposition(|item| predicate(item))
            .map(|offset| index + offset))
    }

    /// Binary search over `index..index + count`, which must already be sorted
    /// consistently with `probe`.
    ///
    /// `probe` compares an element against the target. Returns the index of a
    /// match, or the bitwise complement (`!insertion_point`) when there is none.
    pub fn binary_search_in<F>(&self, index: usize, count: usize, mut probe: F) -> Result<isize>
    where
        F: FnMut(&T) -> Ordering,
    {
        check_range(index, count, self.len())?;
        let mut lo = index;
        let mut hi = index + count;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let item = self.get(mid)?;
            match probe(item) {
                Ordering::Equal => return Ok(mid as isize),
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }
        Ok(!(lo as isize))
    }

    /// Sorts `index..index + count` with `compare`. Bumps the version once.
    pub fn sort_by<F>(&mut self, index: usize, count: usize, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        check_range(index, count, self.len())?;
        self.slots.sort_range_by(index, count, compare);
        self.bump();
        Ok(())
    }

    pub fn reverse(&mut self, index: usize, count: usize) -> Result<()> {
        check_range(index, count, self.len())?;
        self.slots.reverse_range(index, count);
        self.bump();
        Ok(())
    }
}

impl<T: Clone> ArrayList<T> {
    /// A list holding `count` copies of `value`.
    pub fn repeat(value: T, count: usize) -> Result<Self> {
        let mut list = Self::try_with_capacity(count)?;
        list.slots.insert_many(0, core::iter::repeat_n(value, count));
        Ok(list)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.slots.iter().cloned().collect()
    }

    /// Clones `index..index + count` into a new vector.
    pub fn slice_to_vec(&self, index: usize, count: usize) -> Result<Vec<T>> {
        check_range(index, count, self.len())?;
        Ok(self.slots.iter().skip(index).take(count).cloned().collect())
    }

    /// Copies `count` elements starting at `index` into `target[target_index..]`.
    pub fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()> {
        check_range(index, count, self.len())?;
        check_target(target, target_index, count)?;
        for (dst, src) in target[target_index..target_index + count]
            .iter_mut()
            .zip(self.slots.iter().skip(index))
        {
            *dst = src.clone();
        }
        Ok(())
    }
}

impl<T: PartialEq> ArrayList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.slots.iter().any(|item| item == value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.slots.iter().position(|item| item == value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.slots.iter().rposition(|item| item == value)
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.slots.remove(index);
                self.bump();
                true
            }
            None => false,
        }
    }
}

impl<T: Ord> ArrayList<T> {
    pub fn sort(&mut self) {
        let len = self.len();
        self.slots.sort_range_by(0, len, T::cmp);
        self.bump();
    }

    pub fn binary_search(&self, value: &T) -> isize {
        match self.binary_search_in(0, self.len(), |item| item.cmp(value)) {
            Ok(found) => found,
            Err(err) => unreachable!("whole-list search is always in range: {err}"),
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    /// Shallow copy: new slots, same element values, same capacity and version.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            version: self.version,
            options: self.options,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("items", &self.slots)
            .field("version", &self.version)
            .finish()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    /// Takes ownership of the elements; capacity equals their count.
    fn from(items: Vec<T>) -> Self {
        Self {
            slots: items.into_iter().collect(),
            version: 0,
            options: ListOptions::default(),
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
            version: 0,
            options: ListOptions::default(),
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
