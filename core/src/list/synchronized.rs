use core::cmp::Ordering;

use super::List;
use super::ops::{ListOps, Span};
use crate::error::Result;
use crate::sync_root::SyncRoot;

/// Holds the inner list's root for the duration of every forwarded call.
pub(super) struct Synchronized<T> {
    inner: List<T>,
    root: SyncRoot,
}

impl<T: Clone> Synchronized<T> {
    pub(super) fn new(inner: List<T>) -> Self {
        let root = inner.ops().sync_root();
        Synchronized { inner, root }
    }

    fn locked<R>(&self, op: impl FnOnce(&dyn ListOps<T>) -> R) -> R {
        let _guard = self.root.lock();
        op(self.inner.ops())
    }
}

impl<T: Clone> ListOps<T> for Synchronized<T> {
    fn count(&self) -> Result<usize> {
        self.locked(|inner| inner.count())
    }

    fn capacity(&self) -> Result<usize> {
        self.locked(|inner| inner.capacity())
    }

    fn set_capacity(&self, capacity: usize) -> Result<()> {
        self.locked(|inner| inner.set_capacity(capacity))
    }

    fn trim_to_size(&self) -> Result<()> {
        self.locked(|inner| inner.trim_to_size())
    }

    fn version(&self) -> u64 {
        self.locked(|inner| inner.version())
    }

    fn is_fixed_size(&self) -> bool {
        self.inner.ops().is_fixed_size()
    }

    fn is_read_only(&self) -> bool {
        self.inner.ops().is_read_only()
    }

    fn is_synchronized(&self) -> bool {
        true
    }

    fn sync_root(&self) -> SyncRoot {
        self.root.clone()
    }

    fn get(&self, index: usize) -> Result<T> {
        self.locked(|inner| inner.get(index))
    }

    fn set(&self, index: usize, value: T) -> Result<()> {
        self.locked(|inner| inner.set(index, value))
    }

    fn add(&self, value: T) -> Result<usize> {
        self.locked(|inner| inner.add(value))
    }

    fn insert(&self, index: usize, value: T) -> Result<()> {
        self.locked(|inner| inner.insert(index, value))
    }

    fn insert_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        self.locked(|inner| inner.insert_range(index, items))
    }

    fn add_range(&self, items: Vec<T>) -> Result<()> {
        self.locked(|inner| inner.add_range(items))
    }

    fn set_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        self.locked(|inner| inner.set_range(index, items))
    }

    fn remove_at(&self, index: usize) -> Result<()> {
        self.locked(|inner| inner.remove_at(index))
    }

    fn remove_range(&self, index: usize, count: usize) -> Result<()> {
        self.locked(|inner| inner.remove_range(index, count))
    }

    fn remove_first(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Result<bool> {
        self.locked(|inner| inner.remove_first(predicate))
    }

    fn clear(&self) -> Result<()> {
        self.locked(|inner| inner.clear())
    }

    fn find(&self, span: Span, predicate: &mut dyn FnMut(&T) -> bool, from_end: bool) -> Result<Option<usize>> {
        self.locked(|inner| inner.find(span, predicate, from_end))
    }

    fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        self.locked(|inner| inner.contains(value))
    }

    fn binary_search(&self, span: Span, probe: &mut dyn FnMut(&T) -> Ordering) -> Result<isize> {
        self.locked(|inner| inner.binary_search(span, probe))
    }

    fn sort(&self, span: Span, compare: &mut dyn FnMut(&T, &T) -> Ordering) -> Result<()> {
        self.locked(|inner| inner.sort(span, compare))
    }

    fn reverse(&self, span: Span) -> Result<()> {
        self.locked(|inner| inner.reverse(span))
    }

    fn to_vec(&self, span: Span) -> Result<Vec<T>> {
        self.locked(|inner| inner.to_vec(span))
    }

    fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()> {
        self.locked(|inner| inner.copy_to(index, target, target_index, count))
    }

    fn clone_list(&self) -> Result<List<T>> {
        let copy = self.locked(|inner| inner.clone_list())?;
        Ok(copy.synchronized())
    }
}
