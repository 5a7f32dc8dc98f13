use core::cmp::Ordering;

use super::List;
use super::ops::{ListOps, Span};
use crate::error::{ListError, Restriction, Result};
use crate::sync_root::SyncRoot;

/// Forwards to its inner list, refusing anything that changes the count.
pub(super) struct FixedSize<T> {
    inner: List<T>,
}

impl<T> FixedSize<T> {
    pub(super) fn new(inner: List<T>) -> Self {
        FixedSize { inner }
    }
}

fn denied(operation: &'static str) -> ListError {
    ListError::unsupported(operation, Restriction::FixedSize)
}

impl<T: Clone> ListOps<T> for FixedSize<T> {
    fn count(&self) -> Result<usize> {
        self.inner.ops().count()
    }

    fn capacity(&self) -> Result<usize> {
        self.inner.ops().capacity()
    }

    fn set_capacity(&self, _capacity: usize) -> Result<()> {
        Err(denied("set_capacity"))
    }

    fn trim_to_size(&self) -> Result<()> {
        Err(denied("trim_to_size"))
    }

    fn version(&self) -> u64 {
        self.inner.ops().version()
    }

    fn is_fixed_size(&self) -> bool {
        true
    }

    fn is_read_only(&self) -> bool {
        self.inner.ops().is_read_only()
    }

    fn sync_root(&self) -> SyncRoot {
        self.inner.ops().sync_root()
    }

    fn get(&self, index: usize) -> Result<T> {
        self.inner.ops().get(index)
    }

    fn set(&self, index: usize, value: T) -> Result<()> {
        self.inner.ops().set(index, value)
    }

    fn add(&self, _value: T) -> Result<usize> {
        Err(denied("add"))
    }

    fn insert(&self, _index: usize, _value: T) -> Result<()> {
        Err(denied("insert"))
    }

    fn insert_range(&self, _index: usize, _items: Vec<T>) -> Result<()> {
        Err(denied("insert_range"))
    }

    fn add_range(&self, _items: Vec<T>) -> Result<()> {
        Err(denied("add_range"))
    }

    fn set_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        self.inner.ops().set_range(index, items)
    }

    fn remove_at(&self, _index: usize) -> Result<()> {
        Err(denied("remove_at"))
    }

    fn remove_range(&self, _index: usize, _count: usize) -> Result<()> {
        Err(denied("remove_range"))
    }

    fn remove_first(&self, _predicate: &mut dyn FnMut(&T) -> bool) -> Result<bool> {
        Err(denied("remove"))
    }

    fn clear(&self) -> Result<()> {
        Err(denied("clear"))
    }

    fn find(&self, span: Span, predicate: &mut dyn FnMut(&T) -> bool, from_end: bool) -> Result<Option<usize>> {
        self.inner.ops().find(span, predicate, from_end)
    }

    fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        self.inner.ops().contains(value)
    }

    fn binary_search(&self, span: Span, probe: &mut dyn FnMut(&T) -> Ordering) -> Result<isize> {
        self.inner.ops().binary_search(span, probe)
    }

    fn sort(&self, span: Span, compare: &mut dyn FnMut(&T, &T) -> Ordering) -> Result<()> {
        self.inner.ops().sort(span, compare)
    }

    fn reverse(&self, span: Span) -> Result<()> {
        self.inner.ops().reverse(span)
    }

    fn to_vec(&self, span: Span) -> Result<Vec<T>> {
        self.inner.ops().to_vec(span)
    }

    fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()> {
        self.inner.ops().copy_to(index, target, target_index, count)
    }

    fn clone_list(&self) -> Result<List<T>> {
        Ok(self.inner.clone_list()?.fixed_size())
    }
}
