use core::cmp::Ordering;

use super::List;
use super::ops::{ListOps, Span};
use crate::error::{ListError, Restriction, Result};
use crate::sync_root::SyncRoot;

/// Forwards reads to its inner list. Every write fails.
pub(super) struct ReadOnly<T> {
    inner: List<T>,
}

impl<T> ReadOnly<T> {
    pub(super) fn new(inner: List<T>) -> Self {
        ReadOnly { inner }
    }
}

fn denied(operation: &'static str) -> ListError {
    ListError::unsupported(operation, Restriction::ReadOnly)
}

impl<T: Clone> ListOps<T> for ReadOnly<T> {
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
        true
    }

    fn sync_root(&self) -> SyncRoot {
        self.inner.ops().sync_root()
    }

    fn get(&self, index: usize) -> Result<T> {
        self.inner.ops().get(index)
    }

    fn set(&self, _index: usize, _value: T) -> Result<()> {
        Err(denied("set"))
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

    fn set_range(&self, _index: usize, _items: Vec<T>) -> Result<()> {
        Err(denied("set_range"))
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

    fn sort(&self, _span: Span, _compare: &mut dyn FnMut(&T, &T) -> Ordering) -> Result<()> {
        Err(denied("sort"))
    }

    fn reverse(&self, _span: Span) -> Result<()> {
        Err(denied("reverse"))
    }

    fn to_vec(&self, span: Span) -> Result<Vec<T>> {
        self.inner.ops().to_vec(span)
    }

    fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()> {
        self.inner.ops().copy_to(index, target, target_index, count)
    }

    fn clone_list(&self) -> Result<List<T>> {
        Ok(self.inner.clone_list()?.read_only())
    }
}
