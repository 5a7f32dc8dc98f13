use core::cmp::Ordering;

use parking_lot::RwLock;

use super::List;
use super::ops::{ListOps, Span};
use crate::error::Result;
use crate::store::ArrayList;
use crate::sync_root::SyncRoot;

/// A node that owns its store.
///
/// The lock is held for a single call only, never while calling out to
/// another node.
pub(super) struct Plain<T> {
    store: RwLock<ArrayList<T>>,
    root: SyncRoot,
}

impl<T> Plain<T> {
    pub(super) fn new(store: ArrayList<T>) -> Self {
        Plain {
            store: RwLock::new(store),
            root: SyncRoot::new(),
        }
    }
}

impl<T: Clone> ListOps<T> for Plain<T> {
    fn count(&self) -> Result<usize> {
        Ok(self.store.read().len())
    }

    fn capacity(&self) -> Result<usize> {
        Ok(self.store.read().capacity())
    }

    fn set_capacity(&self, capacity: usize) -> Result<()> {
        self.store.write().set_capacity(capacity)
    }

    fn trim_to_size(&self) -> Result<()> {
        self.store.write().trim_to_size();
        Ok(())
    }

    fn version(&self) -> u64 {
        self.store.read().version()
    }

    fn is_fixed_size(&self) -> bool {
        false
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn sync_root(&self) -> SyncRoot {
        self.root.clone()
    }

    fn get(&self, index: usize) -> Result<T> {
        self.store.read().get(index).cloned()
    }

    fn set(&self, index: usize, value: T) -> Result<()> {
        let old = self.store.write().set(index, value)?;
        // the replaced element is released outside the lock
        drop(old);
        Ok(())
    }

    fn add(&self, value: T) -> Result<usize> {
        self.store.write().add(value)
    }

    fn insert(&self, index: usize, value: T) -> Result<()> {
        self.store.write().insert(index, value)
    }

    fn insert_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        self.store.write().insert_range(index, items)
    }

    fn add_range(&self, items: Vec<T>) -> Result<()> {
        self.store.write().add_range(items)
    }

    fn set_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        self.store.write().set_range(index, items)
    }

    fn remove_at(&self, index: usize) -> Result<()> {
        let removed = self.store.write().remove_at(index)?;
        drop(removed);
        Ok(())
    }

    fn remove_range(&self, index: usize, count: usize) -> Result<()> {
        self.store.write().remove_range(index, count)
    }

    fn remove_first(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Result<bool> {
        let mut store = self.store.write();
        let len = store.len();
        match store.position_in(0, len, predicate)? {
            Some(index) => {
                store.remove_at(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&self) -> Result<()> {
        self.store.write().clear();
        Ok(())
    }

    fn find(&self, span: Span, predicate: &mut dyn FnMut(&T) -> bool, from_end: bool) -> Result<Option<usize>> {
        let store = self.store.read();
        let (index, count) = span.resolve(store.len())?;
        if from_end {
            store.rposition_in(index, count, predicate)
        } else {
            store.position_in(index, count, predicate)
        }
    }

    fn binary_search(&self, span: Span, probe: &mut dyn FnMut(&T) -> Ordering) -> Result<isize> {
        let store = self.store.read();
        let (index, count) = span.resolve(store.len())?;
        store.binary_search_in(index, count, probe)
    }

    fn sort(&self, span: Span, compare: &mut dyn FnMut(&T, &T) -> Ordering) -> Result<()> {
        let mut store = self.store.write();
        let (index, count) = span.resolve(store.len())?;
        store.sort_by(index, count, compare)
    }

    fn reverse(&self, span: Span) -> Result<()> {
        let mut store = self.store.write();
        let (index, count) = span.resolve(store.len())?;
        store.reverse(index, count)
    }

    fn to_vec(&self, span: Span) -> Result<Vec<T>> {
        let store = self.store.read();
        match span {
            Span::All => Ok(store.to_vec()),
            Span::Range { index, count } => store.slice_to_vec(index, count),
        }
    }

    fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()> {
        self.store.read().copy_to(index, target, target_index, count)
    }

    fn clone_list(&self) -> Result<List<T>> {
        Ok(List::from_store(self.store.read().clone()))
    }
}
