use core::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{self, AtomicU64};

use parking_lot::RwLock;

use super::List;
use super::ops::{ListOps, Span};
use crate::collection::Collection;
use crate::error::{ListError, Restriction, Result, check_range, check_target};
use crate::sync_root::SyncRoot;

type Shared<T> = Arc<RwLock<dyn Collection<T> + Send + Sync>>;

/// Presents a [`Collection`] as a list.
///
/// Whole-collection reads (`contains`, full copies) go to the collection's own
/// methods. List operations it has no method for are built out of `get`,
/// `set` and `remove_at`.
pub(super) struct Adapter<T> {
    collection: Shared<T>,
    version: AtomicU64,
    root: SyncRoot,
}

impl<T: Clone> Adapter<T> {
    pub(super) fn new<C>(collection: Arc<RwLock<C>>) -> Self
    where
        C: Collection<T> + Send + Sync + 'static,
        T: 'static,
    {
        // Adapting a list shares that list's root.
        let root = collection
            .read()
            .as_list()
            .map(|list| list.sync_root())
            .unwrap_or_default();
        Adapter {
            collection,
            version: AtomicU64::new(0),
            root,
        }
    }

    fn bump(&self) {
        let version = self.version.fetch_add(1, atomic::Ordering::Relaxed) + 1;
        tracing::trace!(version, "adapter modified");
    }

    /// Fails unless elements may be replaced.
    fn check_writable(&self, operation: &'static str) -> Result<()> {
        if self.collection.read().is_read_only() {
            return Err(ListError::unsupported(operation, Restriction::ReadOnly));
        }
        Ok(())
    }

    /// Fails unless elements may be added or removed.
    fn check_resizable(&self, operation: &'static str) -> Result<()> {
        let collection = self.collection.read();
        if collection.is_read_only() {
            return Err(ListError::unsupported(operation, Restriction::ReadOnly));
        }
        if collection.is_fixed_size() {
            return Err(ListError::unsupported(operation, Restriction::FixedSize));
        }
        Ok(())
    }
}

impl<T: Clone> ListOps<T> for Adapter<T> {
    fn count(&self) -> Result<usize> {
        self.collection.read().count()
    }

    fn capacity(&self) -> Result<usize> {
        self.count()
    }

    fn set_capacity(&self, capacity: usize) -> Result<()> {
        let len = self.count()?;
        if capacity < len {
            return Err(ListError::CapacityTooSmall {
                requested: capacity,
                len,
            });
        }
        Ok(())
    }

    fn trim_to_size(&self) -> Result<()> {
        Ok(())
    }

    fn version(&self) -> u64 {
        self.version.load(atomic::Ordering::Relaxed)
    }

    fn is_fixed_size(&self) -> bool {
        self.collection.read().is_fixed_size()
    }

    fn is_read_only(&self) -> bool {
        self.collection.read().is_read_only()
    }

    fn sync_root(&self) -> SyncRoot {
        self.root.clone()
    }

    fn get(&self, index: usize) -> Result<T> {
        self.collection.read().get(index)
    }

    fn set(&self, index: usize, value: T) -> Result<()> {
        self.check_writable("set")?;
        self.collection.write().set(index, value)?;
        self.bump();
        Ok(())
    }

    fn add(&self, value: T) -> Result<usize> {
        self.check_resizable("add")?;
        let index = self.collection.write().add(value)?;
        self.bump();
        Ok(index)
    }

    fn insert(&self, index: usize, value: T) -> Result<()> {
        self.check_resizable("insert")?;
        self.collection.write().insert(index, value)?;
        self.bump();
        Ok(())
    }

    fn insert_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        self.check_resizable("insert_range")?;
        let list = self.collection.read().as_list().cloned();
        match list {
            Some(list) => list.ops().insert_range(index, items)?,
            None => {
                let mut collection = self.collection.write();
                let len = collection.count()?;
                if index > len {
                    return Err(ListError::OutOfRange { index, len });
                }
                for (offset, item) in items.into_iter().enumerate() {
                    collection.insert(index + offset, item)?;
                }
            }
        }
        self.bump();
        Ok(())
    }

    fn add_range(&self, items: Vec<T>) -> Result<()> {
        self.check_resizable("add_range")?;
        let list = self.collection.read().as_list().cloned();
        match list {
            Some(list) => list.ops().add_range(items)?,
            None => {
                let mut collection = self.collection.write();
                for item in items {
                    collection.add(item)?;
                }
            }
        }
        self.bump();
        Ok(())
    }

    fn set_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        self.check_writable("set_range")?;
        let mut collection = self.collection.write();
        check_range(index, items.len(), collection.count()?)?;
        for (offset, item) in items.into_iter().enumerate() {
            collection.set(index + offset, item)?;
        }
        self.bump();
        Ok(())
    }

    fn remove_at(&self, index: usize) -> Result<()> {
        self.check_resizable("remove_at")?;
        self.collection.write().remove_at(index)?;
        self.bump();
        Ok(())
    }

    fn remove_range(&self, index: usize, count: usize) -> Result<()> {
        self.check_resizable("remove_range")?;
        let mut collection = self.collection.write();
        check_range(index, count, collection.count()?)?;
        for at in (index..index + count).rev() {
            collection.remove_at(at)?;
        }
        if count > 0 {
            self.bump();
        }
        Ok(())
    }

    fn remove_first(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Result<bool> {
        self.check_resizable("remove")?;
        let mut collection = self.collection.write();
        for index in 0..collection.count()? {
            if predicate(&collection.get(index)?) {
                collection.remove_at(index)?;
                self.bump();
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn clear(&self) -> Result<()> {
        self.check_resizable("clear")?;
        let mut collection = self.collection.write();
        for index in (0..collection.count()?).rev() {
            collection.remove_at(index)?;
        }
        self.bump();
        Ok(())
    }

    fn find(&self, span: Span, predicate: &mut dyn FnMut(&T) -> bool, from_end: bool) -> Result<Option<usize>> {
        let collection = self.collection.read();
        let (index, count) = span.resolve(collection.count()?)?;
        let mut probe = |at: usize| -> Result<Option<usize>> {
            Ok(predicate(&collection.get(at)?).then_some(at))
        };
        if from_end {
            for at in (index..index + count).rev() {
                if let Some(found) = probe(at)? {
                    return Ok(Some(found));
                }
            }
        } else {
            for at in index..index + count {
                if let Some(found) = probe(at)? {
                    return Ok(Some(found));
                }
            }
        }
        Ok(None)
    }

    fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        self.collection.read().contains(value)
    }

    fn binary_search(&self, span: Span, probe: &mut dyn FnMut(&T) -> Ordering) -> Result<isize> {
        let collection = self.collection.read();
        let (index, count) = span.resolve(collection.count()?)?;
        let mut lo = index;
        let mut hi = index + count;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match probe(&collection.get(mid)?) {
                Ordering::Equal => return Ok(mid as isize),
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }
        Ok(!(lo as isize))
    }

    fn sort(&self, span: Span, compare: &mut dyn FnMut(&T, &T) -> Ordering) -> Result<()> {
        self.check_writable("sort")?;
        let mut collection = self.collection.write();
        let (index, count) = span.resolve(collection.count()?)?;
        let mut items = (index..index + count)
            .map(|at| collection.get(at))
            .collect::<Result<Vec<_>>>()?;
        items.sort_by(|a, b| compare(a, b));
        for (offset, item) in items.into_iter().enumerate() {
            collection.set(index + offset, item)?;
        }
        self.bump();
        Ok(())
    }

    fn reverse(&self, span: Span) -> Result<()> {
        self.check_writable("reverse")?;
        let mut collection = self.collection.write();
        let (index, count) = span.resolve(collection.count()?)?;
        if count > 1 {
            let (mut lo, mut hi) = (index, index + count - 1);
            while lo < hi {
                let low = collection.get(lo)?;
                let high = collection.get(hi)?;
                collection.set(lo, high)?;
                collection.set(hi, low)?;
                lo += 1;
                hi -= 1;
            }
        }
        self.bump();
        Ok(())
    }

    fn to_vec(&self, span: Span) -> Result<Vec<T>> {
        let collection = self.collection.read();
        if span == Span::All {
            return collection.enumerate().collect();
        }
        let (index, count) = span.resolve(collection.count()?)?;
        (index..index + count).map(|at| collection.get(at)).collect()
    }

    fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()> {
        let collection = self.collection.read();
        let len = collection.count()?;
        check_range(index, count, len)?;
        check_target(target, target_index, count)?;
        if index == 0 && count == len {
            return collection.copy_into(target, target_index);
        }
        for offset in 0..count {
            target[target_index + offset] = collection.get(index + offset)?;
        }
        Ok(())
    }

    fn clone_list(&self) -> Result<List<T>> {
        Ok(List::from(self.to_vec(Span::All)?))
    }
}
