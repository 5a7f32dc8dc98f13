use core::cmp::Ordering;

use crate::error::{Result, check_range};
use crate::list::List;
use crate::sync_root::SyncRoot;

/// Part of a list an operation applies to.
///
/// `All` is resolved against the length inside the operation, so whole-list
/// calls stay atomic under a synchronized view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Span {
    All,
    Range { index: usize, count: usize },
}

impl Span {
    pub(crate) fn new(index: usize, count: usize) -> Self {
        Span::Range { index, count }
    }

    /// Returns `(index, count)`, checked against `len`.
    pub(crate) fn resolve(self, len: usize) -> Result<(usize, usize)> {
        match self {
            Span::All => Ok((0, len)),
            Span::Range { index, count } => {
                check_range(index, count, len)?;
                Ok((index, count))
            }
        }
    }
}

/// What every node of a [`List`] implements.
///
/// Closures are passed as `&mut dyn` so views can forward them to their base
/// without instantiating a new generic per nesting level.
pub(crate) trait ListOps<T> {
    fn count(&self) -> Result<usize>;
    fn capacity(&self) -> Result<usize>;
    fn set_capacity(&self, capacity: usize) -> Result<()>;
    fn trim_to_size(&self) -> Result<()>;
    fn version(&self) -> u64;

    fn is_fixed_size(&self) -> bool;
    fn is_read_only(&self) -> bool;
    fn is_synchronized(&self) -> bool {
        false
    }
    fn sync_root(&self) -> SyncRoot;

    fn get(&self, index: usize) -> Result<T>;
    fn set(&self, index: usize, value: T) -> Result<()>;
    fn add(&self, value: T) -> Result<usize>;
    fn insert(&self, index: usize, value: T) -> Result<()>;
    fn insert_range(&self, index: usize, items: Vec<T>) -> Result<()>;
    /// Appends `items` at the end as resolved inside the call.
    fn add_range(&self, items: Vec<T>) -> Result<()>;
    fn set_range(&self, index: usize, items: Vec<T>) -> Result<()>;
    fn remove_at(&self, index: usize) -> Result<()>;
    fn remove_range(&self, index: usize, count: usize) -> Result<()>;
    fn remove_first(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Result<bool>;
    fn clear(&self) -> Result<()>;

    fn find(&self, span: Span, predicate: &mut dyn FnMut(&T) -> bool, from_end: bool) -> Result<Option<usize>>;
    fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.find(Span::All, &mut |item| item == value, false)?.is_some())
    }
    fn binary_search(&self, span: Span, probe: &mut dyn FnMut(&T) -> Ordering) -> Result<isize>;
    fn sort(&self, span: Span, compare: &mut dyn FnMut(&T, &T) -> Ordering) -> Result<()>;
    fn reverse(&self, span: Span) -> Result<()>;

    fn to_vec(&self, span: Span) -> Result<Vec<T>>;
    fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()>;
    fn clone_list(&self) -> Result<List<T>>;
}
