//! Shared list handles and their views.
//!
//! A [`List`] is a cheap, clonable handle to one node of a small graph:
//!
//! ```text
//! Synchronized ──▶ FixedSize ──▶ Plain (ArrayList store)
//!                                  ▲
//!                   Range ─────────┘
//! ```
//!
//! The node kinds form a closed set ([`ListKind`]):
//!
//! - **Plain** owns an [`ArrayList`] and does the real work.
//! - **FixedSize** and **ReadOnly** forward to their inner list and refuse a set of writes.
//! - **Synchronized** holds its inner list's [`SyncRoot`] for the duration of every call.
//! - **Range** is a live window `[index, index + count)` into a base list.
//! - **Adapter** presents any [`Collection`] as a list without copying it.
//!
//! Cloning a `List` aliases the same node, like copying a reference. Use
//! [`List::clone_list`] for a shallow copy of the contents.
//!
//! # Example
//!
//! ```
//! use arraylist_core::{List, ListError};
//!
//! let list: List<i32> = (0..5).collect();
//! let window = list.get_range(1, 3).unwrap();
//! assert_eq!(window.to_vec().unwrap(), vec![1, 2, 3]);
//!
//! window.insert(1, 9).unwrap();
//! assert_eq!(list.to_vec().unwrap(), vec![0, 1, 9, 2, 3, 4]);
//!
//! // Changing the base behind the window's back invalidates it.
//! list.add(5).unwrap();
//! assert_eq!(window.count(), Err(ListError::StaleView));
//! ```

mod adapter;
mod fixed_size;
mod ops;
mod plain;
mod range;
mod read_only;
mod synchronized;

use core::cmp::Ordering;
use core::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::collection::Collection;
use crate::error::Result;
use crate::iter::ListIter;
use crate::options::ListOptions;
use crate::store::ArrayList;
use crate::sync_root::SyncRoot;

use self::adapter::Adapter;
use self::fixed_size::FixedSize;
use self::ops::{ListOps, Span};
use self::plain::Plain;
use self::range::RangeView;
use self::read_only::ReadOnly;
use self::synchronized::Synchronized;

/// Which kind of node a [`List`] handle points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Plain,
    FixedSize,
    ReadOnly,
    Synchronized,
    Range,
    Adapter,
}

enum Node<T> {
    Plain(Plain<T>),
    FixedSize(FixedSize<T>),
    ReadOnly(ReadOnly<T>),
    Synchronized(Synchronized<T>),
    Range(RangeView<T>),
    Adapter(Adapter<T>),
}

impl<T: Clone> Node<T> {
    fn ops(&self) -> &dyn ListOps<T> {
        match self {
            Node::Plain(node) => node,
            Node::FixedSize(node) => node,
            Node::ReadOnly(node) => node,
            Node::Synchronized(node) => node,
            Node::Range(node) => node,
            Node::Adapter(node) => node,
        }
    }
}

/// A shared handle to an array list or a view over one.
pub struct List<T> {
    node: Arc<Node<T>>,
}

static_assertions::assert_eq_size!(List<u8>, usize);
static_assertions::assert_impl_all!(List<u64>: Send, Sync, Clone);

impl<T> Clone for List<T> {
    /// Returns another handle to the same list. Nothing is copied.
    fn clone(&self) -> Self {
        List {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T> List<T> {
    fn from_node(node: Node<T>) -> Self {
        List {
            node: Arc::new(node),
        }
    }

    /// Wraps an existing store.
    pub fn from_store(store: ArrayList<T>) -> Self {
        Self::from_node(Node::Plain(Plain::new(store)))
    }

    pub fn new() -> Self {
        Self::from_store(ArrayList::new())
    }

    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_ARRAY_LENGTH`](crate::MAX_ARRAY_LENGTH). See
    /// [`List::try_with_capacity`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_store(ArrayList::with_capacity(capacity))
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::from_store(ArrayList::try_with_capacity(capacity)?))
    }

    pub fn with_options(options: ListOptions) -> Self {
        Self::from_store(ArrayList::with_options(options))
    }

    pub fn kind(&self) -> ListKind {
        match &*self.node {
            Node::Plain(_) => ListKind::Plain,
            Node::FixedSize(_) => ListKind::FixedSize,
            Node::ReadOnly(_) => ListKind::ReadOnly,
            Node::Synchronized(_) => ListKind::Synchronized,
            Node::Range(_) => ListKind::Range,
            Node::Adapter(_) => ListKind::Adapter,
        }
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl<T: Clone> List<T> {
    fn ops(&self) -> &dyn ListOps<T> {
        self.node.ops()
    }

    /// A list holding `count` copies of `value`.
    pub fn repeat(value: T, count: usize) -> Result<Self> {
        Ok(Self::from_store(ArrayList::repeat(value, count)?))
    }

    /// Presents `collection` as a list without copying it.
    ///
    /// The adapter keeps its own version counter, bumped on every write made
    /// through it. Changes made to `collection` directly are not seen by that
    /// counter, so iterators over the adapter cannot detect them.
    pub fn adapter<C>(collection: Arc<RwLock<C>>) -> Self
    where
        C: Collection<T> + Send + Sync + 'static,
        T: 'static,
    {
        Self::from_node(Node::Adapter(Adapter::new(collection)))
    }

    /// A view that allows replacing elements but not adding or removing them.
    pub fn fixed_size(&self) -> Self {
        Self::from_node(Node::FixedSize(FixedSize::new(self.clone())))
    }

    /// A view that only allows reads.
    pub fn read_only(&self) -> Self {
        Self::from_node(Node::ReadOnly(ReadOnly::new(self.clone())))
    }

    /// A view that serializes every call on this list's [`SyncRoot`].
    ///
    /// Wrapping a synchronized list again reuses the same root.
    pub fn synchronized(&self) -> Self {
        Self::from_node(Node::Synchronized(Synchronized::new(self.clone())))
    }

    /// A live view of `index..index + count`.
    ///
    /// Writes through the view land in this list. Any change made to this list
    /// some other way makes the view stale: every later call on it fails with
    /// [`ListError::StaleView`](crate::ListError::StaleView).
    pub fn get_range(&self, index: usize, count: usize) -> Result<Self> {
        Ok(Self::from_node(Node::Range(RangeView::new(
            self.clone(),
            index,
            count,
        )?)))
    }

    /// A shallow copy: new storage, same element values.
    ///
    /// Decorators copy their inner list and re-wrap it in the same kind of view.
    pub fn clone_list(&self) -> Result<Self> {
        self.ops().clone_list()
    }

    // --- Properties ---

    pub fn count(&self) -> Result<usize> {
        self.ops().count()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    pub fn capacity(&self) -> Result<usize> {
        self.ops().capacity()
    }

    /// Changes the allocation. Never changes [`version`](Self::version).
    pub fn set_capacity(&self, capacity: usize) -> Result<()> {
        self.ops().set_capacity(capacity)
    }

    pub fn trim_to_size(&self) -> Result<()> {
        self.ops().trim_to_size()
    }

    /// Modification counter that iterators and range views compare against.
    pub fn version(&self) -> u64 {
        self.ops().version()
    }

    pub fn is_fixed_size(&self) -> bool {
        self.ops().is_fixed_size()
    }

    pub fn is_read_only(&self) -> bool {
        self.ops().is_read_only()
    }

    pub fn is_synchronized(&self) -> bool {
        self.ops().is_synchronized()
    }

    /// The lock synchronized views of this list serialize on.
    pub fn sync_root(&self) -> SyncRoot {
        self.ops().sync_root()
    }

    // --- Element access ---

    pub fn get(&self, index: usize) -> Result<T> {
        self.ops().get(index)
    }

    pub fn set(&self, index: usize, value: T) -> Result<()> {
        self.ops().set(index, value)
    }

    /// Appends `value`, returning its index.
    pub fn add(&self, value: T) -> Result<usize> {
        self.ops().add(value)
    }

    /// Appends `items` in one call, so no other write lands between reading
    /// the end and inserting there.
    pub fn add_range<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.ops().add_range(items.into_iter().collect())
    }

    pub fn insert(&self, index: usize, value: T) -> Result<()> {
        self.ops().insert(index, value)
    }

    pub fn insert_range<I>(&self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.ops().insert_range(index, items.into_iter().collect())
    }

    /// Inserts the contents of `items` at `index`.
    ///
    /// `items` may be this list or a view over the same store; its contents are
    /// read in full before anything is shifted.
    pub fn insert_list(&self, index: usize, items: &List<T>) -> Result<()> {
        let snapshot = items.to_vec()?;
        self.ops().insert_range(index, snapshot)
    }

    /// Overwrites `index..index + items.len()`.
    pub fn set_range<I>(&self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.ops().set_range(index, items.into_iter().collect())
    }

    /// Overwrites elements starting at `index` with the contents of `items`,
    /// which may alias this list.
    pub fn set_list(&self, index: usize, items: &List<T>) -> Result<()> {
        let snapshot = items.to_vec()?;
        self.ops().set_range(index, snapshot)
    }

    pub fn remove_at(&self, index: usize) -> Result<()> {
        self.ops().remove_at(index)
    }

    pub fn remove_range(&self, index: usize, count: usize) -> Result<()> {
        self.ops().remove_range(index, count)
    }

    pub fn clear(&self) -> Result<()> {
        self.ops().clear()
    }

    // --- Copying out ---

    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.ops().to_vec(Span::All)
    }

    /// Copies `count` elements starting at `index` into `target[target_index..]`.
    pub fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()> {
        self.ops().copy_to(index, target, target_index, count)
    }

    // --- Ordering ---

    /// Searches `index..index + count`, assumed sorted by `compare`.
    ///
    /// Returns the index of a match, or `!insertion_point` when `value` is absent.
    pub fn binary_search_by<F>(&self, index: usize, count: usize, value: &T, mut compare: F) -> Result<isize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.ops()
            .binary_search(Span::new(index, count), &mut |item| compare(item, value))
    }

    /// Sorts `index..index + count` with `compare`.
    pub fn sort_by<F>(&self, index: usize, count: usize, mut compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.ops().sort(Span::new(index, count), &mut compare)
    }

    pub fn reverse(&self) -> Result<()> {
        self.ops().reverse(Span::All)
    }

    pub fn reverse_range(&self, index: usize, count: usize) -> Result<()> {
        self.ops().reverse(Span::new(index, count))
    }

    // --- Iteration ---

    /// A fail-fast iterator over the whole list.
    pub fn iter(&self) -> ListIter<T> {
        ListIter::new(self.clone())
    }

    /// A fail-fast iterator over `index..index + count`.
    pub fn iter_range(&self, index: usize, count: usize) -> Result<ListIter<T>> {
        ListIter::bounded(self.clone(), index, count)
    }
}

impl<T: Clone + PartialEq> List<T> {
    pub fn contains(&self, value: &T) -> Result<bool> {
        self.ops().contains(value)
    }

    pub fn index_of(&self, value: &T) -> Result<Option<usize>> {
        self.ops().find(Span::All, &mut |item| item == value, false)
    }

    /// First occurrence of `value` within `index..index + count`.
    pub fn index_of_in(&self, value: &T, index: usize, count: usize) -> Result<Option<usize>> {
        self.ops()
            .find(Span::new(index, count), &mut |item| item == value, false)
    }

    pub fn last_index_of(&self, value: &T) -> Result<Option<usize>> {
        self.ops().find(Span::All, &mut |item| item == value, true)
    }

    /// Last occurrence of `value` within `index..index + count`.
    pub fn last_index_of_in(&self, value: &T, index: usize, count: usize) -> Result<Option<usize>> {
        self.ops()
            .find(Span::new(index, count), &mut |item| item == value, true)
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove(&self, value: &T) -> Result<bool> {
        self.ops().remove_first(&mut |item| item == value)
    }
}

impl<T: Clone + Ord> List<T> {
    /// Binary search over the whole list, assumed sorted.
    pub fn binary_search(&self, value: &T) -> Result<isize> {
        self.ops().binary_search(Span::All, &mut |item| item.cmp(value))
    }

    pub fn sort(&self) -> Result<()> {
        self.ops().sort(Span::All, &mut T::cmp)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<ArrayList<T>> for List<T> {
    fn from(store: ArrayList<T>) -> Self {
        Self::from_store(store)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_store(ArrayList::from(items))
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_store(iter.into_iter().collect())
    }
}

impl<T: Clone> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("kind", &self.kind())
            .field("version", &self.version())
            .finish()
    }
}

/// Lists can themselves be adapted, and are adapted by delegation.
impl<T: Clone + PartialEq> Collection<T> for List<T> {
    fn count(&self) -> Result<usize> {
        List::count(self)
    }

    fn get(&self, index: usize) -> Result<T> {
        List::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        List::set(self, index, value)
    }

    fn add(&mut self, value: T) -> Result<usize> {
        List::add(self, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        List::insert(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<()> {
        List::remove_at(self, index)
    }

    fn contains(&self, value: &T) -> Result<bool> {
        List::contains(self, value)
    }

    fn copy_into(&self, target: &mut [T], offset: usize) -> Result<()> {
        let items = self.to_vec()?;
        crate::error::check_target(target, offset, items.len())?;
        for (dst, src) in target[offset..].iter_mut().zip(items) {
            *dst = src;
        }
        Ok(())
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = Result<T>> + '_> {
        Box::new(self.iter())
    }

    fn is_fixed_size(&self) -> bool {
        List::is_fixed_size(self)
    }

    fn is_read_only(&self) -> bool {
        List::is_read_only(self)
    }

    fn as_list(&self) -> Option<&List<T>> {
        Some(self)
    }
}
