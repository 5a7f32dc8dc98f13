use core::cmp::Ordering;
use core::ops::{Deref, DerefMut};

use parking_lot::{Mutex, MutexGuard};

use super::List;
use super::ops::{ListOps, Span};
use crate::error::{ListError, Restriction, Result, check_index, check_range};
use crate::sync_root::{SyncGuard, SyncRoot};

struct Window {
    base_index: usize,
    len: usize,
    /// Base version as of the last call through this view.
    base_version: u64,
    version: u64,
}

/// A live window into a base list.
///
/// The window lock is held across the forwarded call, so writes through one
/// view are applied and recorded as a unit. Over a synchronized base the root
/// is taken before the window, the same order every other caller uses.
pub(super) struct RangeView<T> {
    base: List<T>,
    window: Mutex<Window>,
    /// The base's root, if the base is synchronized.
    root: Option<SyncRoot>,
}

/// Window lock, plus the root lock when the base is synchronized.
struct Locked<'a> {
    // released before the root
    window: MutexGuard<'a, Window>,
    _root: Option<SyncGuard<'a>>,
}

impl Deref for Locked<'_> {
    type Target = Window;

    fn deref(&self) -> &Window {
        &self.window
    }
}

impl DerefMut for Locked<'_> {
    fn deref_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl<T: Clone> RangeView<T> {
    pub(super) fn new(base: List<T>, index: usize, count: usize) -> Result<Self> {
        check_range(index, count, base.ops().count()?)?;
        let base_version = base.ops().version();
        let root = base.ops().is_synchronized().then(|| base.ops().sync_root());
        Ok(RangeView {
            base,
            window: Mutex::new(Window {
                base_index: index,
                len: count,
                base_version,
                version: 0,
            }),
            root,
        })
    }

    fn base(&self) -> &dyn ListOps<T> {
        self.base.ops()
    }

    fn lock(&self) -> Locked<'_> {
        let root = self.root.as_ref().map(SyncRoot::lock);
        Locked {
            window: self.window.lock(),
            _root: root,
        }
    }

    /// Locks the window after checking the base has not moved underneath it.
    fn window(&self) -> Result<Locked<'_>> {
        let window = self.lock();
        let live = self.base().version();
        if window.base_version != live {
            tracing::debug!(
                cached = window.base_version,
                live,
                "range view is stale"
            );
            return Err(ListError::StaleView);
        }
        Ok(window)
    }

    /// Records a write made through this view.
    fn modified(&self, window: &mut Window) {
        window.base_version = self.base().version();
        window.version += 1;
    }
}

impl<T: Clone> ListOps<T> for RangeView<T> {
    fn count(&self) -> Result<usize> {
        Ok(self.window()?.len)
    }

    fn capacity(&self) -> Result<usize> {
        let _window = self.window()?;
        self.base().capacity()
    }

    fn set_capacity(&self, capacity: usize) -> Result<()> {
        let window = self.window()?;
        if capacity < window.len {
            return Err(ListError::CapacityTooSmall {
                requested: capacity,
                len: window.len,
            });
        }
        Ok(())
    }

    fn trim_to_size(&self) -> Result<()> {
        let _window = self.window()?;
        Err(ListError::unsupported("trim_to_size", Restriction::RangeView))
    }

    /// The view's own counter. A stale view still answers here; staleness
    /// surfaces as `StaleView` on the next call that reads the window.
    fn version(&self) -> u64 {
        self.lock().version
    }

    fn is_fixed_size(&self) -> bool {
        self.base().is_fixed_size()
    }

    fn is_read_only(&self) -> bool {
        self.base().is_read_only()
    }

    fn is_synchronized(&self) -> bool {
        self.base().is_synchronized()
    }

    fn sync_root(&self) -> SyncRoot {
        self.base().sync_root()
    }

    fn get(&self, index: usize) -> Result<T> {
        let window = self.window()?;
        check_index(index, window.len)?;
        self.base().get(window.base_index + index)
    }

    fn set(&self, index: usize, value: T) -> Result<()> {
        let mut window = self.window()?;
        check_index(index, window.len)?;
        self.base().set(window.base_index + index, value)?;
        self.modified(&mut window);
        Ok(())
    }

    fn add(&self, value: T) -> Result<usize> {
        let mut window = self.window()?;
        let index = window.len;
        self.base().insert(window.base_index + index, value)?;
        window.len += 1;
        self.modified(&mut window);
        Ok(index)
    }

    fn insert(&self, index: usize, value: T) -> Result<()> {
        let mut window = self.window()?;
        if index > window.len {
            return Err(ListError::OutOfRange {
                index,
                len: window.len,
            });
        }
        self.base().insert(window.base_index + index, value)?;
        window.len += 1;
        self.modified(&mut window);
        Ok(())
    }

    fn insert_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        let mut window = self.window()?;
        if index > window.len {
            return Err(ListError::OutOfRange {
                index,
                len: window.len,
            });
        }
        let count = items.len();
        self.base().insert_range(window.base_index + index, items)?;
        if count > 0 {
            window.len += count;
            self.modified(&mut window);
        }
        Ok(())
    }

    fn add_range(&self, items: Vec<T>) -> Result<()> {
        let mut window = self.window()?;
        let count = items.len();
        self.base()
            .insert_range(window.base_index + window.len, items)?;
        if count > 0 {
            window.len += count;
            self.modified(&mut window);
        }
        Ok(())
    }

    fn set_range(&self, index: usize, items: Vec<T>) -> Result<()> {
        let mut window = self.window()?;
        check_range(index, items.len(), window.len)?;
        if items.is_empty() {
            return Ok(());
        }
        self.base().set_range(window.base_index + index, items)?;
        self.modified(&mut window);
        Ok(())
    }

    fn remove_at(&self, index: usize) -> Result<()> {
        let mut window = self.window()?;
        check_index(index, window.len)?;
        self.base().remove_at(window.base_index + index)?;
        window.len -= 1;
        self.modified(&mut window);
        Ok(())
    }

    fn remove_range(&self, index: usize, count: usize) -> Result<()> {
        let mut window = self.window()?;
        check_range(index, count, window.len)?;
        if count == 0 {
            return Ok(());
        }
        self.base().remove_range(window.base_index + index, count)?;
        window.len -= count;
        self.modified(&mut window);
        Ok(())
    }

    fn remove_first(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Result<bool> {
        let mut window = self.window()?;
        let found = self
            .base()
            .find(Span::new(window.base_index, window.len), predicate, false)?;
        let Some(index) = found else {
            return Ok(false);
        };
        self.base().remove_at(index)?;
        window.len -= 1;
        self.modified(&mut window);
        Ok(true)
    }

    fn clear(&self) -> Result<()> {
        let mut window = self.window()?;
        if window.len == 0 {
            return Ok(());
        }
        self.base().remove_range(window.base_index, window.len)?;
        window.len = 0;
        self.modified(&mut window);
        Ok(())
    }

    fn find(&self, span: Span, predicate: &mut dyn FnMut(&T) -> bool, from_end: bool) -> Result<Option<usize>> {
        let window = self.window()?;
        let (index, count) = span.resolve(window.len)?;
        let found = self
            .base()
            .find(Span::new(window.base_index + index, count), predicate, from_end)?;
        Ok(found.map(|at| at - window.base_index))
    }

    fn binary_search(&self, span: Span, probe: &mut dyn FnMut(&T) -> Ordering) -> Result<isize> {
        let window = self.window()?;
        let (index, count) = span.resolve(window.len)?;
        let found = self
            .base()
            .binary_search(Span::new(window.base_index + index, count), probe)?;
        let offset = window.base_index as isize;
        Ok(if found >= 0 {
            found - offset
        } else {
            !(!found - offset)
        })
    }

    fn sort(&self, span: Span, compare: &mut dyn FnMut(&T, &T) -> Ordering) -> Result<()> {
        let mut window = self.window()?;
        let (index, count) = span.resolve(window.len)?;
        self.base()
            .sort(Span::new(window.base_index + index, count), compare)?;
        self.modified(&mut window);
        Ok(())
    }

    fn reverse(&self, span: Span) -> Result<()> {
        let mut window = self.window()?;
        let (index, count) = span.resolve(window.len)?;
        self.base()
            .reverse(Span::new(window.base_index + index, count))?;
        self.modified(&mut window);
        Ok(())
    }

    fn to_vec(&self, span: Span) -> Result<Vec<T>> {
        let window = self.window()?;
        let (index, count) = span.resolve(window.len)?;
        self.base()
            .to_vec(Span::new(window.base_index + index, count))
    }

    fn copy_to(&self, index: usize, target: &mut [T], target_index: usize, count: usize) -> Result<()> {
        let window = self.window()?;
        check_range(index, count, window.len)?;
        self.base()
            .copy_to(window.base_index + index, target, target_index, count)
    }

    fn clone_list(&self) -> Result<List<T>> {
        Ok(List::from(self.to_vec(Span::All)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn digits() -> List<i32> {
        (0..10).collect()
    }

    #[test]
    fn test_binary_search_translates_complement() {
        let base = digits();
        let view = base.get_range(3, 4).unwrap(); // [3, 4, 5, 6]
        assert_eq!(view.binary_search(&5), Ok(2));
        assert_eq!(view.binary_search(&3), Ok(0));
        // 7 would go at local index 4
        assert_eq!(view.binary_search(&7), Ok(!4));
        assert_eq!(view.binary_search(&0), Ok(!0));
    }

    #[test]
    fn test_set_capacity_checks_window_only() {
        let base = digits();
        let view = base.get_range(2, 3).unwrap();
        assert_eq!(
            view.set_capacity(2),
            Err(ListError::CapacityTooSmall {
                requested: 2,
                len: 3
            })
        );
        let before = base.capacity().unwrap();
        view.set_capacity(100).unwrap();
        assert_eq!(base.capacity(), Ok(before));
        assert_eq!(
            view.trim_to_size(),
            Err(ListError::unsupported("trim_to_size", Restriction::RangeView))
        );
    }

    #[test]
    fn test_clear_and_remove_first_adjust_len() {
        let base = digits();
        let view = base.get_range(4, 3).unwrap(); // [4, 5, 6]
        assert_eq!(view.remove(&5), Ok(true));
        assert_eq!(view.remove(&9), Ok(false));
        assert_eq!(view.to_vec(), Ok(vec![4, 6]));
        view.clear().unwrap();
        assert_eq!(view.count(), Ok(0));
        assert_eq!(base.to_vec(), Ok(vec![0, 1, 2, 3, 7, 8, 9]));
    }

    #[test]
    fn test_find_reports_local_indices() {
        let base: List<i32> = List::from(vec![1, 2, 1, 2, 1, 2]);
        let view = base.get_range(1, 4).unwrap(); // [2, 1, 2, 1]
        assert_eq!(view.index_of(&1), Ok(Some(1)));
        assert_eq!(view.last_index_of(&2), Ok(Some(2)));
        assert_eq!(view.index_of_in(&2, 1, 3), Ok(Some(2)));
        assert_eq!(view.index_of(&3), Ok(None));
    }

    #[test]
    fn test_version_advances_with_writes() {
        let base = digits();
        let view = base.get_range(0, 5).unwrap();
        let before = view.version();
        view.set(0, 42).unwrap();
        view.reverse().unwrap();
        assert_eq!(view.version(), before + 2);
        assert_eq!(view.get(4), Ok(42));
    }
}
