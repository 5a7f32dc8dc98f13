//! The lock handle shared by synchronized views of one store.

use std::fmt;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

/// A shared, reentrant lock.
///
/// Every synchronized view holds its store's root for the duration of each
/// call. The root is reentrant, so a caller that needs several calls to be
/// atomic (check-then-act) can hold it across them:
///
/// ```
/// use arraylist_core::List;
///
/// let list = List::<i32>::new().synchronized();
/// let root = list.sync_root();
/// {
///     let _guard = root.lock();
///     if !list.contains(&1).unwrap() {
///         list.add(1).unwrap();
///     }
/// }
/// assert_eq!(list.to_vec().unwrap(), vec![1]);
/// ```
#[derive(Clone, Default)]
pub struct SyncRoot {
    lock: Arc<ReentrantMutex<()>>,
}

pub type SyncGuard<'a> = ReentrantMutexGuard<'a, ()>;

impl SyncRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> SyncGuard<'_> {
        self.lock.lock()
    }

    /// Returns `true` if both handles guard the same lock.
    pub fn same_as(&self, other: &SyncRoot) -> bool {
        Arc::ptr_eq(&self.lock, &other.lock)
    }
}

impl fmt::Debug for SyncRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncRoot")
            .field("ptr", &Arc::as_ptr(&self.lock))
            .field("locked", &self.lock.is_locked())
            .finish()
    }
}
