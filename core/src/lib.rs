#![deny(unsafe_code)]

//! Array-backed lists with shared views and fail-fast iteration.
//!
//! The pieces:
//!
//! - [`ArrayList`]: the owned, versioned backing store.
//! - [`List`]: a shared handle to a store or to a view over one (fixed-size,
//!   read-only, synchronized, range, or an adapter over any [`Collection`]).
//! - [`ListIter`]: an iterator that fails once its list changes underneath it.

pub mod collection;
pub mod error;
pub mod iter;
pub mod list;
pub mod options;
pub mod store;
pub mod sync_root;

pub use collection::Collection;
pub use error::{ListError, Restriction, Result};
pub use iter::{IterState, ListIter};
pub use list::{List, ListKind};
pub use options::{DEFAULT_CAPACITY, ListOptions, MAX_ARRAY_LENGTH};
pub use store::ArrayList;
pub use sync_root::{SyncGuard, SyncRoot};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_growth() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
