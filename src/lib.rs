//! arraylist - a growable array list with live, shareable views
//!
//! # Overview
//!
//! [`List`] is a cheap handle to an array-backed list. Handles can be cloned
//! freely and sent across threads; every clone sees the same elements. On top
//! of a list you can layer views that share its storage:
//!
//! - [`List::fixed_size`]: elements can be replaced but not added or removed
//! - [`List::read_only`]: no writes at all
//! - [`List::synchronized`]: every call holds the list's [`SyncRoot`]
//! - [`List::get_range`]: a live window that forwards writes to its base
//! - [`List::adapter`]: any [`Collection`] presented as a list
//!
//! # Quick Start
//!
//! ```
//! use arraylist::{List, ListError};
//!
//! let list = List::new();
//! for word in ["pear", "apple", "fig"] {
//!     list.add(word).unwrap();
//! }
//! list.sort().unwrap();
//! assert_eq!(list.to_vec().unwrap(), vec!["apple", "fig", "pear"]);
//! assert_eq!(list.binary_search(&"fig"), Ok(1));
//! // absent values report the complement of where they would go
//! assert_eq!(list.binary_search(&"kiwi"), Ok(!2));
//!
//! let view = list.read_only();
//! assert!(matches!(
//!     view.add("plum"),
//!     Err(ListError::UnsupportedOperation { .. })
//! ));
//! ```
//!
//! # Fail-fast iteration
//!
//! Iterators capture the list's version and stop with
//! [`ListError::ConcurrentModification`] once it changes:
//!
//! ```
//! use arraylist::{List, ListError};
//!
//! let list: List<i32> = (1..=3).collect();
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(Ok(1)));
//! list.add(4).unwrap();
//! assert_eq!(iter.next(), Some(Err(ListError::ConcurrentModification)));
//! assert_eq!(iter.next(), None);
//! ```

pub use arraylist_core::*;
