//! Error types for list operations.
//!
//! Every fallible operation returns [`Result`], whose error is a [`ListError`].
//! Checks always run before any mutation, so a failed call leaves the list
//! exactly as it was.

use core::fmt;

use thiserror::Error;

pub type Result<T, E = ListError> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An index or `(index, count)` pair falls outside the list.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A count or length argument does not fit the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("capacity {requested} is smaller than the current length {len}")]
    CapacityTooSmall { requested: usize, len: usize },

    #[error("capacity {requested} exceeds the maximum list length")]
    CapacityOverflow { requested: usize },

    /// The list's policy forbids this operation.
    #[error("`{operation}` is not supported on a {restriction} list")]
    UnsupportedOperation {
        operation: &'static str,
        restriction: Restriction,
    },

    /// A range view's base list was modified without going through the view.
    #[error("the base list was modified outside of this range view")]
    StaleView,

    /// The list changed while an iterator was walking it.
    #[error("list was modified; enumeration operation may not execute")]
    ConcurrentModification,

    #[error("invalid iterator state: {0}")]
    InvalidState(&'static str),
}

/// Why a list refuses an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    FixedSize,
    ReadOnly,
    /// Range views have no allocation of their own.
    RangeView,
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Restriction::FixedSize => write!(f, "fixed-size"),
            Restriction::ReadOnly => write!(f, "read-only"),
            Restriction::RangeView => write!(f, "range view"),
        }
    }
}

impl ListError {
    pub(crate) fn unsupported(operation: &'static str, restriction: Restriction) -> Self {
        ListError::UnsupportedOperation {
            operation,
            restriction,
        }
    }
}

/// Checks that `index` addresses a live element.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(ListError::OutOfRange { index, len })
    }
}

/// Checks that `index..index + count` lies within `0..len`.
pub(crate) fn check_range(index: usize, count: usize, len: usize) -> Result<()> {
    if index > len {
        return Err(ListError::OutOfRange { index, len });
    }
    if count > len - index {
        return Err(ListError::OutOfRange {
            index: index.saturating_add(count),
            len,
        });
    }
    Ok(())
}

/// Checks that `target[target_index..]` can hold `count` elements.
pub(crate) fn check_target<T>(target: &[T], target_index: usize, count: usize) -> Result<()> {
    if target_index > target.len() || count > target.len() - target_index {
        return Err(ListError::InvalidArgument(
            "target slice is too short for the copied range",
        ));
    }
    Ok(())
}
