//! Fail-fast enumeration.
//!
//! A [`ListIter`] captures its list's version when created and compares it
//! before every step. Any write made to the list in between, through any
//! handle or view, makes the next step fail with
//! [`ListError::ConcurrentModification`].

use core::fmt;

use crate::error::{ListError, Result, check_range};
use crate::list::List;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    NotStarted,
    Positioned,
    Ended,
}

/// Cursor over a [`List`] or a bounded part of it.
///
/// Use [`advance`](Self::advance) and [`current`](Self::current) to step
/// explicitly, or drive it as an [`Iterator`] of `Result<T>`.
pub struct ListIter<T> {
    list: List<T>,
    version: u64,
    start: usize,
    /// Exclusive end for bounded iterators; `None` follows the live count.
    end: Option<usize>,
    cursor: usize,
    state: IterState,
    current: Option<T>,
    failed: bool,
}

impl<T: Clone> ListIter<T> {
    pub(crate) fn new(list: List<T>) -> Self {
        let version = list.version();
        ListIter {
            list,
            version,
            start: 0,
            end: None,
            cursor: 0,
            state: IterState::NotStarted,
            current: None,
            failed: false,
        }
    }

    pub(crate) fn bounded(list: List<T>, index: usize, count: usize) -> Result<Self> {
        check_range(index, count, list.count()?)?;
        let mut iter = Self::new(list);
        iter.start = index;
        iter.end = Some(index + count);
        iter.cursor = index;
        Ok(iter)
    }

    pub fn state(&self) -> IterState {
        self.state
    }

    fn check_version(&self) -> Result<()> {
        let live = self.list.version();
        if live != self.version {
            tracing::debug!(captured = self.version, live, "list modified during enumeration");
            return Err(ListError::ConcurrentModification);
        }
        Ok(())
    }

    /// Moves to the next element. Returns `false` once the end is reached.
    pub fn advance(&mut self) -> Result<bool> {
        self.check_version()?;
        if self.state == IterState::Ended {
            return Ok(false);
        }
        let next = match self.state {
            IterState::NotStarted => self.start,
            _ => self.cursor + 1,
        };
        let end = match self.end {
            Some(end) => end,
            None => self.list.count()?,
        };
        if next >= end {
            self.state = IterState::Ended;
            self.current = None;
            self.cursor = end;
            return Ok(false);
        }
        self.current = Some(self.list.get(next)?);
        self.cursor = next;
        self.state = IterState::Positioned;
        Ok(true)
    }

    /// The element the last successful [`advance`](Self::advance) landed on.
    pub fn current(&self) -> Result<T> {
        match (&self.state, &self.current) {
            (IterState::Positioned, Some(value)) => Ok(value.clone()),
            (IterState::Ended, _) => Err(ListError::InvalidState("enumeration already finished")),
            _ => Err(ListError::InvalidState("enumeration not started")),
        }
    }

    /// Rewinds to before the first element.
    ///
    /// The captured version is kept, so a reset iterator over a modified list
    /// still fails.
    pub fn reset(&mut self) -> Result<()> {
        self.check_version()?;
        self.state = IterState::NotStarted;
        self.cursor = self.start;
        self.current = None;
        self.failed = false;
        Ok(())
    }
}

impl<T: Clone> Iterator for ListIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.advance() {
            Ok(true) => self.current().map(Some).transpose(),
            Ok(false) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for ListIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIter")
            .field("list", &self.list)
            .field("version", &self.version)
            .field("cursor", &self.cursor)
            .field("state", &self.state)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
#[path = "iter_test.rs"]
mod iter_test;
