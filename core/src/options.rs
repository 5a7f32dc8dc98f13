//! Growth configuration for array lists.

/// Largest number of elements a list will ever hold.
///
/// Matches the usual managed-array limit so capacity arithmetic stays well
/// inside `isize` on every platform.
pub const MAX_ARRAY_LENGTH: usize = 0x7FFF_FFC7;

/// Capacity a list jumps to on its first growth.
pub const DEFAULT_CAPACITY: usize = 4;

/// Tunables for a list's growth policy.
///
/// ```
/// use arraylist_core::ListOptions;
///
/// let options = ListOptions {
///     default_capacity: 16,
///     ..ListOptions::default()
/// };
/// assert_eq!(options.grow(0, 1), Some(16));
/// assert_eq!(options.grow(16, 17), Some(32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Capacity used when an empty allocation must grow, and when capacity is set to zero.
    pub default_capacity: usize,
    /// Upper bound on capacity. Growth is clamped to it.
    pub max_capacity: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            max_capacity: MAX_ARRAY_LENGTH,
        }
    }
}

impl ListOptions {
    /// Computes the capacity to grow to so that at least `min` elements fit.
    ///
    /// Doubles the current capacity (or starts from `default_capacity`), clamps the
    /// result to `max_capacity`, and never returns less than `min`. Returns `None`
    /// when `min` itself exceeds `max_capacity`.
    pub fn grow(&self, current: usize, min: usize) -> Option<usize> {
        if min > self.max_capacity {
            return None;
        }
        let doubled = if current == 0 {
            self.default_capacity
        } else {
            current.saturating_mul(2)
        };
        Some(doubled.min(self.max_capacity).max(min))
    }
}
