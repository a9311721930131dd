//! Duration statistics used by the final report.

use std::cmp::Ordering;

use crate::outcome::HasDuration;

/// Sum `value` over all items.
pub fn sum<T>(items: &[T], value: impl Fn(&T) -> u64) -> u64 {
    items.iter().map(value).sum()
}

/// Median of an already sorted slice.
///
/// Only the two central positions are read, so the sort direction does not matter.
/// An empty slice has a median of `0`.
pub fn median<T>(sorted: &[T], value: impl Fn(&T) -> u64) -> f64 {
    let len = sorted.len();
    if len == 0 {
        return 0.0;
    }

    let midpoint = len / 2;
    match len % 2 {
        1 => value(&sorted[midpoint]) as f64,
        _ => (value(&sorted[midpoint - 1]) as f64 + value(&sorted[midpoint]) as f64) / 2.0,
    }
}

/// Average of `total` over `count` items.
///
/// A count of zero yields a non-finite value which is reported as is.
pub fn average(total: u64, count: usize) -> f64 {
    total as f64 / count as f64
}

/// Orders slowest first.
pub fn compare_durations<T: HasDuration>(a: &T, b: &T) -> Ordering {
    b.duration_ms().cmp(&a.duration_ms())
}

/// Accessor for [`sum`] and [`median`].
pub fn duration_of<T: HasDuration>(item: &T) -> u64 {
    item.duration_ms()
}
