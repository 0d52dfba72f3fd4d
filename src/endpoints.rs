//! Sorting helpers and end-point extraction for tree construction.

use crate::interval::Interval;
use itertools::{EitherOrBoth, Itertools};

/// Stable sort on left end-points.
pub fn sort_by_left(intervals: &mut [Interval]) {
    intervals.sort_by_key(Interval::left);
}

/// Stable sort on right end-points.
pub fn sort_by_right(intervals: &mut [Interval]) {
    intervals.sort_by_key(Interval::right);
}

/// Collects every end-point of the intervals into one strictly ascending
/// list without duplicates.
///
/// `left_sorted` must be ascending by left end-point and `right_sorted`
/// ascending by right end-point. Both are expected to hold the same
/// intervals.
///
/// ```
/// use static_interval_tree::endpoints::{sort_by_left, sort_by_right, sorted_endpoints};
/// use static_interval_tree::Interval;
///
/// let mut left_sorted = vec![
///     Interval::new(3, 8).unwrap(),
///     Interval::new(1, 5).unwrap(),
///     Interval::new(5, 8).unwrap(),
/// ];
/// let mut right_sorted = left_sorted.clone();
/// sort_by_left(&mut left_sorted);
/// sort_by_right(&mut right_sorted);
///
/// assert_eq!(sorted_endpoints(&left_sorted, &right_sorted), vec![1, 3, 5, 8]);
/// ```
pub fn sorted_endpoints(left_sorted: &[Interval], right_sorted: &[Interval]) -> Vec<i32> {
    let lefts = left_sorted.iter().map(Interval::left).dedup();
    let rights = right_sorted.iter().map(Interval::right).dedup();

    lefts
        .merge_join_by(rights, |l, r| l.cmp(r))
        .map(|point| match point {
            EitherOrBoth::Left(x) | EitherOrBoth::Right(x) | EitherOrBoth::Both(x, _) => x,
        })
        .collect()
}
