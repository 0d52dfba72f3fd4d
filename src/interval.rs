use crate::error::{Error, Result};
use std::cmp::{max, min};
use std::fmt;
use std::ops::RangeInclusive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed integer interval `[left, right]`, with `left <= right`.
///
/// The invariant is checked on construction, so every `Interval` in
/// circulation is well-formed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    left: i32,
    right: i32,
}

impl Interval {
    /// Creates the interval `[left, right]`.
    ///
    /// ```
    /// use static_interval_tree::{Error, Interval};
    ///
    /// assert!(Interval::new(3, 8).is_ok());
    /// assert!(Interval::new(4, 4).is_ok());
    /// assert_eq!(
    ///     Interval::new(8, 3),
    ///     Err(Error::InvalidInterval { left: 8, right: 3 })
    /// );
    /// ```
    pub fn new(left: i32, right: i32) -> Result<Interval> {
        if left > right {
            return Err(Error::InvalidInterval { left, right });
        }

        Ok(Interval { left, right })
    }

    /// The degenerate interval `[point, point]`.
    pub fn point(point: i32) -> Interval {
        Interval {
            left: point,
            right: point,
        }
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    /// Whether `value` lies within `[left, right]`. Split values are
    /// half-integers at worst, hence the `f64`.
    pub fn contains(&self, value: f64) -> bool {
        f64::from(self.left) <= value && value <= f64::from(self.right)
    }

    pub fn contains_point(&self, point: i32) -> bool {
        self.left <= point && point <= self.right
    }

    /// Closed-interval overlap: touching end-points count.
    ///
    /// ```
    /// use static_interval_tree::Interval;
    ///
    /// let a = Interval::new(1, 5).unwrap();
    /// assert!(a.intersects(&Interval::new(5, 9).unwrap()));
    /// assert!(!a.intersects(&Interval::new(6, 9).unwrap()));
    /// ```
    pub fn intersects(&self, other: &Interval) -> bool {
        max(self.left, other.left) <= min(self.right, other.right)
    }
}

impl TryFrom<(i32, i32)> for Interval {
    type Error = Error;

    fn try_from((left, right): (i32, i32)) -> Result<Interval> {
        Interval::new(left, right)
    }
}

impl TryFrom<RangeInclusive<i32>> for Interval {
    type Error = Error;

    fn try_from(range: RangeInclusive<i32>) -> Result<Interval> {
        Interval::new(*range.start(), *range.end())
    }
}

impl From<Interval> for (i32, i32) {
    fn from(interval: Interval) -> (i32, i32) {
        (interval.left, interval.right)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}
