use crate::interval::Interval;
use thiserror::Error;

/// Errors reported while building or querying an [`IntervalTree`](crate::interval_tree::IntervalTree).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An interval whose left end-point lies past its right end-point.
    #[error("invalid interval: left end-point {left} is greater than right end-point {right}")]
    InvalidInterval { left: i32, right: i32 },

    /// No node on the search path had a split value inside this interval.
    /// Only reachable when mapping against an end-point set that does not
    /// contain the interval's end-points.
    #[error("interval {0} does not contain the split value of any node on its search path")]
    Unmapped(Interval),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
