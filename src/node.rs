use crate::interval::Interval;
use std::fmt;
#[cfg(feature = "serde")]
use serde::Serialize;

/// A node of an [`IntervalTree`](crate::interval_tree::IntervalTree).
///
/// Its subtree covers the end-points in `[min_split_value, max_split_value]`,
/// and it stores every interval whose search path first meets a split value
/// inside the interval. Those intervals are kept twice: once ascending by
/// left end-point and once ascending by right end-point.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) split_value: f64,
    pub(crate) min_split_value: f64,
    pub(crate) max_split_value: f64,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
    pub(crate) left_intervals: Vec<Interval>,
    pub(crate) right_intervals: Vec<Interval>,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let intervals = self
            .left_intervals
            .iter()
            .map(|interval| interval.to_string())
            .collect::<Vec<_>>()
            .join(",");

        match (&self.left, &self.right) {
            (Some(left), Some(right)) => write!(
                f,
                " {{ {} [{}] left:{}right:{}}} ",
                self.split_value, intervals, left, right
            ),
            (Some(left), None) => write!(
                f,
                " {{ {} [{}] left:{}}} ",
                self.split_value, intervals, left
            ),
            (None, Some(right)) => write!(
                f,
                " {{ {} [{}] right:{}}} ",
                self.split_value, intervals, right
            ),
            (None, None) => write!(f, " {{ {} [{}] }} ", self.split_value, intervals),
        }
    }
}

impl Node {
    pub(crate) fn leaf(endpoint: i32) -> Node {
        let value = f64::from(endpoint);

        Node {
            split_value: value,
            min_split_value: value,
            max_split_value: value,
            left: None,
            right: None,
            left_intervals: Vec::new(),
            right_intervals: Vec::new(),
        }
    }

    /// Joins two adjacent subtrees. `left` must cover smaller end-points
    /// than `right`.
    pub(crate) fn join(left: Box<Node>, right: Box<Node>) -> Node {
        debug_assert!(left.max_split_value < right.min_split_value);

        Node {
            split_value: (left.max_split_value + right.min_split_value) / 2.0,
            min_split_value: left.min_split_value,
            max_split_value: right.max_split_value,
            left: Some(left),
            right: Some(right),
            left_intervals: Vec::new(),
            right_intervals: Vec::new(),
        }
    }

    pub fn split_value(&self) -> f64 {
        self.split_value
    }

    pub fn min_split_value(&self) -> f64 {
        self.min_split_value
    }

    pub fn max_split_value(&self) -> f64 {
        self.max_split_value
    }

    pub fn left_child(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right_child(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Intervals owned by this node, ascending by left end-point.
    pub fn left_intervals(&self) -> &[Interval] {
        &self.left_intervals
    }

    /// The same intervals as [`Node::left_intervals`], ascending by right
    /// end-point.
    pub fn right_intervals(&self) -> &[Interval] {
        &self.right_intervals
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |node| node.height());
        let right = self.right.as_ref().map_or(0, |node| node.height());

        1 + left.max(right)
    }
}
