use crate::endpoints::{sort_by_left, sort_by_right, sorted_endpoints};
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::node::Node;
use log::{debug, trace};
use std::collections::VecDeque;
use std::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable interval tree over a fixed collection of closed intervals.
///
/// All the work happens in [`IntervalTree::new`]: the end-points are
/// extracted, the node skeleton is built from them, and every interval is
/// mapped to its owning node. Afterwards the tree only answers queries.
///
/// Intervals are stored by value. A collection holding the same interval
/// twice yields it twice from any query that matches it.
///
/// With the `serde` feature the tree is (de)serialized as its list of
/// intervals and rebuilt through [`IntervalTree::new`] on the way in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Vec<Interval>", from = "Vec<Interval>"))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl fmt::Display for IntervalTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root {
            Some(ref root) => write!(f, "{}", root),
            None => write!(f, "Empty tree"),
        }
    }
}

impl FromIterator<Interval> for IntervalTree {
    fn from_iter<I: IntoIterator<Item = Interval>>(intervals: I) -> Self {
        IntervalTree::new(intervals)
    }
}

impl From<Vec<Interval>> for IntervalTree {
    fn from(intervals: Vec<Interval>) -> Self {
        IntervalTree::new(intervals)
    }
}

impl From<IntervalTree> for Vec<Interval> {
    fn from(tree: IntervalTree) -> Self {
        tree.iter().copied().collect()
    }
}

impl TryFrom<Vec<(i32, i32)>> for IntervalTree {
    type Error = Error;

    fn try_from(pairs: Vec<(i32, i32)>) -> Result<Self> {
        IntervalTree::build(pairs)
    }
}

impl IntervalTree {
    /// Builds the tree from already-validated intervals.
    ///
    /// ```
    /// use static_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::new([Interval::new(10, 10).unwrap()]);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn new<I>(intervals: I) -> IntervalTree
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut left_sorted: Vec<Interval> = intervals.into_iter().collect();
        let mut right_sorted = left_sorted.clone();
        sort_by_left(&mut left_sorted);
        sort_by_right(&mut right_sorted);

        let endpoints = sorted_endpoints(&left_sorted, &right_sorted);
        let mut root = Self::build_tree_nodes(&endpoints);

        Self::map_intervals_to_tree(&mut root, &left_sorted, &right_sorted)
            .expect("end-points of every interval are leaves of the tree");

        let tree = IntervalTree {
            root,
            len: left_sorted.len(),
        };
        debug!(
            "Built interval tree: {} intervals, {} end-points, height {}",
            tree.len,
            endpoints.len(),
            tree.height()
        );

        tree
    }

    /// Validates every pair, then builds the tree. Nothing is built if any
    /// pair has its left end-point past its right one.
    ///
    /// ```
    /// use static_interval_tree::{Error, IntervalTree};
    ///
    /// assert!(IntervalTree::build([(1, 5), (3, 8)]).is_ok());
    /// assert_eq!(
    ///     IntervalTree::build([(1, 5), (8, 3)]),
    ///     Err(Error::InvalidInterval { left: 8, right: 3 })
    /// );
    /// ```
    pub fn build<I>(intervals: I) -> Result<IntervalTree>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let intervals = intervals
            .into_iter()
            .map(Interval::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(IntervalTree::new(intervals))
    }

    /// Pairs adjacent nodes level by level, starting from one leaf per
    /// end-point. A node left over at the end of a pass goes to the back of
    /// the queue and is paired during the next pass.
    pub(crate) fn build_tree_nodes(endpoints: &[i32]) -> Option<Box<Node>> {
        let mut queue: VecDeque<Box<Node>> = endpoints
            .iter()
            .map(|&endpoint| Box::new(Node::leaf(endpoint)))
            .collect();

        while queue.len() > 1 {
            let pending = queue.len();
            trace!("Pairing {} nodes", pending);

            for _ in 0..pending / 2 {
                let left = queue.pop_front()?;
                let right = queue.pop_front()?;
                queue.push_back(Box::new(Node::join(left, right)));
            }
            if pending % 2 == 1 {
                let odd = queue.pop_front()?;
                queue.push_back(odd);
            }
        }

        queue.pop_front()
    }

    /// Appends each interval to its owner's `left_intervals` (in
    /// `left_sorted` order) and `right_intervals` (in `right_sorted` order).
    pub(crate) fn map_intervals_to_tree(
        root: &mut Option<Box<Node>>,
        left_sorted: &[Interval],
        right_sorted: &[Interval],
    ) -> Result<()> {
        for interval in left_sorted {
            Self::owner(root, interval)?.left_intervals.push(*interval);
        }
        for interval in right_sorted {
            Self::owner(root, interval)?.right_intervals.push(*interval);
        }

        Ok(())
    }

    fn owner<'a>(root: &'a mut Option<Box<Node>>, interval: &Interval) -> Result<&'a mut Node> {
        let mut curr = root.as_deref_mut();

        while let Some(node) = curr {
            if interval.contains(node.split_value) {
                return Ok(node);
            }

            curr = if node.split_value > f64::from(interval.right()) {
                node.left.as_deref_mut()
            } else {
                node.right.as_deref_mut()
            };
        }

        Err(Error::Unmapped(*interval))
    }

    /// Returns every stored interval overlapping `q`, in no particular order.
    ///
    /// ```
    /// use static_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::build([(1, 5)]).unwrap();
    ///
    /// // Touching end-points overlap.
    /// let q = Interval::new(5, 9).unwrap();
    /// assert_eq!(tree.find_intersecting_intervals(&q), vec![Interval::new(1, 5).unwrap()]);
    /// ```
    pub fn find_intersecting_intervals(&self, q: &Interval) -> Vec<Interval> {
        let mut found = Vec::new();
        Self::find(self.root.as_deref(), q, &mut found);
        trace!("Query {} matched {} intervals", q, found.len());

        found
    }

    fn find(node: Option<&Node>, q: &Interval, found: &mut Vec<Interval>) {
        let node = match node {
            Some(node) => node,
            None => return,
        };
        let split = node.split_value;

        if q.contains(split) {
            // `right_intervals` holds the same intervals; emitting both would double-count.
            found.extend_from_slice(&node.left_intervals);
            Self::find(node.left.as_deref(), q, found);
            Self::find(node.right.as_deref(), q, found);
        } else if split < f64::from(q.left()) {
            found.extend(
                node.right_intervals
                    .iter()
                    .rev()
                    .take_while(|interval| interval.right() >= q.left()),
            );
            Self::find(node.right.as_deref(), q, found);
        } else {
            found.extend(
                node.left_intervals
                    .iter()
                    .take_while(|interval| interval.left() <= q.right()),
            );
            Self::find(node.left.as_deref(), q, found);
        }
    }

    /// Validating form of [`IntervalTree::find_intersecting_intervals`].
    ///
    /// ```
    /// use static_interval_tree::{Error, IntervalTree};
    ///
    /// let tree = IntervalTree::build([(1, 5), (3, 8), (20, 25)]).unwrap();
    /// assert_eq!(tree.query((30, 40)), Ok(vec![]));
    /// assert_eq!(tree.query((12, 4)), Err(Error::InvalidInterval { left: 12, right: 4 }));
    /// ```
    pub fn query<Q>(&self, q: Q) -> Result<Vec<Interval>>
    where
        Q: TryInto<Interval, Error = Error>,
    {
        let q = q.try_into()?;

        Ok(self.find_intersecting_intervals(&q))
    }

    /// Whether any stored interval contains `point`.
    pub fn contains_point(&self, point: i32) -> bool {
        !self
            .find_intersecting_intervals(&Interval::point(point))
            .is_empty()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Walks the stored intervals, node by node in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            intervals: (&[]).iter(),
        }
    }
}

impl<'a> IntoIterator for &'a IntervalTree {
    type Item = &'a Interval;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the intervals of an [`IntervalTree`], see [`IntervalTree::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    intervals: std::slice::Iter<'a, Interval>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Interval;

    fn next(&mut self) -> Option<&'a Interval> {
        loop {
            if let Some(interval) = self.intervals.next() {
                return Some(interval);
            }

            let node = self.stack.pop()?;
            if let Some(right) = node.right.as_deref() {
                self.stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push(left);
            }
            self.intervals = node.left_intervals.iter();
        }
    }
}
