//! Implementation of a static interval tree ([`interval_tree::IntervalTree`]) over closed
//! integer intervals. The tree is built once, bottom-up, from the sorted and
//! deduplicated end-points of a fixed set of intervals: leaves are end-points,
//! and every internal node splits its subtree at the midpoint between its two
//! children's ranges. Each interval is stored at the first node on its search
//! path whose split value it contains, in two orders (by left end-point and by
//! right end-point), so overlap queries can prune whole subtrees and stop
//! scanning a node's intervals at the first miss.
//!
//! The tree has no mutating API once built. It owns only plain data, so a
//! built tree can be shared across threads and queried concurrently.
//!
//! ```
//! use static_interval_tree::IntervalTree;
//!
//! let tree = IntervalTree::build([(1, 5), (3, 8), (20, 25)]).unwrap();
//! let mut overlapping = tree.query((4, 12)).unwrap();
//! overlapping.sort_by_key(|interval| interval.left());
//!
//! let pairs: Vec<(i32, i32)> = overlapping.into_iter().map(Into::into).collect();
//! assert_eq!(pairs, vec![(1, 5), (3, 8)]);
//! ```

pub mod endpoints;
mod error;
mod interval;
/// A static interval tree built from sorted end-points.
pub mod interval_tree;
mod node;

pub use error::{Error, Result};
pub use interval::Interval;
pub use interval_tree::IntervalTree;
pub use node::Node;
