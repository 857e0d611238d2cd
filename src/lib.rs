//! A binary tree container kept in treap order by caller-supplied predicates.
//!
//! This crate provides [`Tree`], a binary tree whose shape is decided by two
//! strict weak orders over its values:
//!
//! - `is_tall(a, b)` - `a` sits strictly closer to the root than `b` (the heap order)
//! - `is_left(a, b)` - `a` comes strictly before `b` in order (the key order)
//!
//! and two independent ways of looking at it:
//!
//! - [`Accessor`] - a cursor that tracks its depth and moves up, down and to
//!   lowest common ancestors
//! - [`Position`] / [`Iter`] - pre-order and in-order traversals, each
//!   available favouring either the left or the right *wing*
//!
//! # Example
//!
//! ```
//! use wing_tree::{InOrder, PreOrder, RightWing, Side, Tree};
//!
//! let mut tree = Tree::builder()
//!     .is_left(|a: &i32, b: &i32| a < b)
//!     .build();
//! tree.extend([5, 3, 8, 1, 4]);
//!
//! // In-order, left wing: ascending.
//! assert!(tree.iter().copied().eq([1, 3, 4, 5, 8]));
//! // In-order, right wing: descending.
//! assert!(tree.traverse::<InOrder, RightWing>().copied().eq([8, 5, 4, 3, 1]));
//! // Pre-order, right wing: node, right subtree, left subtree.
//! assert!(tree.traverse::<PreOrder, RightWing>().copied().eq([5, 8, 3, 4, 1]));
//!
//! let mut cursor = tree.root_accessor().unwrap();
//! assert!(cursor.down(Side::Left));
//! assert_eq!((cursor.get(), cursor.depth()), (Some(&3), Some(1)));
//!
//! // Erase a single value: [position, successor).
//! let one = tree.begin();
//! let mut three = one;
//! three.increment(&tree);
//! tree.erase(one, three);
//! assert!(tree.iter().copied().eq([3, 4, 5, 8]));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Arena storage** - Nodes live in a slot arena and link to each other by handle
//! - **Zero-cost wings** - Traversal order and wing are type parameters
//!
//! # Implementation
//!
//! Insertion descends by `is_left` until the new value is taller than the
//! node in its way, then splits that node's subtree around it. Removal
//! replaces a node with the merge of its two subtrees, promoting the taller
//! root at each step.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod accessor;
mod error;
mod iter;
mod predicate;
mod raw;
mod side;
mod tree;

pub use accessor::Accessor;
pub use error::AccessorError;
pub use iter::{InLeft, InRight, Iter, Position, PreLeft, PreRight};
pub use predicate::{Indifferent, Predicate};
pub use side::{InOrder, LeftWing, Order, PreOrder, RightWing, Side, Traversal, Wing};
pub use tree::{Tree, TreeBuilder};
