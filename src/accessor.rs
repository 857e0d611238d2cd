//! Depth-tracking cursors.
//!
//! An [`Accessor`] is a single cursor that can visit every node of a tree by
//! moving up, down and to common ancestors. Unlike an iterator it has no
//! notion of "next"; unlike a [`Position`] it knows how deep it is.
//!
//! ```
//! use wing_tree::{Side, Tree};
//!
//! let mut tree = Tree::with_predicates(|_: &i32, _: &i32| false, |a: &i32, b: &i32| a < b);
//! tree.extend([20, 10, 30]);
//!
//! let mut a = tree.root_accessor().unwrap();
//! assert!(a.down(Side::Left));
//! assert_eq!((a.get(), a.depth()), (Some(&10), Some(1)));
//! assert!(!a.down(Side::Left));
//! a.up();
//! a.up();
//! assert!(a.is_end());
//! ```

use core::fmt;
use core::ptr;

use log::debug;

use crate::error::AccessorError;
use crate::iter::Position;
use crate::raw::{Handle, RawTree};
use crate::side::{Side, Wing};
use crate::Tree;

/// A cursor bound to a tree that tracks its depth.
///
/// The depth is `Some(0)` at the root and grows by one per level. `None` is
/// the past-the-end sentinel: the accessor still refers to the root so that
/// [`down`](Accessor::down) can bring it back into the tree.
///
/// An accessor borrows its tree, so the tree cannot be reshaped while it is
/// alive and the tracked depth cannot go stale.
pub struct Accessor<'a, T> {
    raw: &'a RawTree<T>,
    node: Handle,
    depth: Option<usize>,
}

impl<'a, T> Accessor<'a, T> {
    pub(crate) const fn new(raw: &'a RawTree<T>, node: Handle, depth: Option<usize>) -> Self {
        Self { raw, node, depth }
    }

    /// Returns the referenced value, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.depth.map(|_| self.raw.value(self.node))
    }

    /// Returns the depth, or `None` at the end.
    #[must_use]
    pub const fn depth(&self) -> Option<usize> {
        self.depth
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self.depth, Some(0))
    }

    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.depth.is_none()
    }

    /// Moves to the parent. From the root this moves to the end; at the end
    /// it does nothing.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn up(&mut self) {
        let Some(depth) = self.depth else {
            return;
        };
        match (depth.checked_sub(1), self.raw.parent(self.node)) {
            (Some(depth), Some(parent)) => {
                self.node = parent;
                self.depth = Some(depth);
            }
            _ => self.depth = None,
        }
    }

    /// Moves to the root. From the end this also lands on the root.
    ///
    /// # Complexity
    ///
    /// O(height): O(log n) for a balanced tree, O(n) for a degenerate one.
    pub fn root(&mut self) {
        while let Some(parent) = self.raw.parent(self.node) {
            self.node = parent;
        }
        self.depth = Some(0);
    }

    /// Moves into the `side` child and returns true if there is one; otherwise
    /// returns false and stays put.
    ///
    /// From the end this moves to the root and always returns true, so an end
    /// accessor can restart a walk.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn down(&mut self, side: Side) -> bool {
        let Some(depth) = self.depth else {
            self.node = self.raw.root().unwrap_or(self.node);
            self.depth = Some(0);
            return true;
        };
        match self.raw.child(self.node, side) {
            Some(child) => {
                self.node = child;
                self.depth = Some(depth + 1);
                true
            }
            None => false,
        }
    }

    /// [`down`](Accessor::down) with the side chosen at compile time.
    pub fn down_wing<W: Wing>(&mut self) -> bool {
        self.down(W::SIDE)
    }

    /// Returns the lowest common ancestor of `self` and `other`.
    ///
    /// The deeper accessor climbs until both are level, then both climb in
    /// lock-step until they meet. If either is at the end, so is the result.
    /// The result is unspecified if the two are bound to different trees.
    #[must_use]
    pub fn common_ancestor(&self, other: &Self) -> Self {
        debug_assert!(ptr::eq(self.raw, other.raw), "`Accessor::common_ancestor()` - accessors from different trees!");
        let (Some(mut ours), Some(mut theirs)) = (self.depth, other.depth) else {
            return if self.is_end() { *self } else { *other };
        };

        let (mut a, mut b) = (*self, *other);
        while ours > theirs {
            a.up();
            ours -= 1;
        }
        while theirs > ours {
            b.up();
            theirs -= 1;
        }
        while a.node != b.node && !a.is_end() {
            a.up();
            b.up();
        }
        a
    }

    /// The traversal position of the referenced node; the end position at
    /// the end.
    #[must_use]
    pub fn position<O, W>(&self) -> Position<O, W> {
        Position::from_handle(self.depth.map(|_| self.node))
    }
}

impl<T> Clone for Accessor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Accessor<'_, T> {}

impl<T> PartialEq for Accessor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.raw, other.raw) && self.node == other.node && self.depth == other.depth
    }
}

impl<T> Eq for Accessor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Accessor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").field("value", &self.get()).field("depth", &self.depth).finish()
    }
}

impl<T, H, K> Tree<T, H, K> {
    /// Binds an accessor to the node at `position`, at `depth`.
    ///
    /// `depth` must be the number of parent links between the node and the
    /// root, or `None` for the past-the-end sentinel (any position will do;
    /// the accessor is bound to the root).
    ///
    /// # Errors
    ///
    /// Returns an [`AccessorError`] if the tree is empty, if a depth is given
    /// for the end position, or if `depth` is not the node's actual depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::{AccessorError, Tree};
    ///
    /// let mut tree = Tree::with_predicates(|_: &i32, _: &i32| false, |a: &i32, b: &i32| a < b);
    /// tree.extend([2, 1, 3]);
    ///
    /// let one = tree.begin();
    /// assert_eq!(tree.accessor(one, Some(1)).unwrap().get(), Some(&1));
    /// assert_eq!(
    ///     tree.accessor(one, Some(0)),
    ///     Err(AccessorError::DepthMismatch { requested: 0, actual: 1 })
    /// );
    /// assert!(tree.accessor(one, None).unwrap().is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn accessor<O, W>(&self, position: Position<O, W>, depth: Option<usize>) -> Result<Accessor<'_, T>, AccessorError> {
        let result = self.checked_accessor(position.handle(), depth);
        if let Err(error) = &result {
            debug!("accessor: rejected construction: {error}");
        }
        result
    }

    fn checked_accessor(&self, node: Option<Handle>, depth: Option<usize>) -> Result<Accessor<'_, T>, AccessorError> {
        let root = self.raw().root().ok_or(AccessorError::EmptyTree)?;
        match (node, depth) {
            (_, None) => Ok(Accessor::new(self.raw(), root, None)),
            (None, Some(requested)) => Err(AccessorError::EndPosition { requested }),
            (Some(node), Some(requested)) => {
                let actual = self.raw().depth(node);
                if actual == requested {
                    Ok(Accessor::new(self.raw(), node, depth))
                } else {
                    Err(AccessorError::DepthMismatch { requested, actual })
                }
            }
        }
    }

    /// Binds an accessor to the node at `position`, computing its depth. The
    /// end position gives the end accessor. Returns `None` for an empty tree.
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn accessor_at<O, W>(&self, position: Position<O, W>) -> Option<Accessor<'_, T>> {
        let root = self.raw().root()?;
        Some(match position.handle() {
            Some(node) => Accessor::new(self.raw(), node, Some(self.raw().depth(node))),
            None => Accessor::new(self.raw(), root, None),
        })
    }

    /// An accessor at the root, or `None` for an empty tree.
    #[must_use]
    pub fn root_accessor(&self) -> Option<Accessor<'_, T>> {
        self.raw().root().map(|root| Accessor::new(self.raw(), root, Some(0)))
    }

    /// The past-the-end accessor, or `None` for an empty tree.
    #[must_use]
    pub fn end_accessor(&self) -> Option<Accessor<'_, T>> {
        self.raw().root().map(|root| Accessor::new(self.raw(), root, None))
    }
}
