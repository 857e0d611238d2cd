//! Traversal positions and iterators.
//!
//! A [`Position`] names a node (or the past-the-end position) together with a
//! traversal order and wing fixed in its type. Positions hold no borrow, so
//! they survive mutation of the tree; they are what
//! [`Tree::insert_at`](crate::Tree::insert_at) and
//! [`Tree::erase`](crate::Tree::erase) take and return. An [`Iter`] walks a
//! range of positions while borrowing the tree.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::Tree;
use crate::raw::{Handle, RawTree};
use crate::side::{InOrder, LeftWing, PreOrder, RightWing, Traversal, Wing};

/// A node position in the `O` traversal favouring wing `W`.
///
/// Two positions are equal when they name the same node. Using a position
/// whose node has since been erased is a logic error: lookups through it
/// panic, or silently name whichever node later reused its slot.
///
/// # Examples
///
/// ```
/// use wing_tree::Tree;
///
/// let mut tree = Tree::with_predicates(|_: &i32, _: &i32| false, |a: &i32, b: &i32| a < b);
/// tree.extend([2, 1, 3]);
///
/// let mut position = tree.begin();
/// assert_eq!(tree.get(position), Some(&1));
/// position.increment(&tree);
/// assert_eq!(tree.get(position), Some(&2));
/// position.increment(&tree);
/// position.increment(&tree);
/// assert_eq!(position, tree.end());
/// ```
pub struct Position<O = InOrder, W = LeftWing> {
    node: Option<Handle>,
    _marker: PhantomData<(O, W)>,
}

/// A position in the pre-order, left-wing traversal.
pub type PreLeft = Position<PreOrder, LeftWing>;
/// A position in the pre-order, right-wing traversal.
pub type PreRight = Position<PreOrder, RightWing>;
/// A position in the in-order, left-wing (ascending) traversal.
pub type InLeft = Position<InOrder, LeftWing>;
/// A position in the in-order, right-wing (descending) traversal.
pub type InRight = Position<InOrder, RightWing>;

impl<O, W> Position<O, W> {
    #[inline]
    pub(crate) const fn from_handle(node: Option<Handle>) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) const fn handle(self) -> Option<Handle> {
        self.node
    }

    /// The past-the-end position.
    #[must_use]
    pub const fn end() -> Self {
        Self::from_handle(None)
    }

    /// Returns true if this is the past-the-end position.
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.node.is_none()
    }

    /// Reinterprets this position in another traversal.
    ///
    /// Only the node is carried over; whether it is a sensible place to start
    /// the other traversal is up to the caller.
    #[must_use]
    pub const fn cast<O2, W2>(self) -> Position<O2, W2> {
        Position::from_handle(self.node)
    }
}

impl<O: Traversal, W: Wing> Position<O, W> {
    /// The first position of the traversal over `tree`: the root for
    /// pre-order, the `W`-most node for in-order.
    #[must_use]
    pub fn first<T, H, K>(tree: &Tree<T, H, K>) -> Self {
        Self::from_handle(tree.raw().first(O::ORDER, W::SIDE))
    }

    /// Advances to the next node of the traversal. The end position stays put.
    ///
    /// # Complexity
    ///
    /// O(height) worst case, amortised O(1) over a full traversal.
    pub fn increment<T, H, K>(&mut self, tree: &Tree<T, H, K>) {
        self.node = self.successor_in(tree.raw());
    }

    pub(crate) fn successor_in<T>(self, raw: &RawTree<T>) -> Option<Handle> {
        self.node.and_then(|handle| raw.next(handle, O::ORDER, W::SIDE))
    }
}

impl<O, W> Clone for Position<O, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, W> Copy for Position<O, W> {}

impl<O, W> PartialEq for Position<O, W> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<O, W> Eq for Position<O, W> {}

impl<O, W> Hash for Position<O, W> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.node.hash(state);
    }
}

impl<O, W> Default for Position<O, W> {
    fn default() -> Self {
        Self::end()
    }
}

impl<O, W> fmt::Debug for Position<O, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(handle) => f.debug_tuple("Position").field(&handle.to_index()).finish(),
            None => f.write_str("Position(end)"),
        }
    }
}

/// An iterator over the values of a range of positions, in the `O`
/// traversal favouring wing `W`.
///
/// This `struct` is created by [`Tree::iter`], [`Tree::traverse`] and
/// [`Tree::range`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use wing_tree::{InOrder, RightWing, Tree};
///
/// let mut tree = Tree::with_predicates(|_: &i32, _: &i32| false, |a: &i32, b: &i32| a < b);
/// tree.extend([2, 1, 3]);
///
/// let descending: Vec<_> = tree.traverse::<InOrder, RightWing>().copied().collect();
/// assert_eq!(descending, [3, 2, 1]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T, O = InOrder, W = LeftWing> {
    raw: &'a RawTree<T>,
    front: Position<O, W>,
    stop: Position<O, W>,
}

impl<'a, T, O, W> Iter<'a, T, O, W> {
    pub(crate) const fn new(raw: &'a RawTree<T>, front: Position<O, W>, stop: Position<O, W>) -> Self {
        Self { raw, front, stop }
    }

    /// The position of the value `next` will yield.
    #[must_use]
    pub const fn position(&self) -> Position<O, W> {
        self.front
    }
}

impl<'a, T, O: Traversal, W: Wing> Iterator for Iter<'a, T, O, W> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.stop {
            return None;
        }
        let handle = self.front.handle()?;
        self.front = Position::from_handle(self.front.successor_in(self.raw));
        Some(self.raw.value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front == self.stop || self.front.is_end() {
            (0, Some(0))
        } else {
            (1, Some(self.raw.len()))
        }
    }
}

impl<T, O: Traversal, W: Wing> FusedIterator for Iter<'_, T, O, W> {}

impl<T, O, W> Clone for Iter<'_, T, O, W> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            front: self.front,
            stop: self.stop,
        }
    }
}

impl<T: fmt::Debug, O: Traversal, W: Wing> fmt::Debug for Iter<'_, T, O, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
