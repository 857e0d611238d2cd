//! Directions and traversal orders.
//!
//! Every traversal in this crate is written once and parameterised by a
//! *wing*: the side it favours. The left-wing in-order walk is the usual
//! ascending walk; the right-wing in-order walk is its mirror image. Both the
//! runtime values ([`Side`], [`Order`]) and zero-sized markers ([`LeftWing`],
//! [`RightWing`], [`PreOrder`], [`InOrder`]) are provided, the latter for use as
//! type parameters so the choice is resolved at compile time.

use core::fmt::Debug;
use core::hash::Hash;

/// One of the two child slots of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the opposite side.
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::Side;
    ///
    /// assert_eq!(Side::Left.other(), Side::Right);
    /// assert_eq!(Side::Right.other(), Side::Left);
    /// ```
    #[must_use]
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// The order in which a traversal visits a node relative to its children.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    /// Node, then wing-side subtree, then opposite subtree.
    Pre,
    /// Wing-side subtree, then node, then opposite subtree.
    In,
}

/// Compile-time choice of [`Side`].
pub trait Wing: Copy + Debug + Default + Eq + Hash + 'static {
    const SIDE: Side;
}

/// Compile-time choice of [`Order`].
pub trait Traversal: Copy + Debug + Default + Eq + Hash + 'static {
    const ORDER: Order;
}

/// Marker for traversals that favour the left child.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct LeftWing;

/// Marker for traversals that favour the right child.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RightWing;

/// Marker for pre-order traversals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PreOrder;

/// Marker for in-order traversals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct InOrder;

impl Wing for LeftWing {
    const SIDE: Side = Side::Left;
}

impl Wing for RightWing {
    const SIDE: Side = Side::Right;
}

impl Traversal for PreOrder {
    const ORDER: Order = Order::Pre;
}

impl Traversal for InOrder {
    const ORDER: Order = Order::In;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(LeftWing, ());
    assert_eq_size!(InOrder, ());

    #[test]
    fn other_is_an_involution() {
        for side in [Side::Left, Side::Right] {
            assert_eq!(side.other().other(), side);
            assert_ne!(side.other(), side);
        }
    }

    #[test]
    fn markers_map_to_runtime_values() {
        assert_eq!(LeftWing::SIDE, Side::Left);
        assert_eq!(RightWing::SIDE, Side::Right);
        assert_eq!(PreOrder::ORDER, Order::Pre);
        assert_eq!(InOrder::ORDER, Order::In);
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
    }
}
