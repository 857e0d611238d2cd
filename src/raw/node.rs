use super::handle::Handle;
use crate::side::Side;

/// A tree node stored in the arena.
///
/// The children are owned through the arena: a node is freed only when the
/// tree removes it, never through its parent link.
pub(crate) struct Node<T> {
    value: T,
    children: [Option<Handle>; 2],
    // Back-reference; `None` for the root.
    parent: Option<Handle>,
}

impl<T> Node<T> {
    /// Creates a detached leaf.
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            children: [None, None],
            parent: None,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        self.children[side.index()]
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        self.children[side.index()] = child;
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    /// Returns the side on which `child` hangs from this node, if it is a child.
    #[inline]
    pub(crate) fn side_of(&self, child: Handle) -> Option<Side> {
        if self.children[0] == Some(child) {
            Some(Side::Left)
        } else if self.children[1] == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
