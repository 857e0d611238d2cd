use log::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use crate::predicate::Predicate;
use crate::side::{Order, Side};

/// Where a subtree hangs: the tree's root slot or a child slot of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    Root,
    Child(Handle, Side),
}

/// The link structure behind `Tree`.
///
/// Owns every node through the arena and knows how to walk and reshape the
/// links. It holds no ordering of its own; the treap operations take the
/// predicates as arguments.
pub(crate) struct RawTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
}

impl<T> RawTree<T> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    #[inline]
    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.nodes.contains(handle)
    }

    #[inline]
    pub(crate) fn value(&self, handle: Handle) -> &T {
        self.nodes.get(handle).value()
    }

    #[inline]
    pub(crate) fn child(&self, handle: Handle, side: Side) -> Option<Handle> {
        self.nodes.get(handle).child(side)
    }

    #[inline]
    pub(crate) fn parent(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).parent()
    }

    /// Number of parent links between `handle` and the root.
    pub(crate) fn depth(&self, handle: Handle) -> usize {
        let mut depth = 0;
        let mut current = handle;
        while let Some(parent) = self.parent(current) {
            current = parent;
            depth += 1;
        }
        depth
    }

    /// Follows `side` children from `handle` until there are none.
    pub(crate) fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.child(handle, side) {
            handle = child;
        }
        handle
    }

    /// The first node of the `order` traversal favouring `wing`.
    pub(crate) fn first(&self, order: Order, wing: Side) -> Option<Handle> {
        let root = self.root?;
        match order {
            Order::Pre => Some(root),
            Order::In => Some(self.extreme(root, wing)),
        }
    }

    /// The node after `handle` in the `order` traversal favouring `wing`.
    pub(crate) fn next(&self, handle: Handle, order: Order, wing: Side) -> Option<Handle> {
        match order {
            Order::Pre => self.next_pre(handle, wing),
            Order::In => self.next_in(handle, wing),
        }
    }

    fn next_pre(&self, handle: Handle, wing: Side) -> Option<Handle> {
        if let Some(child) = self.child(handle, wing) {
            return Some(child);
        }

        // Climb until an ancestor has an opposite subtree we have not come from.
        let mut from = None;
        let mut current = Some(handle);
        while let Some(node) = current {
            let other = self.child(node, wing.other());
            if other.is_some() && other != from {
                return other;
            }
            from = Some(node);
            current = self.parent(node);
        }
        None
    }

    fn next_in(&self, handle: Handle, wing: Side) -> Option<Handle> {
        if let Some(child) = self.child(handle, wing.other()) {
            return Some(self.extreme(child, wing));
        }

        // The next node is the first ancestor we reach from its wing side.
        let mut from = handle;
        let mut current = self.parent(handle);
        while let Some(node) = current {
            if self.child(node, wing.other()) != Some(from) {
                return Some(node);
            }
            from = node;
            current = self.parent(node);
        }
        None
    }

    /// Returns the slot `handle` currently occupies.
    pub(crate) fn slot_of(&self, handle: Handle) -> Slot {
        match self.parent(handle) {
            None => Slot::Root,
            Some(parent) => {
                let side = self.nodes.get(parent).side_of(handle).expect("`RawTree::slot_of()` - broken parent link!");
                Slot::Child(parent, side)
            }
        }
    }

    /// Returns the subtree hanging in `slot`.
    pub(crate) fn get_slot(&self, slot: Slot) -> Option<Handle> {
        match slot {
            Slot::Root => self.root,
            Slot::Child(parent, side) => self.child(parent, side),
        }
    }

    /// Hangs `subtree` in `slot`, fixing the subtree's parent link.
    pub(crate) fn set_slot(&mut self, slot: Slot, subtree: Option<Handle>) {
        match slot {
            Slot::Root => {
                self.root = subtree;
                if let Some(handle) = subtree {
                    self.nodes.get_mut(handle).set_parent(None);
                }
            }
            Slot::Child(parent, side) => self.link(parent, side, subtree),
        }
    }

    fn link(&mut self, parent: Handle, side: Side, child: Option<Handle>) {
        self.nodes.get_mut(parent).set_child(side, child);
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(Some(parent));
        }
    }

    /// Wraps `value` in a detached single-node subtree.
    pub(crate) fn alloc(&mut self, value: T) -> Handle {
        self.nodes.alloc(Node::new(value))
    }

    /// Merges the detached node `fresh` into the subtree hanging in `slot`.
    ///
    /// Descends by `is_left` until `fresh` is taller than the node in the way
    /// (or the way is clear); that node's subtree is then split around `fresh`.
    pub(crate) fn merge_node<H, K>(&mut self, slot: Slot, fresh: Handle, is_tall: &H, is_left: &K)
    where
        H: Predicate<T> + ?Sized,
        K: Predicate<T> + ?Sized,
    {
        let mut slot = slot;
        loop {
            let Some(occupant) = self.get_slot(slot) else {
                self.set_slot(slot, Some(fresh));
                return;
            };

            if is_tall.test(self.value(fresh), self.value(occupant)) {
                trace!("merge_node: promoting new node over {occupant:?}");
                let (left, right) = self.split(Some(occupant), fresh, is_left);
                self.link(fresh, Side::Left, left);
                self.link(fresh, Side::Right, right);
                self.set_slot(slot, Some(fresh));
                return;
            }

            let side = if is_left.test(self.value(fresh), self.value(occupant)) {
                Side::Left
            } else {
                Side::Right
            };
            slot = Slot::Child(occupant, side);
        }
    }

    /// Splits `subtree` into the nodes `pivot` does not precede and the nodes
    /// it does. Relative ancestry inside each half is preserved. The returned
    /// roots keep stale parent links until they are hung somewhere.
    pub(crate) fn split<K>(&mut self, subtree: Option<Handle>, pivot: Handle, is_left: &K) -> (Option<Handle>, Option<Handle>)
    where
        K: Predicate<T> + ?Sized,
    {
        let (mut left_root, mut right_root) = (None, None);
        let (mut left_hook, mut right_hook): (Option<Handle>, Option<Handle>) = (None, None);

        let mut current = subtree;
        while let Some(node) = current {
            if is_left.test(self.value(pivot), self.value(node)) {
                match right_hook {
                    None => right_root = Some(node),
                    Some(hook) => self.link(hook, Side::Left, Some(node)),
                }
                right_hook = Some(node);
                current = self.child(node, Side::Left);
            } else {
                match left_hook {
                    None => left_root = Some(node),
                    Some(hook) => self.link(hook, Side::Right, Some(node)),
                }
                left_hook = Some(node);
                current = self.child(node, Side::Right);
            }
        }

        if let Some(hook) = left_hook {
            self.link(hook, Side::Right, None);
        }
        if let Some(hook) = right_hook {
            self.link(hook, Side::Left, None);
        }
        (left_root, right_root)
    }

    /// Merges two subtrees where every node of `left` precedes every node of
    /// `right`. The taller root is promoted (the left one on a tie) and the
    /// remainder merged into its inner child slot. The returned root keeps a
    /// stale parent link until it is hung somewhere.
    pub(crate) fn merge<H>(&mut self, mut left: Option<Handle>, mut right: Option<Handle>, is_tall: &H) -> Option<Handle>
    where
        H: Predicate<T> + ?Sized,
    {
        let mut root = None;
        let mut hook: Option<(Handle, Side)> = None;

        loop {
            let (winner, side) = match (left, right) {
                (None, rest) | (rest, None) => {
                    match hook {
                        None => root = rest,
                        Some((parent, side)) => self.link(parent, side, rest),
                    }
                    return root;
                }
                (Some(l), Some(r)) => {
                    if is_tall.test(self.value(r), self.value(l)) {
                        right = self.child(r, Side::Left);
                        (r, Side::Left)
                    } else {
                        left = self.child(l, Side::Right);
                        (l, Side::Right)
                    }
                }
            };

            match hook {
                None => root = Some(winner),
                Some((parent, parent_side)) => self.link(parent, parent_side, Some(winner)),
            }
            hook = Some((winner, side));
        }
    }

    /// Unlinks `handle`, hangs the merge of its children in its slot and
    /// returns its value.
    pub(crate) fn remove<H>(&mut self, handle: Handle, is_tall: &H) -> T
    where
        H: Predicate<T> + ?Sized,
    {
        let slot = self.slot_of(handle);
        let left = self.child(handle, Side::Left);
        let right = self.child(handle, Side::Right);
        let merged = self.merge(left, right, is_tall);
        self.set_slot(slot, merged);
        self.nodes.take(handle).into_value()
    }
}
