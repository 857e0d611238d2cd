use core::fmt;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::iter::{InLeft, Iter, Position};
use crate::predicate::{Indifferent, Predicate};
use crate::raw::{Handle, RawTree, Slot};
use crate::side::{InOrder, LeftWing, Side, Traversal, Wing};

mod builder;
mod capacity;

pub use builder::TreeBuilder;

/// A binary tree kept in treap order by two caller-supplied predicates.
///
/// - `is_tall: H` decides the vertical order: if `is_tall(a, b)` then `a` is
///   never below `b`. No child is ever taller than its parent.
/// - `is_left: K` decides the horizontal order: the in-order, left-wing
///   traversal (see [`iter`](Tree::iter)) never has a value `is_left` of its
///   predecessor.
///
/// Both default to [`Indifferent`], under which the shape simply follows the
/// order of insertion. Both must be strict weak orders; this is not checked.
///
/// Values are addressed by [`Position`]s, which do not borrow the tree, and
/// navigated with [`Accessor`](crate::Accessor)s, which do.
///
/// # Examples
///
/// ```
/// use wing_tree::Tree;
///
/// // A max-heap on priority, ordered by key.
/// let mut tree = Tree::with_predicates(
///     |a: &(u32, char), b: &(u32, char)| a.0 > b.0,
///     |a: &(u32, char), b: &(u32, char)| a.1 < b.1,
/// );
/// tree.insert((3, 'c'));
/// tree.insert((9, 'b'));
/// let a = tree.insert((5, 'a'));
///
/// let keys: String = tree.iter().map(|&(_, key)| key).collect();
/// assert_eq!(keys, "abc");
/// assert_eq!(tree.root_accessor().unwrap().get(), Some(&(9, 'b')));
///
/// let mut b = a;
/// b.increment(&tree);
/// let next = tree.erase(a, b);
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.get(next), Some(&(9, 'b')));
/// ```
pub struct Tree<T, H = Indifferent, K = Indifferent> {
    raw: RawTree<T>,
    is_tall: H,
    is_left: K,
}

impl<T> Tree<T> {
    /// Creates an empty tree whose predicates are both [`Indifferent`].
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend(["b", "a", "c"]);
    /// // Insertion-shaped: each value hangs to the right of the last.
    /// assert!(tree.iter().copied().eq(["b", "a", "c"]));
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawTree::new(),
            is_tall: Indifferent,
            is_left: Indifferent,
        }
    }
}

impl<T, H, K> Tree<T, H, K> {
    /// Creates an empty tree ordered by `is_tall` (closer to the root) and
    /// `is_left` (earlier in order).
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::{Indifferent, Tree};
    ///
    /// let mut tree = Tree::with_predicates(Indifferent, |a: &i32, b: &i32| a < b);
    /// tree.extend([5, 3, 8, 1, 4]);
    /// assert!(tree.iter().copied().eq([1, 3, 4, 5, 8]));
    /// ```
    pub const fn with_predicates(is_tall: H, is_left: K) -> Self
    where
        H: Predicate<T>,
        K: Predicate<T>,
    {
        Self {
            raw: RawTree::new(),
            is_tall,
            is_left,
        }
    }

    const fn from_parts(raw: RawTree<T>, is_tall: H, is_left: K) -> Self {
        Self { raw, is_tall, is_left }
    }

    #[inline]
    pub(crate) const fn raw(&self) -> &RawTree<T> {
        &self.raw
    }

    /// The priority predicate.
    #[must_use]
    pub const fn is_tall(&self) -> &H {
        &self.is_tall
    }

    /// The key-order predicate.
    #[must_use]
    pub const fn is_left(&self) -> &K {
        &self.is_left
    }

    /// Returns the number of values in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The first position of the in-order, left-wing traversal.
    #[must_use]
    pub fn begin(&self) -> InLeft {
        InLeft::first(self)
    }

    /// The past-the-end position.
    #[must_use]
    pub const fn end(&self) -> InLeft {
        InLeft::end()
    }

    /// The first position of any traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::{PreOrder, RightWing, Tree};
    ///
    /// let mut tree = Tree::with_predicates(|_: &i32, _: &i32| false, |a: &i32, b: &i32| a < b);
    /// tree.extend([2, 1, 3]);
    /// let root = tree.begin_with::<PreOrder, RightWing>();
    /// assert_eq!(tree.get(root), Some(&2));
    /// ```
    #[must_use]
    pub fn begin_with<O: Traversal, W: Wing>(&self) -> Position<O, W> {
        Position::first(self)
    }

    /// Returns the value at `position`, or `None` for the end position.
    ///
    /// # Panics
    ///
    /// Panics if the node at `position` has been erased and its slot not
    /// reused.
    #[must_use]
    pub fn get<O, W>(&self, position: Position<O, W>) -> Option<&T> {
        position.handle().map(|handle| self.raw.value(handle))
    }

    /// The first value in order.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first(InOrder::ORDER, Side::Left).map(|handle| self.raw.value(handle))
    }

    /// The last value in order.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.first(InOrder::ORDER, Side::Right).map(|handle| self.raw.value(handle))
    }

    /// Iterates in order: the in-order, left-wing traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        self.traverse()
    }

    /// Iterates over any traversal.
    pub fn traverse<O: Traversal, W: Wing>(&self) -> Iter<'_, T, O, W> {
        Iter::new(&self.raw, Position::first(self), Position::end())
    }

    /// Iterates over `[first, last)`. If `last` cannot be reached from
    /// `first`, iterates to the end.
    pub fn range<O: Traversal, W: Wing>(&self, first: Position<O, W>, last: Position<O, W>) -> Iter<'_, T, O, W> {
        Iter::new(&self.raw, first, last)
    }
}

impl<T, H: Predicate<T>, K: Predicate<T>> Tree<T, H, K> {
    /// Inserts `value` and returns its in-order position.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, value: T) -> InLeft {
        self.insert_at(InLeft::end(), value)
    }

    /// Inserts `value`, starting the search for its place at `hint`.
    ///
    /// The new value is merged into the subtree rooted at `hint`. If it cannot
    /// belong there (it is taller than the hint's parent, or some ancestor of
    /// the hint would have it on the wrong side) the hint is ignored and the
    /// search starts from the root, as it does for the end position.
    ///
    /// Among values that tie under `is_left`, an unhinted insertion lands
    /// after the existing ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::{Indifferent, Tree};
    ///
    /// let mut tree = Tree::with_predicates(Indifferent, |a: &i32, b: &i32| a < b);
    /// let ten = tree.insert(10);
    /// let twenty = tree.insert_at(ten, 20);
    /// // 5 cannot go under 20, so the hint is ignored.
    /// tree.insert_at(twenty, 5);
    /// assert!(tree.iter().copied().eq([5, 10, 20]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert_at<O, W>(&mut self, hint: Position<O, W>, value: T) -> Position<O, W> {
        let fresh = self.raw.alloc(value);
        let slot = self.hint_slot(hint.handle(), fresh);
        trace!("insert: merging {fresh:?} at {slot:?}");
        self.raw.merge_node(slot, fresh, &self.is_tall, &self.is_left);
        Position::from_handle(Some(fresh))
    }

    fn hint_slot(&self, hint: Option<Handle>, fresh: Handle) -> Slot {
        let Some(hint) = hint else {
            return Slot::Root;
        };
        if self.honours(hint, fresh) {
            self.raw.slot_of(hint)
        } else {
            debug!("insert: ignoring hint {hint:?}");
            Slot::Root
        }
    }

    // True if `fresh` may be merged into the subtree rooted at `hint` without
    // breaking either order.
    fn honours(&self, hint: Handle, fresh: Handle) -> bool {
        let value = self.raw.value(fresh);
        if let Some(parent) = self.raw.parent(hint) {
            if self.is_tall.test(value, self.raw.value(parent)) {
                return false;
            }
        }

        let mut current = hint;
        while let Slot::Child(parent, side) = self.raw.slot_of(current) {
            let ancestor = self.raw.value(parent);
            let misplaced = match side {
                Side::Left => self.is_left.test(ancestor, value),
                Side::Right => self.is_left.test(value, ancestor),
            };
            if misplaced {
                return false;
            }
            current = parent;
        }
        true
    }

    /// Erases the values in `[first, last)` of `first`'s traversal and
    /// returns `last`. If `last` cannot be reached from `first`, erases
    /// through the end and returns the end position.
    ///
    /// The range is resolved before anything is removed, so it names exactly
    /// the values the traversal visited at the time of the call. This holds
    /// for pre-order ranges too, even though removing a node changes what
    /// its pre-order successor would be.
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::{Indifferent, Tree};
    ///
    /// let mut tree = Tree::with_predicates(Indifferent, |a: &i32, b: &i32| a < b);
    /// tree.extend(1..=6);
    ///
    /// let mut first = tree.begin();
    /// first.increment(&tree);
    /// let mut last = first;
    /// last.increment(&tree);
    /// last.increment(&tree);
    ///
    /// let next = tree.erase(first, last);
    /// assert_eq!(tree.get(next), Some(&4));
    /// assert!(tree.iter().copied().eq([1, 4, 5, 6]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k · height) for a range of k values.
    pub fn erase<O: Traversal, W: Wing>(&mut self, first: Position<O, W>, last: Position<O, W>) -> Position<O, W> {
        let mut doomed: SmallVec<[Handle; 16]> = SmallVec::new();
        let mut current = first;
        while let Some(handle) = current.handle() {
            if current == last {
                break;
            }
            doomed.push(handle);
            current.increment(self);
        }
        if current != last {
            debug!("erase: end of range not reachable, erasing through the end");
        }

        trace!("erase: removing {} values", doomed.len());
        for handle in doomed {
            self.raw.remove(handle, &self.is_tall);
        }
        current
    }

    /// Removes the value at `position` and returns it, or `None` for the end
    /// position. The children of the removed node are merged into its place.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove<O, W>(&mut self, position: Position<O, W>) -> Option<T> {
        let handle = position.handle()?;
        debug_assert!(self.raw.contains(handle), "`Tree::remove()` - `position` was already erased!");
        trace!("remove: {handle:?}");
        Some(self.raw.remove(handle, &self.is_tall))
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, H, K> fmt::Debug for Tree<T, H, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, H: Predicate<T>, K: Predicate<T>> Extend<T> for Tree<T, H, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, H, K> IntoIterator for &'a Tree<T, H, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, InOrder, LeftWing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
