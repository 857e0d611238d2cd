use super::Tree;
use crate::predicate::Indifferent;
use crate::raw::RawTree;

impl<T> Tree<T> {
    /// Creates an empty tree with room for at least `capacity` values before
    /// the node arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::Tree;
    ///
    /// let tree: Tree<i32> = Tree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            raw: RawTree::with_capacity(capacity),
            is_tall: Indifferent,
            is_left: Indifferent,
        }
    }
}

impl<T, H, K> Tree<T, H, K> {
    /// Returns the number of values the node arena can hold without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use wing_tree::Tree;
    ///
    /// let tree: Tree<i32> = Tree::with_capacity(32);
    /// assert_eq!(tree.capacity(), 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
