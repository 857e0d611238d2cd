use core::fmt;
use core::marker::PhantomData;

use super::Tree;
use crate::predicate::{Indifferent, Predicate};
use crate::raw::RawTree;

/// Configures a [`Tree`] before it is built.
///
/// Unset predicates stay [`Indifferent`]; the capacity defaults to zero.
///
/// # Examples
///
/// ```
/// use wing_tree::Tree;
///
/// let mut tree = Tree::builder()
///     .is_left(|a: &i32, b: &i32| a < b)
///     .capacity(16)
///     .build();
/// tree.extend([3, 1, 2]);
/// assert!(tree.iter().copied().eq([1, 2, 3]));
/// assert!(tree.capacity() >= 16);
/// ```
#[must_use = "a builder does nothing until `build` is called"]
pub struct TreeBuilder<T, H = Indifferent, K = Indifferent> {
    is_tall: H,
    is_left: K,
    capacity: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Tree<T> {
    /// Starts configuring a tree.
    pub const fn builder() -> TreeBuilder<T> {
        TreeBuilder {
            is_tall: Indifferent,
            is_left: Indifferent,
            capacity: 0,
            _marker: PhantomData,
        }
    }
}

impl<T, H, K> TreeBuilder<T, H, K> {
    /// Sets the priority predicate: `is_tall(a, b)` puts `a` above `b`.
    pub fn is_tall<H2: Predicate<T>>(self, is_tall: H2) -> TreeBuilder<T, H2, K> {
        TreeBuilder {
            is_tall,
            is_left: self.is_left,
            capacity: self.capacity,
            _marker: PhantomData,
        }
    }

    /// Sets the key-order predicate: `is_left(a, b)` puts `a` before `b`.
    pub fn is_left<K2: Predicate<T>>(self, is_left: K2) -> TreeBuilder<T, H, K2> {
        TreeBuilder {
            is_tall: self.is_tall,
            is_left,
            capacity: self.capacity,
            _marker: PhantomData,
        }
    }

    /// Reserves room for at least `capacity` values.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl<T, H: Predicate<T>, K: Predicate<T>> TreeBuilder<T, H, K> {
    /// Builds the empty tree.
    pub fn build(self) -> Tree<T, H, K> {
        Tree::from_parts(RawTree::with_capacity(self.capacity), self.is_tall, self.is_left)
    }
}

impl<T, H: fmt::Debug, K: fmt::Debug> fmt::Debug for TreeBuilder<T, H, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeBuilder")
            .field("is_tall", &self.is_tall)
            .field("is_left", &self.is_left)
            .field("capacity", &self.capacity)
            .finish()
    }
}
