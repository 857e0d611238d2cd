/// A strict weak order over `T`, injected into a [`Tree`](crate::Tree).
///
/// A tree takes two of these: `is_tall(a, b)` is true when `a` must sit
/// strictly closer to the root than `b`, and `is_left(a, b)` is true when `a`
/// must precede `b` in the in-order sequence.
///
/// Any `Fn(&T, &T) -> bool` is a predicate. It is a logic error for a
/// predicate to not be a strict weak order; the tree does not detect this and
/// will silently take on an unspecified, though memory-safe, shape.
///
/// # Examples
///
/// ```
/// use wing_tree::{Indifferent, Predicate};
///
/// let (one, two) = (1_i32, 2_i32);
/// let less = |a: &i32, b: &i32| a < b;
/// assert!(less.test(&one, &two));
/// assert!(!Indifferent.test(&one, &two));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Returns true if `a` is ordered strictly before `b`.
    fn test(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn test(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// The predicate that never orders anything: every pair of values ties.
///
/// As `is_tall` it makes every insertion descend to a leaf; as `is_left` it
/// makes equal keys settle after existing ones, so the shape follows insertion
/// order only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Indifferent;

impl<T: ?Sized> Predicate<T> for Indifferent {
    #[inline]
    fn test(&self, _: &T, _: &T) -> bool {
        false
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn irreflexive<T, P: Predicate<T>>(p: &P, value: &T) -> bool {
        !p.test(value, value)
    }

    proptest! {
        #[test]
        fn indifferent_is_never_true(a in any::<i64>(), b in any::<i64>()) {
            prop_assert!(!Indifferent.test(&a, &b));
            prop_assert!(irreflexive(&Indifferent, &a));
        }

        #[test]
        fn closures_forward_their_result(a in any::<i64>(), b in any::<i64>()) {
            let greater = |x: &i64, y: &i64| x > y;
            prop_assert_eq!(greater.test(&a, &b), a > b);
            prop_assert!(irreflexive(&greater, &a));
        }
    }
}
