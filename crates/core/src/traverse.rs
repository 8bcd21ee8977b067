//! Collection helpers: turning many `Maybe`s into one.
//!
//! Evaluation is sequential and stops at the first absent element, so a
//! `traverse` function is never called past the first `Nothing` it returns.

use crate::maybe::Maybe;

/// Collect into any `FromIterator` target, absent if any element is absent.
///
/// ```
/// use std::collections::BTreeSet;
/// use maybe_core::Maybe;
///
/// let set: Maybe<BTreeSet<i32>> = [Maybe::just(2), Maybe::just(1)].into_iter().collect();
/// assert_eq!(set, Maybe::just(BTreeSet::from([1, 2])));
/// ```
impl<A, V: FromIterator<A>> FromIterator<Maybe<A>> for Maybe<V> {
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

/// Present list of every value, in order, or absent if any element is absent.
#[inline]
pub fn sequence<A, I>(items: I) -> Maybe<Vec<A>>
where
    I: IntoIterator<Item = Maybe<A>>,
{
    items.into_iter().collect()
}

/// Map each element through `f` and [`sequence`] the results.
///
/// `f` is not invoked again after it first returns `Nothing`.
#[inline]
pub fn traverse<A, B, I, F>(f: F, items: I) -> Maybe<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Maybe<B>,
{
    items.into_iter().map(f).collect()
}

/// Keep the present values, drop the absent ones.
#[inline]
pub fn cat_maybes<A, I>(items: I) -> Vec<A>
where
    I: IntoIterator<Item = Maybe<A>>,
{
    items.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects)]

    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_sequence_all_present() {
        let values = sequence([Maybe::just(1), Maybe::just(2), Maybe::just(3)]);
        assert_eq!(values, Maybe::just(vec![1, 2, 3]));
    }

    #[test]
    fn test_sequence_any_absent() {
        let values = sequence([Maybe::just(1), Maybe::nothing(), Maybe::just(3)]);
        assert_eq!(values, Maybe::nothing());
    }

    #[test]
    fn test_sequence_empty_is_present() {
        assert_eq!(sequence(Vec::<Maybe<i32>>::new()), Maybe::just(vec![]));
    }

    #[test]
    fn test_sequence_stops_pulling_after_absent() {
        let pulled = Cell::new(0);
        let items = [Maybe::just(1), Maybe::nothing(), Maybe::just(3)]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));

        assert_eq!(sequence(items), Maybe::nothing());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_traverse() {
        let evens_only = |n: i32| {
            if n % 2 == 0 {
                Maybe::just(n)
            } else {
                Maybe::nothing()
            }
        };
        assert_eq!(traverse(evens_only, [1, 2, 3]), Maybe::nothing());
        assert_eq!(traverse(|n| Maybe::just(n * 2), [1, 2, 3]), Maybe::just(vec![2, 4, 6]));
    }

    #[test]
    fn test_traverse_short_circuits() {
        let calls = Cell::new(0);
        let result = traverse(
            |n: i32| {
                calls.set(calls.get() + 1);
                if n < 2 { Maybe::just(n) } else { Maybe::nothing() }
            },
            [1, 2, 3, 4],
        );

        assert_eq!(result, Maybe::nothing());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_cat_maybes_preserves_order() {
        let values = cat_maybes([Maybe::just('a'), Maybe::nothing(), Maybe::just('c')]);
        assert_eq!(values, vec!['a', 'c']);
    }
}
