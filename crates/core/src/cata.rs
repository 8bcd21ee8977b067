//! Catamorphism: one handler per state, used by [`Maybe::cata`](crate::Maybe::cata).

/// A pair of handlers folding a `Maybe` into a single result type.
///
/// Transient and caller-owned; the algebra never stores it.
#[derive(Debug, Clone, Copy)]
pub struct Catamorphism<P, N> {
    /// Runs on the contained value.
    pub present: P,
    /// Runs when there is no value.
    pub absent: N,
}

impl<P, N> Catamorphism<P, N> {
    /// Pair up the two handlers.
    #[inline]
    pub const fn new(present: P, absent: N) -> Self {
        Self { present, absent }
    }

    /// Borrow both handlers, so reusable (`Fn`) handlers can fold many values.
    #[inline]
    pub const fn by_ref(&self) -> Catamorphism<&P, &N> {
        Catamorphism {
            present: &self.present,
            absent: &self.absent,
        }
    }
}

/// Shorthand for [`Catamorphism::new`].
#[inline]
pub const fn matcher<P, N>(present: P, absent: N) -> Catamorphism<P, N> {
    Catamorphism::new(present, absent)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;
    use crate::Maybe;

    #[test]
    fn test_by_ref_folds_many_values() {
        let folder = matcher(|x: i32| x + 1, || 0);

        let results: Vec<i32> = [Maybe::just(1), Maybe::nothing(), Maybe::just(9)]
            .into_iter()
            .map(|m| m.cata(folder.by_ref()))
            .collect();

        assert_eq!(results, vec![2, 0, 10]);
    }
}
