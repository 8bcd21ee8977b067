//! Lifting plain values into `Maybe`.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

use crate::maybe::Maybe;

/// Absent iff `value` is `None`.
///
/// Falsy values such as `0`, `""` or `false` are present: only the sentinel
/// counts as absence.
///
/// ```
/// use maybe_core::{from_nullable, Maybe};
///
/// assert_eq!(from_nullable(Some(0)), Maybe::just(0));
/// assert_eq!(from_nullable::<i32>(None), Maybe::nothing());
/// ```
#[inline]
pub fn from_nullable<A>(value: Option<A>) -> Maybe<A> {
    Maybe::from(value)
}

/// Absent iff `collection` has no elements.
///
/// ```
/// use maybe_core::{from_empty, Maybe};
///
/// assert_eq!(from_empty(vec![1, 2]), Maybe::just(vec![1, 2]));
/// assert_eq!(from_empty(""), Maybe::nothing());
/// ```
#[inline]
pub fn from_empty<C: HasLength>(collection: C) -> Maybe<C> {
    if collection.length() == 0 {
        Maybe::nothing()
    } else {
        Maybe::just(collection)
    }
}

/// Anything with a number of elements.
pub trait HasLength {
    /// Number of elements (bytes, for strings).
    fn length(&self) -> usize;
}

impl<C: HasLength + ?Sized> HasLength for &C {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<C: HasLength + ?Sized> HasLength for Box<C> {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

macro_rules! impl_has_length {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> HasLength for $ty {
                #[inline]
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_has_length! {
    str => [],
    String => [],
    [T] => [T],
    Vec<T> => [T],
    VecDeque<T> => [T],
    LinkedList<T> => [T],
    BinaryHeap<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    HashSet<T, S> => [T, S],
    BTreeMap<K, V> => [K, V],
    BTreeSet<T> => [T],
}

#[cfg(feature = "im")]
impl_has_length! {
    im::Vector<T> => [T: Clone],
    im::HashMap<K, V, S> => [K: Clone + Eq + std::hash::Hash, V: Clone, S: std::hash::BuildHasher],
    im::HashSet<T, S> => [T: Clone + Eq + std::hash::Hash, S: std::hash::BuildHasher],
    im::OrdMap<K, V> => [K: Clone + Ord, V: Clone],
    im::OrdSet<T> => [T: Clone + Ord],
}

#[cfg(feature = "json")]
impl_has_length! {
    serde_json::Map<String, serde_json::Value> => [],
}
