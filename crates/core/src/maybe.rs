//! The `Maybe` type: a computation that produced a value (`Just`) or didn't (`Nothing`).
//!
//! Every combinator here is total. Absence propagates through `map`, `and_then`,
//! `filter`, `ap` and `assign` without ever invoking the caller's function, and
//! recovery only happens explicitly through `or_else`, `get_or_else` or
//! `get_or_else_value`.

use crate::aggregate::Aggregate;
use crate::cata::Catamorphism;
use crate::error::Error;

use self::Maybe::{Just, Nothing};

/// An optional value.
///
/// `Nothing` orders before any `Just`, the same as `Option`.
///
/// # Examples
///
/// ```
/// use maybe_core::Maybe;
///
/// let three = Maybe::just(1)
///     .map(|x| x + 1)
///     .and_then(|x| Maybe::just(x + 1));
/// assert_eq!(three, Maybe::just(3));
///
/// let none: Maybe<i32> = Maybe::nothing();
/// assert_eq!(none.map(|x| x + 1).get_or_else_value(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "a Maybe carries the result of a computation and should be used"]
pub enum Maybe<A> {
    /// No value.
    Nothing,
    /// Exactly one value.
    Just(A),
}

/// Construct a present `Maybe`.
#[inline]
pub const fn of<A>(value: A) -> Maybe<A> {
    Just(value)
}

/// Alias of [`of`].
#[inline]
pub const fn present<A>(value: A) -> Maybe<A> {
    Just(value)
}

/// Construct an absent `Maybe`.
#[inline]
pub const fn empty<A>() -> Maybe<A> {
    Nothing
}

/// Alias of [`empty`].
#[inline]
pub const fn absent<A>() -> Maybe<A> {
    Nothing
}

impl<A> Maybe<A> {
    // ---------------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------------

    /// Wrap a value.
    #[inline]
    pub const fn just(value: A) -> Self {
        Just(value)
    }

    /// Wrap a value. Monadic `pure`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Just(value)
    }

    /// Wrap a value.
    #[inline]
    pub const fn present(value: A) -> Self {
        Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Nothing
    }

    /// The absent value.
    #[inline]
    pub const fn empty() -> Self {
        Nothing
    }

    /// The absent value.
    #[inline]
    pub const fn absent() -> Self {
        Nothing
    }

    /// Present when `result` is `Ok`. The error is discarded.
    #[inline]
    pub fn from_result<E>(result: std::result::Result<A, E>) -> Self {
        match result {
            Ok(value) => Just(value),
            Err(_) => Nothing,
        }
    }

    // ---------------------------------------------------------------------
    // State
    // ---------------------------------------------------------------------

    /// `true` when a value is held.
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Just(_))
    }

    /// `true` when no value is held.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Alias of [`Maybe::is_present`].
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        self.is_present()
    }

    /// Alias of [`Maybe::is_absent`].
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        self.is_absent()
    }

    /// Borrow the contained value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }

    /// Convert into the standard library's `Option`.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<A> {
        match self {
            Just(value) => Some(value),
            Nothing => None,
        }
    }

    // ---------------------------------------------------------------------
    // Extraction
    // ---------------------------------------------------------------------

    /// Return the value, or evaluate `fallback` when absent.
    ///
    /// `fallback` only runs in the absent case.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Just(value) => value,
            Nothing => fallback(),
        }
    }

    /// Return the value, or `fallback` when absent.
    #[inline]
    pub fn get_or_else_value(self, fallback: A) -> A {
        match self {
            Just(value) => value,
            Nothing => fallback,
        }
    }

    /// Fold both states into one result. Exactly one handler runs.
    ///
    /// ```
    /// use maybe_core::{Catamorphism, Maybe};
    ///
    /// let describe = |m: Maybe<i32>| {
    ///     m.cata(Catamorphism::new(|n| format!("got {n}"), || "nothing".to_string()))
    /// };
    /// assert_eq!(describe(Maybe::just(2)), "got 2");
    /// assert_eq!(describe(Maybe::nothing()), "nothing");
    /// ```
    #[inline]
    pub fn cata<R, P, N>(self, matcher: Catamorphism<P, N>) -> R
    where
        P: FnOnce(A) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Just(value) => (matcher.present)(value),
            Nothing => (matcher.absent)(),
        }
    }

    /// Present and `predicate` holds.
    ///
    /// The predicate is never invoked on an absent value.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Just(value) => predicate(value),
            Nothing => false,
        }
    }

    // ---------------------------------------------------------------------
    // Transformation
    // ---------------------------------------------------------------------

    /// Apply `f` to a present value.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    /// Chain a computation that may itself be absent.
    ///
    /// The result of `f` is returned as is, never double-wrapped.
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Just(value) => f(value),
            Nothing => Nothing,
        }
    }

    /// Keep `self` when present, otherwise evaluate the alternative.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Just(value) => Just(value),
            Nothing => f(),
        }
    }

    /// Keep the value only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.and_then(|value| if predicate(&value) { Just(value) } else { Nothing })
    }

    /// Apply a wrapped function to the wrapped value.
    ///
    /// ```
    /// use maybe_core::Maybe;
    ///
    /// let add_one = Maybe::just(|x: i32| x + 1);
    /// assert_eq!(Maybe::just(41).ap(add_one), Maybe::just(42));
    /// ```
    #[inline]
    pub fn ap<B, F>(self, maybe_fn: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, maybe_fn) {
            (Just(value), Just(f)) => Just(f(value)),
            _ => Nothing,
        }
    }

    /// Add a field to the held aggregate.
    ///
    /// Absent when either `self` or `other` is absent.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use maybe_core::Maybe;
    ///
    /// let record = Maybe::just(BTreeMap::new())
    ///     .assign("a", Maybe::just(1))
    ///     .assign("b", Maybe::just(2));
    /// assert_eq!(record.map(|r| r.len()), Maybe::just(2));
    /// ```
    #[inline]
    pub fn assign<K, V>(self, key: K, other: Maybe<V>) -> Self
    where
        A: Aggregate<K, V>,
    {
        match (self, other) {
            (Just(aggregate), Just(value)) => Just(aggregate.with_field(key, value)),
            _ => Nothing,
        }
    }

    /// Add a field computed from the aggregate built so far.
    ///
    /// `f` is not invoked when `self` is absent.
    #[inline]
    pub fn assign_with<K, V, F>(self, key: K, f: F) -> Self
    where
        A: Aggregate<K, V>,
        F: FnOnce(&A) -> Maybe<V>,
    {
        self.and_then(|aggregate| match f(&aggregate) {
            Just(value) => Just(aggregate.with_field(key, value)),
            Nothing => Nothing,
        })
    }

    // ---------------------------------------------------------------------
    // Effects
    // ---------------------------------------------------------------------

    /// Run `effect` on a present value and return `self` unchanged.
    #[inline]
    pub fn then_do<F>(self, effect: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Just(ref value) = self {
            effect(value);
        }
        self
    }

    /// Run `effect` when absent and return `self` unchanged.
    #[inline]
    pub fn else_do<F>(self, effect: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            effect();
        }
        self
    }

    // ---------------------------------------------------------------------
    // Leaving the algebra
    // ---------------------------------------------------------------------

    /// Convert to a `Result`, using `err` when absent.
    ///
    /// # Errors
    ///
    /// Returns `err` when no value is held.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> std::result::Result<A, E> {
        self.into_option().ok_or(err)
    }

    /// Convert to a `Result`, building the error lazily.
    ///
    /// # Errors
    ///
    /// Returns the output of `err` when no value is held.
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> std::result::Result<A, E>
    where
        F: FnOnce() -> E,
    {
        self.into_option().ok_or_else(err)
    }

    /// Convert to the crate `Result`, naming what was missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueAbsent`] carrying `context` when no value is held.
    #[inline]
    pub fn ok_or_absent(self, context: impl Into<String>) -> crate::Result<A> {
        self.ok_or_else(|| Error::value_absent(context))
    }

    // ---------------------------------------------------------------------
    // Diagnostics
    // ---------------------------------------------------------------------

    /// Get the value or a default, logging at debug level when absent.
    #[inline]
    pub fn get_or_default_logged(self, default: A, context: &str) -> A {
        match self {
            Just(value) => value,
            Nothing => {
                tracing::debug!(context, "value absent, using default");
                default
            }
        }
    }

    /// Log at trace level when absent. Returns `self` unchanged.
    #[inline]
    pub fn trace_absent(self, context: &str) -> Self {
        if self.is_absent() {
            tracing::trace!(context, "value absent");
        }
        self
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Remove one level of nesting. Monadic `join`.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.and_then(|inner| inner)
    }
}

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

// Encoded exactly like `Option<A>`: `null` when absent.
#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Maybe<A> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_ref().into_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<A> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Self::from)
    }
}
