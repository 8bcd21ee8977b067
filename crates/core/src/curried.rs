//! Partially applied combinators for left-to-right pipelines.
//!
//! Each function takes everything except the `Maybe` and returns a closure
//! awaiting it. Chain them with `tap::Pipe`, or hand them to iterator adapters:
//!
//! ```
//! use maybe_core::Maybe;
//! use maybe_core::curried::{and_then, get_or_else_value, map};
//!
//! let increment = map(|x: i32| x + 1);
//! let halve = and_then(|x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() });
//! let or_zero = get_or_else_value(0);
//!
//! let results: Vec<i32> = [Maybe::just(1), Maybe::just(2), Maybe::nothing()]
//!     .into_iter()
//!     .map(&increment)
//!     .map(&halve)
//!     .map(&or_zero)
//!     .collect();
//! assert_eq!(results, vec![1, 0, 0]);
//! ```

use crate::cata::Catamorphism;
use crate::maybe::Maybe;

/// Lifts `f` over a `Maybe`.
#[inline]
pub fn map<A, B, F>(f: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> B,
{
    move |m: Maybe<A>| m.map(&f)
}

/// Chains `f` onto a present value.
#[inline]
pub fn and_then<A, B, F>(f: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> Maybe<B>,
{
    move |m: Maybe<A>| m.and_then(&f)
}

/// Replaces an absent value with the result of `f`.
#[inline]
pub fn or_else<A, F>(f: F) -> impl Fn(Maybe<A>) -> Maybe<A>
where
    F: Fn() -> Maybe<A>,
{
    move |m: Maybe<A>| m.or_else(&f)
}

/// Keeps a present value only when `predicate` holds.
#[inline]
pub fn filter<A, P>(predicate: P) -> impl Fn(Maybe<A>) -> Maybe<A>
where
    P: Fn(&A) -> bool,
{
    move |m: Maybe<A>| m.filter(&predicate)
}

/// Borrows the `Maybe`, like [`Maybe::exists`].
#[inline]
pub fn exists<A, P>(predicate: P) -> impl Fn(&Maybe<A>) -> bool
where
    P: Fn(&A) -> bool,
{
    move |m: &Maybe<A>| m.exists(&predicate)
}

/// The wrapped function is consumed, so the returned closure runs once.
#[inline]
pub fn ap<A, B, F>(maybe_fn: Maybe<F>) -> impl FnOnce(Maybe<A>) -> Maybe<B>
where
    F: FnOnce(A) -> B,
{
    move |m: Maybe<A>| m.ap(maybe_fn)
}

/// Extracts the value, calling `fallback` when absent.
#[inline]
pub fn get_or_else<A, F>(fallback: F) -> impl Fn(Maybe<A>) -> A
where
    F: Fn() -> A,
{
    move |m: Maybe<A>| m.get_or_else(&fallback)
}

/// The fallback is cloned only when a value is missing.
#[inline]
pub fn get_or_else_value<A: Clone>(fallback: A) -> impl Fn(Maybe<A>) -> A {
    move |m: Maybe<A>| m.get_or_else(|| fallback.clone())
}

/// Folds with a reusable [`Catamorphism`].
#[inline]
pub fn cata<A, R, P, N>(matcher: Catamorphism<P, N>) -> impl Fn(Maybe<A>) -> R
where
    P: Fn(A) -> R,
    N: Fn() -> R,
{
    move |m: Maybe<A>| m.cata(matcher.by_ref())
}

/// Kleisli composition: run `f`, then feed a present result to `g`.
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Maybe<C>
where
    F: Fn(A) -> Maybe<B>,
    G: Fn(B) -> Maybe<C>,
{
    move |x: A| f(x).and_then(&g)
}
