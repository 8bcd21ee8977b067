#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Maybe Core
//!
//! A type-safe optional value algebra: `Maybe<A>` is either `Just(A)` or
//! `Nothing`, with combinators that propagate absence without unwrapping.
//!
//! ## Laws
//!
//! - Functor: `m.map(identity) == m`, `m.map(g).map(f) == m.map(|x| f(g(x)))`
//! - Monad: `of(v).and_then(f) == f(v)`, `m.and_then(of) == m`,
//!   `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`
//! - Absorption: functions passed to `map`/`and_then`/`filter`/`exists` never
//!   run on `Nothing`
//!
//! ## Error Handling
//!
//! No operation panics. Absence is the only failure mode and it is a value.
//! Leave the algebra explicitly with `get_or_else`, `get_or_else_value`,
//! `or_else`, or `ok_or_absent` when a `Result` is needed.

pub mod aggregate;
pub mod cata;
pub mod convert;
pub mod curried;
mod error;
pub mod maybe;
mod result;
pub mod traverse;

pub use aggregate::Aggregate;
pub use cata::{Catamorphism, matcher};
pub use convert::{HasLength, from_empty, from_nullable};
pub use error::Error;
pub use maybe::{Maybe, absent, empty, of, present};
pub use result::{OptionExt, Result, ResultExt};
pub use traverse::{cat_maybes, sequence, traverse};
