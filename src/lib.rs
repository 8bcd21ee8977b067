#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Maybe
//!
//! A type-safe optional value: `Just(value)` or `Nothing`, with total
//! combinators and curried free functions for left-to-right pipelines.
//!
//! This library re-exports the `maybe-core` crate and a [`prelude`].

pub use maybe_core::*;

pub mod prelude;
