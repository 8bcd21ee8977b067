//! Prelude module - common imports for Maybe pipelines
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use maybe::prelude::*;
//!
//! let total = Maybe::just(2)
//!     .pipe(curried::map(|x: i32| x * 21))
//!     .get_or_else_value(0);
//! assert_eq!(total, 42);
//! ```

// Re-export functional utilities
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export the algebra
pub use maybe_core::curried;
pub use maybe_core::{
    Aggregate, Catamorphism, HasLength, Maybe, OptionExt, ResultExt, cat_maybes, from_empty,
    from_nullable, matcher, sequence, traverse,
};

// Re-export error types
pub use maybe_core::{Error, Result};
