//! Result type definition and extension traits bridging `Option`/`Result` into `Maybe`.

use std::fmt::Display;

use crate::error::Error;
use crate::maybe::Maybe;

/// The standard Result type for `Maybe` conversions.
///
/// ```
/// use maybe_core::{Maybe, Result};
///
/// fn port(raw: Maybe<u16>) -> Result<u16> {
///     raw.ok_or_absent("port")
/// }
///
/// assert_eq!(port(Maybe::just(8080)), Ok(8080));
/// assert!(port(Maybe::nothing()).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait lifting `Option` into `Maybe`.
pub trait OptionExt<T> {
    /// Convert into a `Maybe`; `None` becomes `Nothing`.
    fn into_maybe(self) -> Maybe<T>;

    /// Convert into a `Maybe`, logging at trace level when `None`.
    fn into_maybe_logged(self, context: &str) -> Maybe<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }

    #[inline]
    fn into_maybe_logged(self, context: &str) -> Maybe<T> {
        Maybe::from(self).trace_absent(context)
    }
}

/// Extension trait lifting any `Result` into `Maybe`, dropping the error.
pub trait ResultExt<T, E> {
    /// Convert into a `Maybe`; `Err` becomes `Nothing`.
    fn into_maybe(self) -> Maybe<T>;

    /// Convert into a `Maybe`, logging the discarded error at debug level.
    fn into_maybe_logged(self, context: &str) -> Maybe<T>
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_result(self)
    }

    #[inline]
    fn into_maybe_logged(self, context: &str) -> Maybe<T>
    where
        E: Display,
    {
        match self {
            Ok(value) => Maybe::just(value),
            Err(e) => {
                tracing::debug!(context, error = %e, "discarding error as absent value");
                Maybe::nothing()
            }
        }
    }
}
