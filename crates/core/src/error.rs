//! Error type for leaving the `Maybe` algebra at a boundary.
//!
//! Inside the algebra absence is a value; this type only appears once a caller
//! asks for a `Result`.

use thiserror::Error;

/// Core error type for `Maybe` conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("value absent: {context}")]
    ValueAbsent { context: String },
}

impl Error {
    /// Create a value-absent error.
    pub fn value_absent(context: impl Into<String>) -> Self {
        Self::ValueAbsent {
            context: context.into(),
        }
    }
}
