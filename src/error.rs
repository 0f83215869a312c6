//! Library error type

use thiserror::Error;

/// Errors raised by constructors and operations in this crate.
///
/// Out-of-range row/column indices are not errors: aggregation yields a
/// neutral `0.0` and capability accessors yield `None`. IEEE-754 special
/// values (NaN, infinities) are valid results everywhere, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A structurally invalid argument: ragged rows supplied to a
    /// rectangular table, inverted range bounds, or a negative scale factor.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
