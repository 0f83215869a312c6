//! datasum - Numeric aggregation and range utilities for tabular data
//!
//! Pure, synchronous helpers over two independent abstractions: a
//! rectangular table of optional numeric values (with an insertion-ordered
//! keyed-series sibling) and an immutable closed numeric interval.
//! Operations never mutate their inputs, never log, and treat IEEE-754
//! special values as ordinary data.

pub mod aggregate;
pub mod error;
pub mod model;
pub mod range;

pub use error::DataError;
pub use model::{CellValue, DenseTable, Key, KeySeries, KeyedValues, Table};
pub use range::Range;
