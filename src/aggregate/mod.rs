//! Aggregation operations over tables and keyed series
//!
//! Pure, synchronous computations: totals over the [`Table`](crate::model::Table)
//! capability, cumulative percentage distributions over
//! [`KeyedValues`](crate::model::KeyedValues), and conversions into owned cell
//! storage. Null cells are a normal data state, never an error; out-of-range
//! indices yield neutral results.

mod convert;
mod distribution;
mod totals;

pub use convert::{cells_equal_2d, clone_cells_2d, float_cells, float_cells_2d};
pub use distribution::{cumulative_percentages, total};
pub use totals::{column_total, row_total};
