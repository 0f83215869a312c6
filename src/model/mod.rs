//! Data model: optional numeric cells, tables, and keyed series

mod series;
mod table;

pub use series::{Key, KeySeries, KeyedValues};
pub use table::{CellValue, DenseTable, Table};
