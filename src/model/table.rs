//! Cell values, the table capability, and a dense rectangular table

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// An optional numeric cell value
///
/// "Missing" is the explicit `Null` variant, never a sentinel number, so a
/// computed `0.0` or `NaN` stays distinguishable from an absent cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            // Cross-type numeric comparison
            (CellValue::Int(a), CellValue::Float(b)) => (*a as f64) == *b,
            (CellValue::Float(a), CellValue::Int(b)) => *a == (*b as f64),
            _ => false,
        }
    }
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric view of the cell, `None` when null
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Null => None,
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// Read access to a rectangular grid of optional numeric values
///
/// `value_at` answers `None` both for a null cell and for an out-of-bounds
/// index, so batch aggregation over heterogeneous tables needs no per-call
/// bounds checking. Implementations are read-only collaborators; the
/// aggregation functions never hold a table beyond a single call.
pub trait Table {
    /// Number of rows
    fn row_count(&self) -> usize;

    /// Number of columns
    fn column_count(&self) -> usize;

    /// Numeric value of the cell at (row, column), zero-based
    fn value_at(&self, row: usize, column: usize) -> Option<f64>;
}

/// A rectangular table backed by row-major cell storage
#[derive(Debug, Clone, Default)]
pub struct DenseTable {
    rows: Vec<Vec<CellValue>>,
    columns: usize,
}

impl DenseTable {
    /// Create an empty table with a fixed column count
    pub fn new(columns: usize) -> Self {
        Self {
            rows: Vec::new(),
            columns,
        }
    }

    /// Build a table from row-major cells
    ///
    /// All rows must have the same width; ragged input is rejected.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Result<Self, DataError> {
        let columns = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != columns) {
            return Err(DataError::InvalidArgument(
                "table rows must all have the same width".to_string(),
            ));
        }
        Ok(Self { rows, columns })
    }

    /// Build an all-present table from raw float rows
    pub fn from_floats(rows: &[Vec<f64>]) -> Result<Self, DataError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().copied().map(CellValue::Float).collect())
                .collect(),
        )
    }

    /// Append a row, enforcing the table width
    ///
    /// The first row appended to a zero-column table fixes the width.
    pub fn push_row(&mut self, cells: Vec<CellValue>) -> Result<(), DataError> {
        if self.rows.is_empty() && self.columns == 0 {
            self.columns = cells.len();
        } else if cells.len() != self.columns {
            return Err(DataError::InvalidArgument(format!(
                "row width {} does not match table width {}",
                cells.len(),
                self.columns
            )));
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Get a cell by position
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(column)
    }
}

impl Table for DenseTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn value_at(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column)?.as_f64()
    }
}
