//! Column and row summation over the table capability

use crate::model::Table;

/// Sum of the given column, skipping null cells
///
/// An out-of-range column yields `0.0` rather than an error, so batch
/// aggregation over heterogeneous tables needs no per-call bounds checks.
/// NaN and infinite cell values propagate per IEEE-754.
pub fn column_total<T: Table + ?Sized>(table: &T, column: usize) -> f64 {
    if column >= table.column_count() {
        return 0.0;
    }
    (0..table.row_count())
        .filter_map(|row| table.value_at(row, column))
        .sum()
}

/// Sum of the given row, skipping null cells
///
/// Same out-of-range and IEEE-754 policies as [`column_total`].
pub fn row_total<T: Table + ?Sized>(table: &T, row: usize) -> f64 {
    if row >= table.row_count() {
        return 0.0;
    }
    (0..table.column_count())
        .filter_map(|column| table.value_at(row, column))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, DenseTable};

    fn two_by_two() -> DenseTable {
        DenseTable::from_floats(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    }

    #[test]
    fn test_column_total_two_by_two() {
        let table = two_by_two();
        assert_eq!(column_total(&table, 0), 4.0);
        assert_eq!(column_total(&table, 1), 6.0);
    }

    #[test]
    fn test_row_total_two_by_two() {
        let table = two_by_two();
        assert_eq!(row_total(&table, 0), 3.0);
        assert_eq!(row_total(&table, 1), 7.0);
    }

    #[test]
    fn test_middle_column_of_three_by_three() {
        let table = DenseTable::from_floats(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        assert_eq!(column_total(&table, 1), 15.0);
    }

    #[test]
    fn test_single_cell_table() {
        let table = DenseTable::from_floats(&[vec![5.0]]).unwrap();
        assert_eq!(column_total(&table, 0), 5.0);
        assert_eq!(row_total(&table, 0), 5.0);
    }

    #[test]
    fn test_out_of_range_index_yields_zero() {
        let table = two_by_two();
        assert_eq!(column_total(&table, 2), 0.0);
        assert_eq!(column_total(&table, usize::MAX), 0.0);
        assert_eq!(row_total(&table, 2), 0.0);
    }

    #[test]
    fn test_empty_table_yields_zero() {
        let table = DenseTable::new(3);
        assert_eq!(column_total(&table, 0), 0.0);
        assert_eq!(row_total(&table, 0), 0.0);
    }

    #[test]
    fn test_null_cells_are_skipped() {
        let table = DenseTable::from_rows(vec![
            vec![CellValue::Float(1.0), CellValue::Null],
            vec![CellValue::Null, CellValue::Float(4.0)],
            vec![CellValue::Float(2.0), CellValue::Float(6.0)],
        ])
        .unwrap();
        assert_eq!(column_total(&table, 0), 3.0);
        assert_eq!(column_total(&table, 1), 10.0);
        assert_eq!(row_total(&table, 0), 1.0);
    }

    #[test]
    fn test_all_null_column_yields_zero() {
        let table = DenseTable::from_rows(vec![
            vec![CellValue::Null, CellValue::Float(2.0)],
            vec![CellValue::Null, CellValue::Float(3.0)],
        ])
        .unwrap();
        assert_eq!(column_total(&table, 0), 0.0);
    }

    #[test]
    fn test_negative_and_cancelling_values() {
        let table = DenseTable::from_floats(&[vec![-1.0, -2.0], vec![3.0, -3.0]]).unwrap();
        assert_eq!(row_total(&table, 0), -3.0);
        assert_eq!(row_total(&table, 1), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let table = DenseTable::from_floats(&[vec![f64::NAN, 1.0]]).unwrap();
        assert!(row_total(&table, 0).is_nan());
        assert!(column_total(&table, 0).is_nan());
    }

    #[test]
    fn test_infinity_propagates() {
        let table = DenseTable::from_floats(&[vec![f64::INFINITY, 1.0]]).unwrap();
        assert_eq!(row_total(&table, 0), f64::INFINITY);

        let opposed = DenseTable::from_floats(&[vec![f64::INFINITY, f64::NEG_INFINITY]]).unwrap();
        assert!(row_total(&opposed, 0).is_nan());
    }

    #[test]
    fn test_magnitude_overflow_to_infinity() {
        let table = DenseTable::from_floats(&[vec![f64::MAX, f64::MAX]]).unwrap();
        assert_eq!(row_total(&table, 0), f64::INFINITY);
    }

    #[test]
    fn test_smallest_positive_value_contributes() {
        let table = DenseTable::from_floats(&[vec![f64::MIN_POSITIVE, 1.0]]).unwrap();
        assert_eq!(row_total(&table, 0), f64::MIN_POSITIVE + 1.0);
    }
}
