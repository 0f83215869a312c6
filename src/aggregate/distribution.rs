//! Cumulative percentage distribution over a keyed series

use crate::model::{KeySeries, KeyedValues};

/// Null-skipping total of all series values
///
/// IEEE-754 outcomes propagate: a NaN entry makes the total NaN, opposing
/// infinities cancel to NaN, same-signed overflow yields an infinity.
pub fn total<S: KeyedValues + ?Sized>(series: &S) -> f64 {
    (0..series.item_count())
        .filter_map(|index| series.value_at(index))
        .sum()
}

/// Cumulative fraction of the running total at each key
///
/// Keys and their order are preserved. A null value advances neither the
/// running sum nor the total, but its key still receives the fraction
/// accumulated so far. An all-zero series divides zero by zero, so every
/// output value is NaN; NaN and infinite inputs propagate through every
/// later fraction. For a finite non-zero total the last fraction is exactly
/// `1.0`, because the running sum at the final index equals the total.
pub fn cumulative_percentages<S: KeyedValues + ?Sized>(series: &S) -> KeySeries {
    let denominator = total(series);
    let mut result = KeySeries::new();
    let mut running = 0.0;
    for index in 0..series.item_count() {
        let Some(key) = series.key_at(index) else {
            continue;
        };
        if let Some(value) = series.value_at(index) {
            running += value;
        }
        result.insert(key.clone(), running / denominator);
    }
    result
}
