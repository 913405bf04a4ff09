/// Percentile helpers for already-sorted slices.
///
/// The rule is linear interpolation between order statistics: the target
/// position is `(percentile / 100) * (len - 1)` and the result interpolates
/// between the two flanking values. The result depends only on the multiset
/// of values and the percentile, so repeated lookups over one sorted snapshot
/// are monotone in the percentile.
///
/// - Empty input => `None` (or `0.0` for the f32 convenience wrapper).
/// - `percentile <= 0` => first element.
/// - `percentile >= 100` => last element.

/// Returns the percentile value from a slice that is already sorted in
/// ascending order.
pub fn value_sorted(sorted_values: &[f32], percentile: f64) -> Option<f32> {
    if sorted_values.is_empty() {
        return None;
    }

    let last = sorted_values.len() - 1;
    let clamped = percentile.clamp(0.0, 100.0);
    let position = (clamped / 100.0) * last as f64;
    let lower_index = position.floor() as usize;
    let upper_index = position.ceil() as usize;

    let lower_value = *sorted_values.get(lower_index)?;
    let upper_value = *sorted_values.get(upper_index)?;
    if lower_index == upper_index {
        return Some(lower_value);
    }

    let fraction = (position - lower_index as f64) as f32;
    Some(lower_value + (upper_value - lower_value) * fraction)
}

/// Convenience wrapper for callers that treat an empty slice as `0.0`.
pub fn value_f32_sorted(sorted_values: &[f32], percentile: f64) -> f32 {
    value_sorted(sorted_values, percentile).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_sorted_returns_none_for_empty_input() {
        let values: [f32; 0] = [];
        assert_eq!(value_sorted(&values, 50.0), None);
    }

    #[test]
    fn value_sorted_clamps_to_first_and_last() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(value_sorted(&values, -1.0), Some(10.0));
        assert_eq!(value_sorted(&values, 0.0), Some(10.0));
        assert_eq!(value_sorted(&values, 100.0), Some(30.0));
        assert_eq!(value_sorted(&values, 1000.0), Some(30.0));
    }

    #[test]
    fn value_sorted_interpolates_between_order_statistics() {
        // len=5 => positions 0..=4
        // p25 => position=1.0 => exactly the second value
        // p50 => position=2.0 => exactly the third value
        // p90 => position=3.6 => between the fourth and fifth value
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(value_sorted(&values, 25.0), Some(1.0));
        assert_eq!(value_sorted(&values, 50.0), Some(2.0));
        assert!((value_sorted(&values, 90.0).unwrap() - 3.6).abs() < 1e-6);
    }

    #[test]
    fn value_sorted_returns_the_value_of_a_single_element_for_every_percentile() {
        let values = [7.5];
        for percentile in [1.0, 25.0, 50.0, 85.0, 100.0] {
            assert_eq!(value_sorted(&values, percentile), Some(7.5));
        }
    }

    #[test]
    fn value_sorted_is_monotone_in_the_percentile() {
        let values = [1.0, 2.0, 2.0, 5.0, 9.0, 12.0, 40.0];
        let mut previous = f32::NEG_INFINITY;
        for step in 1..=100 {
            let value = value_sorted(&values, step as f64).unwrap();
            assert!(value >= previous, "p{step} = {value} < {previous}");
            previous = value;
        }
    }

    #[test]
    fn value_f32_sorted_returns_zero_for_empty_input() {
        let values: [f32; 0] = [];
        assert_eq!(value_f32_sorted(&values, 50.0), 0.0);
    }
}
