//! Order statistics: median, quantiles, percentiles, quartiles, ranges and
//! the mode.
//!
//! Quantiles use linear interpolation between order statistics (the R-7
//! convention, also the default of R and NumPy). For sorted values
//! `x[0..n]` and `q` in `[0, 1]`:
//!
//! ```text
//! pos = q * (n - 1)
//! i   = floor(pos)
//! f   = pos - i
//! Q   = x[i] + f * (x[i + 1] - x[i])
//! ```
//!
//! A sample or lane containing `NaN` (of either sign) has a `NaN` median,
//! quantile, quartile and range.

use std::collections::HashMap;

use ndarray::{ArrayBase, Axis, Data, Dimension, RemoveAxis};

use crate::{
    error::{Result, StatsError, ensure_in_range},
    reduction::{Reduction, count, ensure_non_empty, flatten, map_lanes, reduce_with},
};

pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn contains_nan(values: &[f64]) -> bool {
    values.iter().any(|value| value.is_nan())
}

pub(crate) fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 || contains_nan(sorted) {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

pub(crate) fn median_of(values: &[f64]) -> f64 {
    median_sorted(&sorted_copy(values))
}

/// Linear interpolation at rank `q * (n - 1)`. The upper neighbour is only
/// read when it exists, so `q = 1` yields the last element.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interpolate(sorted: &[f64], q: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return f64::NAN;
    };
    if contains_nan(sorted) {
        return f64::NAN;
    }
    let pos = q * count(last);
    let i = (pos.floor() as usize).min(last);
    let f = pos - count(i);
    if i == last {
        sorted[i]
    } else {
        sorted[i] + f * (sorted[i + 1] - sorted[i])
    }
}

fn quartiles_sorted(sorted: &[f64]) -> (f64, f64, f64) {
    (
        interpolate(sorted, 0.25),
        interpolate(sorted, 0.50),
        interpolate(sorted, 0.75),
    )
}

/// Maximum minus minimum, tracking both extremes in a single pass.
fn range_of(values: &[f64]) -> f64 {
    let Some(&first) = values.first() else {
        return f64::NAN;
    };
    let (mut min, mut max) = (first, first);
    for &value in values {
        if value.is_nan() {
            return f64::NAN;
        }
        if value > max {
            max = value;
        }
        if value < min {
            min = value;
        }
    }
    max - min
}

/// Median: the middle sorted value, or the mean of the two middle values for
/// an even count.
///
/// # Errors
///
/// [`StatsError::EmptyInput`] if the sample has no elements.
///
/// # Examples
///
/// ```
/// use meistat::order::median;
/// use ndarray::array;
///
/// assert_eq!(median(&array![3.0, 1.0, 2.0], None).unwrap().as_scalar(), Some(2.0));
/// assert_eq!(median(&array![4.0, 1.0, 3.0, 2.0], None).unwrap().as_scalar(), Some(2.5));
/// ```
pub fn median<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_non_empty(sample)?;
    reduce_with(sample, axis, median_of)
}

/// Quantile `q` of already sorted values.
///
/// Use this to take several quantiles of the same data with one sort.
/// `sorted` must be in non-decreasing order. Any `NaN` makes the result `NaN`.
///
/// # Errors
///
/// [`StatsError::OutOfRange`] if `q` is outside `[0, 1]`,
/// [`StatsError::EmptyInput`] if `sorted` is empty.
///
/// # Examples
///
/// ```
/// use meistat::order::quantile_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&sorted, 0.25).unwrap(), 1.75);
/// assert_eq!(quantile_sorted(&sorted, 1.0).unwrap(), 4.0);
/// ```
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Result<f64> {
    ensure_in_range("q", q, 0.0, 1.0)?;
    if sorted.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    debug_assert!(
        sorted.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );
    Ok(interpolate(sorted, q))
}

/// Quantile `q` (in `[0, 1]`) by linear interpolation between order
/// statistics.
///
/// `q = 0` gives the minimum and `q = 1` the maximum.
///
/// # Errors
///
/// [`StatsError::OutOfRange`] if `q` is outside `[0, 1]`,
/// [`StatsError::EmptyInput`] if the sample has no elements.
///
/// # Examples
///
/// ```
/// use meistat::order::quantile;
/// use ndarray::array;
///
/// let x = array![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&x, 0.25, None).unwrap().as_scalar(), Some(1.75));
/// ```
pub fn quantile<S, D>(sample: &ArrayBase<S, D>, q: f64, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_in_range("q", q, 0.0, 1.0)?;
    ensure_non_empty(sample)?;
    reduce_with(sample, axis, |values| interpolate(&sorted_copy(values), q))
}

/// Percentile `p` (in `[0, 100]`); the same as `quantile(sample, p / 100)`.
///
/// # Errors
///
/// [`StatsError::OutOfRange`] if `p` is outside `[0, 100]`,
/// [`StatsError::EmptyInput`] if the sample has no elements.
pub fn percentile<S, D>(sample: &ArrayBase<S, D>, p: f64, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_in_range("p", p, 0.0, 100.0)?;
    quantile(sample, p / 100.0, axis)
}

/// First, second and third quartiles (quantiles 0.25, 0.5 and 0.75).
///
/// Each sample or lane is sorted once for all three.
///
/// # Errors
///
/// [`StatsError::EmptyInput`] if the sample has no elements.
pub fn quartiles<S, D>(
    sample: &ArrayBase<S, D>,
    axis: Option<Axis>,
) -> Result<(Reduction, Reduction, Reduction)>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_non_empty(sample)?;
    match axis {
        None => {
            let (q1, q2, q3) = quartiles_sorted(&sorted_copy(&flatten(sample)));
            Ok((q1.into(), q2.into(), q3.into()))
        }
        Some(axis) => {
            let lanes = map_lanes(sample, axis, |values| quartiles_sorted(&sorted_copy(values)))?;
            Ok((
                lanes.mapv(|(q1, _, _)| q1).into(),
                lanes.mapv(|(_, q2, _)| q2).into(),
                lanes.mapv(|(_, _, q3)| q3).into(),
            ))
        }
    }
}

/// Interquartile range, `Q3 - Q1`.
///
/// # Errors
///
/// [`StatsError::EmptyInput`] if the sample has no elements.
pub fn interquartile_range<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_non_empty(sample)?;
    reduce_with(sample, axis, |values| {
        let sorted = sorted_copy(values);
        interpolate(&sorted, 0.75) - interpolate(&sorted, 0.25)
    })
}

/// Spread between the largest and smallest value.
///
/// # Errors
///
/// [`StatsError::EmptyInput`] if the sample has no elements.
pub fn range<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_non_empty(sample)?;
    reduce_with(sample, axis, range_of)
}

/// Most frequent value of the flattened sample.
///
/// Values are counted in the order they are first seen. On a tie the value
/// seen first among the most frequent ones wins, which is not necessarily the
/// smallest. `0.0` and `-0.0` count as the same value; every `NaN` counts on
/// its own.
///
/// # Errors
///
/// [`StatsError::EmptyInput`] if the sample has no elements.
///
/// # Examples
///
/// ```
/// use meistat::order::mode;
/// use ndarray::array;
///
/// assert_eq!(mode(&array![1.0, 1.0, 2.0, 3.0, 3.0, 3.0]).unwrap(), 3.0);
/// assert_eq!(mode(&array![2.0, 1.0, 1.0, 2.0]).unwrap(), 2.0);
/// ```
pub fn mode<S, D>(sample: &ArrayBase<S, D>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    ensure_non_empty(sample)?;

    let mut table: Vec<(f64, usize)> = Vec::new();
    let mut index = HashMap::<u64, usize>::new();
    for &value in sample {
        if value.is_nan() {
            table.push((value, 1));
            continue;
        }
        // -0.0 == 0.0, so both share one entry
        let key = if value == 0.0 { 0 } else { value.to_bits() };
        match index.get(&key) {
            Some(&slot) => table[slot].1 += 1,
            None => {
                index.insert(key, table.len());
                table.push((value, 1));
            }
        }
    }

    let mut mode = f64::NAN;
    let mut max_count = 0;
    for &(value, count) in &table {
        if count > max_count {
            max_count = count;
            mode = value;
        }
    }
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Ix1, array};

    use super::*;

    fn scalar(result: Result<Reduction>) -> f64 {
        result.unwrap().as_scalar().unwrap()
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(scalar(median(&array![5.0, 1.0, 3.0], None)), 3.0);
        assert_eq!(scalar(median(&array![1.0, 2.0, 3.0, 4.0], None)), 2.5);
        assert_eq!(scalar(median(&array![7.0], None)), 7.0);
    }

    #[test]
    fn test_median_even_averages_central_values() {
        // (3 + 10) / 2, not 3 + 10 / 2
        assert_eq!(scalar(median(&array![10.0, 1.0, 3.0, 20.0], None)), 6.5);
    }

    #[test]
    fn test_median_along_axis() {
        let x = array![[1.0, 9.0], [3.0, 2.0], [2.0, 4.0], [8.0, 5.0]];
        assert_eq!(
            median(&x, Some(Axis(0))).unwrap().into_array(),
            array![2.5, 4.5].into_dyn()
        );
        assert_eq!(
            median(&x, Some(Axis(1))).unwrap().into_array(),
            array![5.0, 2.5, 3.0, 6.5].into_dyn()
        );
    }

    #[test]
    fn test_quantile_interpolation() {
        let x = array![1.0, 2.0, 3.0, 4.0];
        assert_eq!(scalar(quantile(&x, 0.25, None)), 1.75);
        assert_eq!(scalar(quantile(&x, 0.5, None)), 2.5);
        assert_eq!(scalar(quantile(&x, 0.75, None)), 3.25);
    }

    #[test]
    fn test_quantile_endpoints() {
        let x = array![4.0, -2.0, 9.5, 0.0, 3.0];
        assert_eq!(scalar(quantile(&x, 0.0, None)), -2.0);
        assert_eq!(scalar(quantile(&x, 1.0, None)), 9.5);
    }

    #[test]
    fn test_quantile_unsorted_input() {
        let x = array![10.0, 0.0, 5.0];
        assert_eq!(scalar(quantile(&x, 0.25, None)), 2.5);
    }

    #[test]
    fn test_quantile_single_value() {
        let x = array![42.0];
        assert_eq!(scalar(quantile(&x, 0.0, None)), 42.0);
        assert_eq!(scalar(quantile(&x, 0.3, None)), 42.0);
        assert_eq!(scalar(quantile(&x, 1.0, None)), 42.0);
    }

    #[test]
    fn test_quantile_errors() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(quantile(&empty, 0.5, None), Err(StatsError::EmptyInput));
        assert!(matches!(
            quantile(&array![1.0], 1.5, None),
            Err(StatsError::OutOfRange { name: "q", .. })
        ));
        assert_eq!(quantile_sorted(&[], 0.5), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_percentile_matches_quantile() {
        let x = array![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        for p in [0.0, 10.0, 25.0, 50.0, 90.0, 100.0] {
            assert_eq!(
                scalar(percentile(&x, p, None)),
                scalar(quantile(&x, p / 100.0, None))
            );
        }
    }

    #[test]
    fn test_percentile_out_of_range() {
        let x = array![1.0, 2.0];
        for p in [-1.0, 100.1, f64::NAN] {
            assert!(matches!(
                percentile(&x, p, None),
                Err(StatsError::OutOfRange { name: "p", .. })
            ));
        }
    }

    #[test]
    fn test_percentile_along_axis() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        assert_eq!(
            percentile(&x, 25.0, Some(Axis(0))).unwrap().into_array(),
            array![1.75, 17.5].into_dyn()
        );
    }

    #[test]
    fn test_quartiles_and_iqr() {
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let (q1, q2, q3) = quartiles(&x, None).unwrap();
        assert_eq!(q1.as_scalar(), Some(3.0));
        assert_eq!(q2.as_scalar(), Some(5.0));
        assert_eq!(q3.as_scalar(), Some(7.0));
        assert_eq!(scalar(interquartile_range(&x, None)), 4.0);
    }

    #[test]
    fn test_quartiles_along_axis() {
        let x = array![[1.0, 2.0, 3.0, 4.0], [10.0, 20.0, 30.0, 40.0]];
        let (q1, q2, q3) = quartiles(&x, Some(Axis(1))).unwrap();
        assert_eq!(q1.into_array(), array![1.75, 17.5].into_dyn());
        assert_eq!(q2.into_array(), array![2.5, 25.0].into_dyn());
        assert_eq!(q3.into_array(), array![3.25, 32.5].into_dyn());
        assert_eq!(
            interquartile_range(&x, Some(Axis(1))).unwrap().into_array(),
            array![1.5, 15.0].into_dyn()
        );
    }

    #[test]
    fn test_range() {
        assert_eq!(scalar(range(&array![3.0, -1.0, 7.0, 2.0], None)), 8.0);
        assert_eq!(scalar(range(&array![5.0], None)), 0.0);
        let x = array![[1.0, 4.0], [3.0, 0.0]];
        assert_eq!(
            range(&x, Some(Axis(0))).unwrap().into_array(),
            array![2.0, 4.0].into_dyn()
        );
        assert_eq!(
            range(&Array1::<f64>::zeros(0), None),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn test_nan_propagates_through_order_statistics() {
        let x = array![1.0, f64::NAN, 3.0];
        assert!(scalar(median(&x, None)).is_nan());
        assert!(scalar(quantile(&x, 0.5, None)).is_nan());
        assert!(scalar(quantile(&x, 0.0, None)).is_nan());
        assert!(scalar(interquartile_range(&x, None)).is_nan());
        assert!(scalar(range(&x, None)).is_nan());
        let (q1, q2, q3) = quartiles(&x, None).unwrap();
        assert!(q1.as_scalar().unwrap().is_nan());
        assert!(q2.as_scalar().unwrap().is_nan());
        assert!(q3.as_scalar().unwrap().is_nan());
        assert!(quantile_sorted(&[1.0, 2.0, f64::NAN], 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_negative_nan_does_not_become_minimum() {
        let x = array![1.0, -f64::NAN, 2.0];
        assert!(scalar(quantile(&x, 0.0, None)).is_nan());
        assert!(scalar(quantile(&x, 1.0, None)).is_nan());
        assert!(scalar(median(&x, None)).is_nan());
        let x = array![f64::NAN, 1.0, 2.0];
        assert!(scalar(quantile(&x, 0.0, None)).is_nan());
        assert!(scalar(range(&x, None)).is_nan());
    }

    #[test]
    fn test_nan_only_affects_its_own_lane() {
        let x = array![[1.0, 4.0], [f64::NAN, 6.0], [3.0, 5.0]];
        let lane_values = |result: Result<Reduction>| {
            result.unwrap().into_array().into_dimensionality::<Ix1>().unwrap()
        };
        let medians = lane_values(median(&x, Some(Axis(0))));
        assert!(medians[0].is_nan());
        assert_eq!(medians[1], 5.0);
        let p = lane_values(percentile(&x, 50.0, Some(Axis(0))));
        assert!(p[0].is_nan());
        assert_eq!(p[1], 5.0);
        let column = x.column(0);
        assert!(scalar(median(&column, None)).is_nan());
        assert!(scalar(quantile(&column, 0.5, None)).is_nan());
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode(&array![1.0, 1.0, 2.0, 3.0, 3.0, 3.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        // 5 is seen before 1, both appear twice
        assert_eq!(mode(&array![5.0, 1.0, 1.0, 5.0, 2.0]).unwrap(), 5.0);
        // all unique: the first value
        assert_eq!(mode(&array![9.0, 8.0, 7.0]).unwrap(), 9.0);
    }

    #[test]
    fn test_mode_flattens_matrix() {
        let x = array![[4.0, 2.0], [2.0, 4.0], [4.0, 1.0]];
        assert_eq!(mode(&x).unwrap(), 4.0);
    }

    #[test]
    fn test_mode_signed_zero_and_nan() {
        assert_eq!(mode(&array![-0.0, 1.0, 0.0, 1.0, 0.0]).unwrap(), 0.0);
        let x = array![f64::NAN, f64::NAN, 2.0];
        assert!(mode(&x).unwrap().is_nan());
        let x = array![f64::NAN, f64::NAN, 2.0, 2.0];
        assert_eq!(mode(&x).unwrap(), 2.0);
    }

    #[test]
    fn test_mode_of_empty_fails() {
        assert_eq!(mode(&Array1::<f64>::zeros(0)), Err(StatsError::EmptyInput));
    }
}
