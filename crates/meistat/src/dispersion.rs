//! Dispersion: variance, standard deviation, coefficient of variation,
//! standard error of the mean and median absolute deviation.
//!
//! `ddof` (delta degrees of freedom) is subtracted from the count in the
//! variance denominator: `0` gives population statistics, `1` applies
//! Bessel's correction. The mean itself is never adjusted. A `ddof` equal to
//! or larger than the count is accepted and yields an infinite, negative or
//! `NaN` result rather than an error.

use ndarray::{ArrayBase, Axis, Data, Dimension, RemoveAxis};

use crate::{
    error::Result,
    order::median_of,
    primitives::mean_of,
    reduction::{Reduction, count, ensure_non_empty, reduce_with},
};

/// Mean of squared deviations from the mean, scaled by `n / (n - ddof)`.
pub(crate) fn variance_of(values: &[f64], ddof: usize) -> f64 {
    let mean = mean_of(values);
    let squared = values
        .iter()
        .map(|&value| {
            let centered = value - mean;
            centered * centered
        })
        .fold(0.0, |total, value| total + value);
    let n = count(values.len());
    let population = squared / n;
    population * n / (n - count(ddof))
}

pub(crate) fn std_dev_of(values: &[f64], ddof: usize) -> f64 {
    variance_of(values, ddof).sqrt()
}

pub(crate) fn coefficient_of_variation_of(values: &[f64]) -> f64 {
    (std_dev_of(values, 1) / mean_of(values)).abs() * 100.0
}

pub(crate) fn standard_error_of(values: &[f64], ddof: usize) -> f64 {
    std_dev_of(values, ddof) / count(values.len()).sqrt()
}

pub(crate) fn median_absolute_deviation_of(values: &[f64]) -> f64 {
    let median = median_of(values);
    let deviations = values
        .iter()
        .map(|&value| (value - median).abs())
        .collect::<Vec<_>>();
    median_of(&deviations)
}

/// Variance with `ddof` delta degrees of freedom.
///
/// # Examples
///
/// ```
/// use meistat::dispersion::variance;
/// use ndarray::array;
///
/// let x = array![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(variance(&x, 0, None).unwrap().as_scalar(), Some(1.25));
/// let sample = variance(&x, 1, None).unwrap().as_scalar().unwrap();
/// assert!((sample - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn variance<S, D>(sample: &ArrayBase<S, D>, ddof: usize, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    reduce_with(sample, axis, |values| variance_of(values, ddof))
}

/// Standard deviation, the square root of [`variance`].
pub fn std_dev<S, D>(sample: &ArrayBase<S, D>, ddof: usize, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    reduce_with(sample, axis, |values| std_dev_of(values, ddof))
}

/// Coefficient of variation in percent: `|std_dev(ddof = 1) / mean| * 100`.
///
/// A zero mean gives an infinite or `NaN` result.
///
/// # Examples
///
/// ```
/// use meistat::dispersion::coefficient_of_variation;
/// use ndarray::array;
///
/// let cv = coefficient_of_variation(&array![2.0, 4.0, 6.0], None).unwrap();
/// assert_eq!(cv.as_scalar(), Some(50.0));
/// ```
pub fn coefficient_of_variation<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    reduce_with(sample, axis, coefficient_of_variation_of)
}

/// Standard error of the mean: `std_dev(ddof) / sqrt(n)`.
pub fn standard_error_of_mean<S, D>(
    sample: &ArrayBase<S, D>,
    ddof: usize,
    axis: Option<Axis>,
) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    reduce_with(sample, axis, |values| standard_error_of(values, ddof))
}

/// Median absolute deviation: the median of `|x - median(x)|`.
///
/// Deviations are taken from the median, not the mean.
///
/// # Errors
///
/// [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) if the sample
/// has no elements.
///
/// # Examples
///
/// ```
/// use meistat::dispersion::median_absolute_deviation;
/// use ndarray::array;
///
/// let x = array![1.0, 1.0, 2.0, 2.0, 4.0, 6.0, 9.0];
/// assert_eq!(median_absolute_deviation(&x, None).unwrap().as_scalar(), Some(1.0));
/// ```
pub fn median_absolute_deviation<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_non_empty(sample)?;
    reduce_with(sample, axis, median_absolute_deviation_of)
}
