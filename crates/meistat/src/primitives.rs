//! Elementary reductions: sum, mean, minimum and maximum.
//!
//! Each function works on the flattened sample (`axis = None`) or along one
//! axis. [`sum`], [`min`] and [`max`] reject an input with no elements;
//! [`mean`] of an empty sample is `NaN`.

use ndarray::{ArrayBase, Axis, Data, Dimension, RemoveAxis};

use crate::{
    error::Result,
    reduction::{Reduction, count, ensure_non_empty, reduce_with},
};

pub(crate) fn sum_of(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |total, &value| total + value)
}

pub(crate) fn mean_of(values: &[f64]) -> f64 {
    sum_of(values) / count(values.len())
}

/// Smallest value; the first element is kept unless a later one compares
/// strictly smaller. A `NaN` anywhere wins.
pub(crate) fn min_of(values: &[f64]) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return f64::NAN;
    };
    rest.iter().fold(first, |min, &value| {
        if value < min || value.is_nan() { value } else { min }
    })
}

pub(crate) fn max_of(values: &[f64]) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return f64::NAN;
    };
    rest.iter().fold(first, |max, &value| {
        if value > max || value.is_nan() { value } else { max }
    })
}

/// Sum of all values, or of each lane along `axis`.
///
/// # Errors
///
/// [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) if the sample
/// has no elements.
///
/// # Examples
///
/// ```
/// use meistat::primitives::sum;
/// use ndarray::array;
///
/// let x = array![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(sum(&x, None).unwrap().as_scalar(), Some(10.0));
/// ```
pub fn sum<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_non_empty(sample)?;
    reduce_with(sample, axis, sum_of)
}

/// Arithmetic mean: the sum divided by the number of values in the sample
/// (or in each lane along `axis`).
///
/// An empty sample gives `NaN` rather than an error.
///
/// # Examples
///
/// ```
/// use meistat::primitives::mean;
/// use ndarray::array;
///
/// let x = array![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(mean(&x, None).unwrap().as_scalar(), Some(2.5));
/// ```
pub fn mean<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    reduce_with(sample, axis, mean_of)
}

/// Minimum value.
///
/// # Errors
///
/// [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) if the sample
/// has no elements.
pub fn min<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_non_empty(sample)?;
    reduce_with(sample, axis, min_of)
}

/// Maximum value.
///
/// # Errors
///
/// [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) if the sample
/// has no elements.
pub fn max<S, D>(sample: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
{
    ensure_non_empty(sample)?;
    reduce_with(sample, axis, max_of)
}
