//! Covariance and Pearson correlation, for a pair of samples and as
//! matrices over the columns of an `n x p` data matrix.
//!
//! Matrix entries are computed independently for every `(i, j)` pair, so the
//! results are symmetric only up to floating-point rounding.

use std::borrow::Cow;

use ndarray::{Array2, ArrayBase, ArrayView2, Data, Dimension, Ix2};

use crate::{
    dispersion::variance_of,
    error::{Result, StatsError},
    primitives::mean_of,
    reduction::{count, flatten},
};

/// `sum((x - mean(x)) * (y - mean(y))) / (n - ddof)` for equal-length slices.
fn covariance_of(x: &[f64], y: &[f64], ddof: usize) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let mean_x = mean_of(x);
    let mean_y = mean_of(y);
    let products = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .fold(0.0, |total, value| total + value);
    products / (count(x.len()) - count(ddof))
}

fn pearson_of(x: &[f64], y: &[f64]) -> f64 {
    let denominator = variance_of(x, 0).sqrt() * variance_of(y, 0).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    covariance_of(x, y, 0) / denominator
}

fn paired<'a, S1, D1, S2, D2>(
    x: &'a ArrayBase<S1, D1>,
    y: &'a ArrayBase<S2, D2>,
) -> Result<(Cow<'a, [f64]>, Cow<'a, [f64]>)>
where
    S1: Data<Elem = f64>,
    D1: Dimension,
    S2: Data<Elem = f64>,
    D2: Dimension,
{
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok((flatten(x), flatten(y)))
}

/// Views a data matrix as 2-D, rejecting any other dimensionality.
fn as_matrix<S, D>(data: &ArrayBase<S, D>) -> Result<ArrayView2<'_, f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = data.ndim();
    data.view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| StatsError::NotTwoDimensional { ndim })
}

fn column_vectors(matrix: ArrayView2<'_, f64>) -> Vec<Vec<f64>> {
    matrix.columns().into_iter().map(|column| column.to_vec()).collect()
}

/// Covariance of two samples of the same length, with `ddof` delta degrees
/// of freedom. Both samples are flattened first.
///
/// # Errors
///
/// [`StatsError::LengthMismatch`] if the samples differ in length.
///
/// # Examples
///
/// ```
/// use meistat::bivariate::covariance;
/// use ndarray::array;
///
/// let x = array![1.0, 2.0, 3.0, 4.0];
/// let y = array![2.0, 4.0, 6.0, 8.0];
/// assert_eq!(covariance(&x, &y, 0).unwrap(), 2.5);
/// ```
pub fn covariance<S1, D1, S2, D2>(
    x: &ArrayBase<S1, D1>,
    y: &ArrayBase<S2, D2>,
    ddof: usize,
) -> Result<f64>
where
    S1: Data<Elem = f64>,
    D1: Dimension,
    S2: Data<Elem = f64>,
    D2: Dimension,
{
    let (x, y) = paired(x, y)?;
    Ok(covariance_of(&x, &y, ddof))
}

/// Pearson correlation coefficient of two samples of the same length.
///
/// Returns `NaN` when either sample has zero variance.
///
/// # Errors
///
/// [`StatsError::LengthMismatch`] if the samples differ in length.
///
/// # Examples
///
/// ```
/// use meistat::bivariate::pearson_correlation;
/// use ndarray::array;
///
/// let r = pearson_correlation(&array![1.0, 2.0, 3.0], &array![3.0, 2.0, 1.0]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
///
/// let r = pearson_correlation(&array![5.0, 5.0, 5.0], &array![1.0, 2.0, 3.0]).unwrap();
/// assert!(r.is_nan());
/// ```
pub fn pearson_correlation<S1, D1, S2, D2>(x: &ArrayBase<S1, D1>, y: &ArrayBase<S2, D2>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    D1: Dimension,
    S2: Data<Elem = f64>,
    D2: Dimension,
{
    let (x, y) = paired(x, y)?;
    Ok(pearson_of(&x, &y))
}

/// `p x p` covariance matrix of an `n x p` matrix whose columns are the
/// variables.
///
/// # Errors
///
/// [`StatsError::NotTwoDimensional`] if `data` is not 2-dimensional.
///
/// # Examples
///
/// ```
/// use meistat::bivariate::covariance_matrix;
/// use ndarray::array;
///
/// let data = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
/// let cov = covariance_matrix(&data, 1).unwrap();
/// assert_eq!(cov, array![[1.0, 2.0], [2.0, 4.0]]);
/// ```
pub fn covariance_matrix<S, D>(data: &ArrayBase<S, D>, ddof: usize) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let columns = column_vectors(as_matrix(data)?);
    let p = columns.len();
    Ok(Array2::from_shape_fn((p, p), |(i, j)| {
        covariance_of(&columns[i], &columns[j], ddof)
    }))
}

/// `p x p` Pearson correlation matrix of an `n x p` matrix.
///
/// The diagonal is `1.0` for every column with nonzero variance; a column
/// with zero variance has `NaN` in its whole row and column.
///
/// # Errors
///
/// [`StatsError::NotTwoDimensional`] if `data` is not 2-dimensional.
pub fn correlation_matrix<S, D>(data: &ArrayBase<S, D>) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let columns = column_vectors(as_matrix(data)?);
    let p = columns.len();
    Ok(Array2::from_shape_fn((p, p), |(i, j)| {
        pearson_of(&columns[i], &columns[j])
    }))
}
