//! Result type of axis-aware statistics and the machinery that applies a
//! per-sample kernel either to a whole array or to each lane along an axis.

use std::borrow::Cow;

use ndarray::{ArrayBase, ArrayD, Axis, Data, Dimension, RemoveAxis};

use crate::error::{Result, StatsError};

/// The outcome of a statistic computed with an axis selector.
///
/// A flattened computation (`axis = None`) yields [`Reduction::Scalar`];
/// reducing along an axis yields [`Reduction::Array`] whose shape is the input
/// shape with that axis removed.
///
/// # Examples
///
/// ```
/// use meistat::{Reduction, primitives::mean};
/// use ndarray::{Axis, array};
///
/// let x = array![[1.0, 2.0], [3.0, 4.0]];
/// assert_eq!(mean(&x, None).unwrap(), Reduction::Scalar(2.5));
///
/// let per_column = mean(&x, Some(Axis(0))).unwrap();
/// assert_eq!(per_column.into_array(), array![2.0, 3.0].into_dyn());
/// ```
#[derive(Debug, Clone, PartialEq, derive_more::From, derive_more::IsVariant)]
pub enum Reduction {
    /// Statistic over the flattened sample.
    Scalar(f64),
    /// Statistic of every lane along the reduced axis.
    Array(ArrayD<f64>),
}

impl Reduction {
    /// Returns the scalar value, or `None` for an axis reduction.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(_) => None,
        }
    }

    /// Returns the reduced array, or `None` for a flattened result.
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(array) => Some(array),
        }
    }

    /// Converts into an array; a scalar becomes a 0-dimensional array.
    #[must_use]
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Self::Scalar(value) => ndarray::arr0(value).into_dyn(),
            Self::Array(array) => array,
        }
    }
}

/// Number of observations as a float divisor.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn count(len: usize) -> f64 {
    len as f64
}

/// Elements of `sample` in logical (row-major) order, borrowed when the
/// memory layout already is.
pub(crate) fn flatten<S, D>(sample: &ArrayBase<S, D>) -> Cow<'_, [f64]>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    match sample.as_slice() {
        Some(values) => Cow::Borrowed(values),
        None => Cow::Owned(sample.iter().copied().collect()),
    }
}

pub(crate) fn ensure_non_empty<S, D>(sample: &ArrayBase<S, D>) -> Result<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if sample.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(())
}

pub(crate) fn ensure_axis(ndim: usize, axis: Axis) -> Result<()> {
    if axis.index() >= ndim {
        return Err(StatsError::AxisOutOfBounds {
            axis: axis.index(),
            ndim,
        });
    }
    Ok(())
}

/// Applies `kernel` to every lane along `axis`, collecting the results in an
/// array with `axis` removed.
pub(crate) fn map_lanes<S, D, B, F>(
    sample: &ArrayBase<S, D>,
    axis: Axis,
    kernel: F,
) -> Result<ArrayD<B>>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
    F: Fn(&[f64]) -> B,
{
    ensure_axis(sample.ndim(), axis)?;
    let reduced = sample.map_axis(axis, |lane| kernel(&*flatten(&lane)));
    Ok(reduced.into_dyn())
}

/// Applies `kernel` to the flattened sample, or to each lane along `axis`.
///
/// Both paths feed the kernel the same values in the same order, so a lane
/// statistic is bit-identical to the flattened statistic of that lane.
pub(crate) fn reduce_with<S, D, F>(
    sample: &ArrayBase<S, D>,
    axis: Option<Axis>,
    kernel: F,
) -> Result<Reduction>
where
    S: Data<Elem = f64>,
    D: Dimension + RemoveAxis,
    F: Fn(&[f64]) -> f64,
{
    match axis {
        None => Ok(Reduction::Scalar(kernel(&*flatten(sample)))),
        Some(axis) => map_lanes(sample, axis, kernel).map(Reduction::Array),
    }
}
