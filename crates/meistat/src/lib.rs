//! Descriptive and bivariate statistics over `ndarray` samples and matrices.
//!
//! This crate provides:
//!
//! - **Reductions**: sum, mean, minimum and maximum
//! - **Dispersion**: variance and standard deviation with a `ddof` bias
//!   correction, coefficient of variation, standard error of the mean and
//!   median absolute deviation
//! - **Order statistics**: median, linearly interpolated quantiles and
//!   percentiles, quartiles, interquartile range, range and mode
//! - **Bivariate statistics**: covariance and Pearson correlation of two
//!   samples, and covariance/correlation matrices of a data matrix
//!
//! Most functions take an axis selector. `None` flattens the sample and yields
//! a [`Reduction::Scalar`]; `Some(axis)` computes the statistic of every lane
//! along `axis` and yields a [`Reduction::Array`] with that axis removed. A
//! lane statistic is identical to the flattened statistic of the same values.
//!
//! Division by a zero denominator is not an error: following IEEE-754 the
//! result is `NaN` or infinite. Errors ([`StatsError`]) are reserved for empty
//! input, mismatched shapes and out-of-range parameters.
//!
//! # Modules
//!
//! - [`primitives`]: sum, mean, min, max
//! - [`dispersion`]: variance family and median absolute deviation
//! - [`order`]: sorting-based statistics and the mode
//! - [`bivariate`]: covariance and correlation
//! - [`summary`]: all flattened statistics of a sample in one record
//!
//! # Examples
//!
//! ## Flattened statistics
//!
//! ```
//! use meistat::{dispersion, order, primitives};
//! use ndarray::array;
//!
//! let x = array![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(primitives::mean(&x, None).unwrap().as_scalar(), Some(2.5));
//! assert_eq!(dispersion::variance(&x, 0, None).unwrap().as_scalar(), Some(1.25));
//! assert_eq!(order::quantile(&x, 0.25, None).unwrap().as_scalar(), Some(1.75));
//! ```
//!
//! ## Reducing along an axis
//!
//! ```
//! use meistat::order;
//! use ndarray::{Axis, array};
//!
//! let x = array![[1.0, 10.0], [2.0, 30.0], [4.0, 20.0]];
//! let medians = order::median(&x, Some(Axis(0))).unwrap();
//! assert_eq!(medians.into_array(), array![2.0, 20.0].into_dyn());
//! ```
//!
//! ## Correlation matrix
//!
//! ```
//! use meistat::bivariate::correlation_matrix;
//! use ndarray::array;
//!
//! let data = array![[1.0, 2.0], [2.0, 4.1], [3.0, 5.9]];
//! let corr = correlation_matrix(&data).unwrap();
//! assert!((corr[[0, 0]] - 1.0).abs() < 1e-12);
//! assert!(corr[[0, 1]] > 0.99);
//! ```

pub mod bivariate;
pub mod dispersion;
pub mod error;
pub mod order;
pub mod primitives;
pub mod reduction;
pub mod summary;

#[cfg(test)]
mod properties;

pub use self::{
    error::{Result, StatsError},
    reduction::Reduction,
    summary::DescriptiveSummary,
};
