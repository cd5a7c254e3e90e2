//! Every flattened statistic of a sample gathered in one record.

use ndarray::{ArrayBase, ArrayView1, Data, Dimension};
use serde::Serialize;

use crate::{
    dispersion::{
        coefficient_of_variation_of, median_absolute_deviation_of, standard_error_of,
        variance_of,
    },
    error::{Result, StatsError},
    order::{self, median_sorted, sorted_copy},
    primitives::{max_of, mean_of, min_of, sum_of},
    reduction::flatten,
};

/// Descriptive statistics summarizing a flattened sample.
///
/// Every field matches the corresponding free function called with
/// `axis = None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveSummary {
    /// Number of values.
    pub count: usize,
    /// Sum of the values.
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median value.
    pub median: f64,
    /// Most frequent value (first seen wins on ties).
    pub mode: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Delta degrees of freedom used for `variance`, `std_dev` and
    /// `standard_error`.
    pub ddof: usize,
    /// Variance with `ddof` delta degrees of freedom.
    pub variance: f64,
    /// Standard deviation with `ddof` delta degrees of freedom.
    pub std_dev: f64,
    /// Coefficient of variation in percent (always uses `ddof = 1`).
    pub coefficient_of_variation: f64,
    /// Standard error of the mean.
    pub standard_error: f64,
    /// Median absolute deviation from the median.
    pub median_absolute_deviation: f64,
    /// First quartile.
    pub q1: f64,
    /// Third quartile.
    pub q3: f64,
    /// `q3 - q1`.
    pub interquartile_range: f64,
}

impl DescriptiveSummary {
    /// Summarizes all elements of `sample`.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyInput`] if the sample has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use meistat::DescriptiveSummary;
    /// use ndarray::array;
    ///
    /// let summary = DescriptiveSummary::new(&array![1.0, 2.0, 3.0, 4.0], 0).unwrap();
    /// assert_eq!(summary.mean, 2.5);
    /// assert_eq!(summary.median, 2.5);
    /// assert_eq!(summary.variance, 1.25);
    /// assert_eq!(summary.q1, 1.75);
    /// ```
    pub fn new<S, D>(sample: &ArrayBase<S, D>, ddof: usize) -> Result<Self>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        Self::from_values(&flatten(sample), ddof)
    }

    /// Summarizes a slice of values.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyInput`] if `values` is empty.
    pub fn from_values(values: &[f64], ddof: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        let sorted = sorted_copy(values);
        let q1 = order::quantile_sorted(&sorted, 0.25)?;
        let q3 = order::quantile_sorted(&sorted, 0.75)?;
        let (min, max) = (min_of(values), max_of(values));
        let variance = variance_of(values, ddof);

        Ok(Self {
            count: values.len(),
            sum: sum_of(values),
            mean: mean_of(values),
            median: median_sorted(&sorted),
            mode: order::mode(&ArrayView1::from(values))?,
            min,
            max,
            range: max - min,
            ddof,
            variance,
            std_dev: variance.sqrt(),
            coefficient_of_variation: coefficient_of_variation_of(values),
            standard_error: standard_error_of(values, ddof),
            median_absolute_deviation: median_absolute_deviation_of(values),
            q1,
            q3,
            interquartile_range: q3 - q1,
        })
    }
}
