//! Randomized checks of invariants that hold for every sample.

use std::ops::RangeInclusive;

use ndarray::{Array1, Array2, ArrayD, Axis, Ix1};
use proptest::prelude::*;

use crate::{
    Reduction, bivariate, dispersion,
    order::{self, sorted_copy},
    primitives,
};

/// Finite samples mixing a few repeated small integers (so ties and modes show
/// up) with arbitrary values.
fn sample(max_len: usize) -> impl Strategy<Value = Array1<f64>> {
    proptest::collection::vec(
        prop_oneof![(-3_i32..=3).prop_map(f64::from), -1000.0..1000.0_f64],
        1..=max_len,
    )
    .prop_map(Array1::from)
}

fn matrix(
    rows: RangeInclusive<usize>,
    cols: RangeInclusive<usize>,
) -> impl Strategy<Value = Array2<f64>> {
    (rows, cols).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(-10.0..10.0_f64, rows * cols)
            .prop_map(move |values| Array2::from_shape_vec((rows, cols), values).unwrap())
    })
}

fn scalar(result: crate::Result<Reduction>) -> f64 {
    result.unwrap().as_scalar().unwrap()
}

fn lanes(result: crate::Result<Reduction>) -> Array1<f64> {
    let array: ArrayD<f64> = result.unwrap().into_array();
    array.into_dimensionality::<Ix1>().unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_quantile_endpoints_are_extremes(x in sample(40)) {
        prop_assert_eq!(
            scalar(order::quantile(&x, 0.0, None)),
            scalar(primitives::min(&x, None))
        );
        prop_assert_eq!(
            scalar(order::quantile(&x, 1.0, None)),
            scalar(primitives::max(&x, None))
        );
    }

    #[test]
    fn test_median_is_central_value(x in sample(40)) {
        let median = scalar(order::median(&x, None));
        let sorted = sorted_copy(x.as_slice().unwrap());
        let n = sorted.len();
        if n % 2 == 1 {
            prop_assert_eq!(median, sorted[n / 2]);
            prop_assert_eq!(median, scalar(order::quantile(&x, 0.5, None)));
        } else {
            let central = (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0;
            prop_assert_eq!(median, central);
            prop_assert!(close(scalar(order::quantile(&x, 0.5, None)), central));
        }
    }

    #[test]
    fn test_quantile_is_monotonic_and_bounded(x in sample(30)) {
        let min = scalar(primitives::min(&x, None));
        let max = scalar(primitives::max(&x, None));
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=20_u32 {
            let q = f64::from(step) / 20.0;
            let value = scalar(order::quantile(&x, q, None));
            prop_assert!(value >= previous - 1e-9, "q = {q}: {value} < {previous}");
            prop_assert!(value >= min - 1e-9 && value <= max + 1e-9);
            previous = value;
        }
    }

    #[test]
    fn test_variance_is_non_negative(x in sample(40)) {
        prop_assert!(scalar(dispersion::variance(&x, 0, None)) >= 0.0);
    }

    #[test]
    fn test_self_covariance_equals_variance(x in sample(40)) {
        let variance = scalar(dispersion::variance(&x, 0, None));
        let covariance = bivariate::covariance(&x, &x, 0).unwrap();
        prop_assert!(close(covariance, variance), "{covariance} != {variance}");
    }

    #[test]
    fn test_range_is_max_minus_min(x in sample(40)) {
        let expected = scalar(primitives::max(&x, None)) - scalar(primitives::min(&x, None));
        prop_assert_eq!(scalar(order::range(&x, None)), expected);
    }

    #[test]
    fn test_correlation_bounds_and_diagonal(data in matrix(2..=25, 1..=5)) {
        let corr = bivariate::correlation_matrix(&data).unwrap();
        let cols = data.ncols();
        for i in 0..cols {
            prop_assert!(close(corr[[i, i]], 1.0));
            for j in 0..cols {
                prop_assert!(corr[[i, j]].abs() <= 1.0 + 1e-9);
                prop_assert!(close(corr[[i, j]], corr[[j, i]]));
            }
        }
    }

    #[test]
    fn test_axis_lanes_match_flattened_lanes(data in matrix(1..=10, 1..=6)) {
        for axis in [Axis(0), Axis(1)] {
            let medians = lanes(order::median(&data, Some(axis)));
            let variances = lanes(dispersion::variance(&data, 1, Some(axis)));
            let percentiles = lanes(order::percentile(&data, 37.5, Some(axis)));
            for (k, lane) in data.axis_iter(Axis(1 - axis.index())).enumerate() {
                prop_assert_eq!(medians[k], scalar(order::median(&lane, None)));
                prop_assert_eq!(
                    variances[k].to_bits(),
                    scalar(dispersion::variance(&lane, 1, None)).to_bits()
                );
                prop_assert_eq!(percentiles[k], scalar(order::percentile(&lane, 37.5, None)));
            }
        }
    }

    #[test]
    fn test_covariance_matrix_matches_pairs(data in matrix(2..=15, 1..=4)) {
        let cov = bivariate::covariance_matrix(&data, 1).unwrap();
        let cols = data.ncols();
        for i in 0..cols {
            for j in 0..cols {
                let pair = bivariate::covariance(&data.column(i), &data.column(j), 1).unwrap();
                prop_assert_eq!(cov[[i, j]], pair);
            }
        }
    }

    #[test]
    fn test_nan_anywhere_gives_nan_order_statistics(
        x in sample(20),
        at in any::<prop::sample::Index>(),
    ) {
        let mut values = x.to_vec();
        let at = at.index(values.len());
        values[at] = f64::NAN;
        let x = Array1::from(values);
        let median = scalar(order::median(&x, None));
        prop_assert!(median.is_nan());
        prop_assert!(scalar(order::quantile(&x, 0.5, None)).is_nan());
        prop_assert!(scalar(order::quantile(&x, 0.0, None)).is_nan());
        prop_assert!(scalar(primitives::min(&x, None)).is_nan());
    }
}
