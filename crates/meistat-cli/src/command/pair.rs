//! Covariance and correlation of two samples

use std::io::Write as _;

use anyhow::Context;
use clap::Args;
use meistat::bivariate;
use ndarray::ArrayView1;
use serde::Serialize;

use crate::util::{OutputArg, Row};

#[derive(Debug, Clone, Args)]
pub(crate) struct PairArg {
    /// First sample, comma-separated
    #[arg(long, allow_hyphen_values = true)]
    pub x: Row,

    /// Second sample, comma-separated
    #[arg(long, allow_hyphen_values = true)]
    pub y: Row,

    /// Delta degrees of freedom for the covariance
    #[arg(long, default_value_t = 0)]
    pub ddof: usize,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Serialize)]
struct PairReport {
    n: usize,
    covariance: f64,
    pearson_correlation: f64,
}

pub(crate) fn run(arg: &PairArg) -> anyhow::Result<()> {
    let x = ArrayView1::from(arg.x.0.as_slice());
    let y = ArrayView1::from(arg.y.0.as_slice());
    let covariance =
        bivariate::covariance(&x, &y, arg.ddof).context("Failed to compute covariance")?;
    let pearson_correlation =
        bivariate::pearson_correlation(&x, &y).context("Failed to compute correlation")?;
    let report = PairReport {
        n: x.len(),
        covariance,
        pearson_correlation,
    };
    arg.output.emit(&report, |out| {
        writeln!(out, "n            {}", report.n)?;
        writeln!(out, "covariance   {} (ddof={})", report.covariance, arg.ddof)?;
        writeln!(out, "pearson_r    {}", report.pearson_correlation)
    })
}
