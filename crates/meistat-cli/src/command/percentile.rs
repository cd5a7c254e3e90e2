//! Single percentile of one sample

use std::io::Write as _;

use anyhow::Context;
use clap::Args;
use meistat::order;
use ndarray::ArrayView1;
use serde::Serialize;

use crate::util::OutputArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct PercentileArg {
    /// Percentile to compute, between 0 and 100
    #[arg(long, short, allow_negative_numbers = true)]
    pub percentile: f64,

    /// Sample values
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Serialize)]
struct PercentileReport {
    percentile: f64,
    value: f64,
}

pub(crate) fn run(arg: &PercentileArg) -> anyhow::Result<()> {
    let sample = ArrayView1::from(arg.values.as_slice());
    let value = order::percentile(&sample, arg.percentile, None)
        .with_context(|| format!("Failed to compute percentile {}", arg.percentile))?
        .as_scalar()
        .context("Percentile of a flattened sample must be a scalar")?;
    let report = PercentileReport {
        percentile: arg.percentile,
        value,
    };
    arg.output.emit(&report, |out| {
        writeln!(out, "P{}: {}", report.percentile, report.value)
    })
}
