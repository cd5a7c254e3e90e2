//! Descriptive summary of one sample

use std::io::{self, Write as _};

use anyhow::Context;
use clap::Args;
use meistat::DescriptiveSummary;

use crate::util::{Output, OutputArg};

#[derive(Debug, Clone, Args)]
pub(crate) struct DescribeArg {
    /// Sample values
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Delta degrees of freedom for variance, standard deviation and standard error
    #[arg(long, default_value_t = 0)]
    pub ddof: usize,

    #[clap(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    arg.output
        .progress(format_args!("Summarizing {} values...", arg.values.len()));
    let summary = DescriptiveSummary::from_values(&arg.values, arg.ddof)
        .context("Failed to summarize values")?;
    arg.output.emit(&summary, |out| write_summary(out, &summary))
}

fn write_summary(out: &mut Output, summary: &DescriptiveSummary) -> io::Result<()> {
    let ddof = summary.ddof;
    let rows = [
        ("count", summary.count.to_string()),
        ("sum", summary.sum.to_string()),
        ("mean", summary.mean.to_string()),
        ("median", summary.median.to_string()),
        ("mode", summary.mode.to_string()),
        ("min", summary.min.to_string()),
        ("max", summary.max.to_string()),
        ("range", summary.range.to_string()),
        ("q1", summary.q1.to_string()),
        ("q3", summary.q3.to_string()),
        ("iqr", summary.interquartile_range.to_string()),
        ("variance", format!("{} (ddof={ddof})", summary.variance)),
        ("std_dev", format!("{} (ddof={ddof})", summary.std_dev)),
        ("sem", format!("{} (ddof={ddof})", summary.standard_error)),
        ("cv_percent", summary.coefficient_of_variation.to_string()),
        ("mad", summary.median_absolute_deviation.to_string()),
    ];
    for (name, value) in rows {
        writeln!(out, "{name:<12} {value}")?;
    }
    Ok(())
}
