//! Covariance and correlation matrices of row-wise observations

use anyhow::Context;
use clap::Args;
use meistat::bivariate;
use ndarray::Array2;
use serde::Serialize;

use crate::util::{self, OutputArg, Row};

#[derive(Debug, Clone, Args)]
pub(crate) struct RowsArg {
    /// One observation, as comma-separated variable values (repeat for each row)
    #[arg(long = "row", required = true, allow_hyphen_values = true)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct CovArg {
    #[clap(flatten)]
    pub rows: RowsArg,

    /// Delta degrees of freedom
    #[arg(long, default_value_t = 0)]
    pub ddof: usize,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct CorrArg {
    #[clap(flatten)]
    pub rows: RowsArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Serialize)]
struct MatrixReport {
    statistic: &'static str,
    observations: usize,
    variables: usize,
    matrix: Vec<Vec<f64>>,
}

pub(crate) fn run_cov(arg: &CovArg) -> anyhow::Result<()> {
    let data = load(&arg.rows, &arg.output)?;
    let matrix =
        bivariate::covariance_matrix(&data, arg.ddof).context("Failed to compute covariance")?;
    emit("covariance", &data, &matrix, &arg.output)
}

pub(crate) fn run_corr(arg: &CorrArg) -> anyhow::Result<()> {
    let data = load(&arg.rows, &arg.output)?;
    let matrix = bivariate::correlation_matrix(&data).context("Failed to compute correlation")?;
    emit("correlation", &data, &matrix, &arg.output)
}

fn load(rows: &RowsArg, output: &OutputArg) -> anyhow::Result<Array2<f64>> {
    let data = util::rows_to_matrix(&rows.rows)?;
    let (n, p) = data.dim();
    output.progress(format_args!("Loaded {n} observations of {p} variables"));
    Ok(data)
}

fn emit(
    statistic: &'static str,
    data: &Array2<f64>,
    matrix: &Array2<f64>,
    output: &OutputArg,
) -> anyhow::Result<()> {
    let (observations, variables) = data.dim();
    let report = MatrixReport {
        statistic,
        observations,
        variables,
        matrix: util::matrix_rows(matrix),
    };
    output.emit(&report, |out| out.write_matrix(matrix))
}
