use clap::{Parser, Subcommand};

use self::{
    describe::DescribeArg,
    matrix::{CorrArg, CovArg},
    pair::PairArg,
    percentile::PercentileArg,
};

mod describe;
mod matrix;
mod pair;
mod percentile;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Statistic to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize a sample with descriptive statistics
    Describe(#[clap(flatten)] DescribeArg),
    /// Compute one percentile of a sample
    Percentile(#[clap(flatten)] PercentileArg),
    /// Covariance matrix of the variables (columns) of the given rows
    Cov(#[clap(flatten)] CovArg),
    /// Pearson correlation matrix of the variables (columns) of the given rows
    Corr(#[clap(flatten)] CorrArg),
    /// Covariance and Pearson correlation of two samples
    Pair(#[clap(flatten)] PairArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Percentile(arg) => percentile::run(&arg)?,
        Mode::Cov(arg) => matrix::run_cov(&arg)?,
        Mode::Corr(arg) => matrix::run_corr(&arg)?,
        Mode::Pair(arg) => pair::run(&arg)?,
    }
    Ok(())
}
