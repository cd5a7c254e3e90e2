use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    num::ParseFloatError,
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use clap::Args;
use ndarray::Array2;

/// Output options shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct OutputArg {
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the JSON result to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print progress messages to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl OutputArg {
    pub fn progress(&self, message: fmt::Arguments<'_>) {
        if self.verbose {
            eprintln!("{message}");
        }
    }

    /// Writes `value` as JSON when `--json` or `--output` is given, otherwise
    /// renders it with `write_text` to stdout.
    pub fn emit<T, F>(&self, value: &T, write_text: F) -> anyhow::Result<()>
    where
        T: serde::Serialize,
        F: FnOnce(&mut Output) -> io::Result<()>,
    {
        let mut output = match &self.output {
            Some(path) => Output::create(path.clone())?,
            None => Output::stdout(),
        };
        if self.json || self.output.is_some() {
            output.write_json(value)?;
            self.progress(format_args!("Result written to {}", output.target()));
            return Ok(());
        }
        write_text(&mut output)
            .and_then(|()| output.flush())
            .with_context(|| format!("Failed to write result to {}", output.target()))
    }
}

#[derive(Debug)]
pub(crate) enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Where results go, for messages.
    fn target(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self))
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to write JSON to {}", self.target()))
    }

    /// Writes a matrix as aligned, fixed-precision columns.
    pub fn write_matrix(&mut self, matrix: &Array2<f64>) -> io::Result<()> {
        for row in matrix.rows() {
            let line = row
                .iter()
                .map(|value| format!("{value:>12.6}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self, "{line}")?;
        }
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Comma-separated values given on the command line, e.g. `1,2.5,-3`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Row(pub Vec<f64>);

impl FromStr for Row {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|value| value.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map(Row)
    }
}

/// Stacks rows of equal length into an `n x p` matrix.
pub(crate) fn rows_to_matrix(rows: &[Row]) -> anyhow::Result<Array2<f64>> {
    let width = rows.first().map_or(0, |row| row.0.len());
    for (i, row) in rows.iter().enumerate() {
        anyhow::ensure!(
            row.0.len() == width,
            "Row {} has {} values, expected {width}",
            i + 1,
            row.0.len()
        );
    }
    let values = rows.iter().flat_map(|row| row.0.iter().copied()).collect();
    Array2::from_shape_vec((rows.len(), width), values).context("Failed to build data matrix")
}

/// Matrix as nested rows, for JSON output.
pub(crate) fn matrix_rows(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    matrix.rows().into_iter().map(|row| row.to_vec()).collect()
}
