/// Errors raised by the statistics functions.
///
/// Statistical degeneracy (a zero denominator in a correlation or a
/// coefficient of variation) is not an error: those results are `NaN` or
/// infinite instead.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The sample has no elements.
    #[display("empty input")]
    EmptyInput,
    /// Two paired samples have different lengths.
    #[display("samples must have the same length (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },
    /// A matrix operation received an array that is not 2-dimensional.
    #[display("input must be 2-dimensional (got {ndim} dimensions)")]
    NotTwoDimensional { ndim: usize },
    /// A parameter lies outside its closed interval.
    #[display("{name} must be between {min} and {max} (got {value})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// The axis selector does not exist on the input.
    #[display("axis {axis} is out of bounds for an array with {ndim} dimensions")]
    AxisOutOfBounds { axis: usize, ndim: usize },
}

pub type Result<T, E = StatsError> = std::result::Result<T, E>;

/// Checks that `value` lies in `[min, max]`. `NaN` is always out of range.
pub(crate) fn ensure_in_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(StatsError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
