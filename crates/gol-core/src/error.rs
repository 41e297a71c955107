//! Error types for the life engine.

/// Alias for `Result<T, LifeError>`.
pub type LifeResult<T> = Result<T, LifeError>;

/// Configuration errors reported when an engine or grid is built.
///
/// Nothing raises these once a simulation is running: edits out of range are
/// ignored and speed changes are clamped.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// The grid dimension must lie in `1..=MAX_DIMENSION`.
    #[error("grid dimension must be between 1 and {max}, got {0}", max = crate::grid::MAX_DIMENSION)]
    InvalidDimension(usize),

    /// The update interval lies outside the supported range.
    #[error("update interval {value}s is outside [{min}s, {max}s]")]
    InvalidInterval {
        /// The rejected interval in seconds.
        value: f64,
        /// Smallest accepted interval.
        min: f64,
        /// Largest accepted interval.
        max: f64,
    },

    /// The update interval is not a whole number of hundredths of a second.
    #[error("update interval {0}s must be a multiple of 0.01s")]
    UnalignedInterval(f64),

    /// The random fill density must be a probability.
    #[error("density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    /// A text grid could not be parsed.
    #[error("invalid pattern at line {line}: {reason}")]
    InvalidPattern {
        /// 1-based line number of the offending row.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}
