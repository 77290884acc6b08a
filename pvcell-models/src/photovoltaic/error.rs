use thiserror::Error;

/// Errors raised when cell parameters or sampling settings are invalid.
///
/// These are detected before any curve point is evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A parameter that must be strictly positive is zero or negative.
    #[error("`{parameter}` must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    /// A parameter is NaN or infinite.
    #[error("`{parameter}` must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    /// Fewer than two samples cannot span the current range.
    #[error("sample count must be at least 2, got {count}")]
    TooFewSamples { count: usize },
}

/// Errors that can occur while generating a curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The diode equation left its domain.
    ///
    /// Occurs when `I_ph + I_0 - I_C` is not positive, or when the resulting
    /// voltage or power is not a finite number.
    #[error("diode equation is undefined at output current {current} A (log argument {argument})")]
    Domain { current: f64, argument: f64 },
}
