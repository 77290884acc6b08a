use super::ConfigurationError;

/// Returns `count` evenly spaced values over the closed interval `[start, end]`.
///
/// The last value is set to `end` exactly rather than accumulated from the
/// step, so the upper bound never overshoots.
///
/// # Errors
///
/// Returns [`ConfigurationError::TooFewSamples`] if `count < 2`.
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, count: usize) -> Result<Vec<f64>, ConfigurationError> {
    if count < 2 {
        return Err(ConfigurationError::TooFewSamples { count });
    }

    let last = count - 1;
    let step = (end - start) / last as f64;

    Ok((0..count)
        .map(|i| {
            if i == last {
                end
            } else {
                start + i as f64 * step
            }
        })
        .collect())
}
