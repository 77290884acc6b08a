use pvcell_core::Model;

use super::{CellParameters, CurveError, CurveResult, DEFAULT_SAMPLE_COUNT, generate};

/// Input to [`SingleDiodeCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRequest {
    pub parameters: CellParameters,
    pub sample_count: usize,
}

impl CurveRequest {
    /// Creates a request using [`DEFAULT_SAMPLE_COUNT`] samples.
    #[must_use]
    pub fn new(parameters: CellParameters) -> Self {
        Self {
            parameters,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    #[must_use]
    pub fn with_sample_count(self, sample_count: usize) -> Self {
        Self {
            sample_count,
            ..self
        }
    }
}

impl Default for CurveRequest {
    fn default() -> Self {
        Self::new(CellParameters::default())
    }
}

/// Model adapter that generates single-diode cell curves.
///
/// Delegates to [`generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleDiodeCurve;

impl Model for SingleDiodeCurve {
    type Input = CurveRequest;
    type Output = CurveResult;
    type Error = CurveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        generate(&input.parameters, input.sample_count)
    }
}
