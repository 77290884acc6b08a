//! Single-diode photovoltaic cell model.
//!
//! The cell voltage at output current `I_C` is evaluated in closed form:
//!
//! ```text
//! V_C = (n k T / q) ln((I_ph + I_0 - I_C) / I_0) - I_C R_s
//! ```
//!
//! where `I_ph` is the photocurrent, `I_0` the diode saturation current,
//! `R_s` the series resistance, `n` the ideality factor, `T` the cell
//! temperature, `k` the Boltzmann constant and `q` the elementary charge.
//! The shunt path is neglected and the series drop is applied linearly.
//!
//! [`generate`] samples this relation over `[0, I_ph]` and returns the
//! index-aligned current, voltage and power sequences as a [`CurveResult`].

mod curve;
mod error;
mod generate;
mod model;
mod parameters;
mod sampling;

pub use curve::{CurvePoint, CurveResult};
pub use error::{ConfigurationError, CurveError};
pub use generate::{DEFAULT_SAMPLE_COUNT, cell_voltage, generate};
pub use model::{CurveRequest, SingleDiodeCurve};
pub use parameters::CellParameters;
pub use sampling::linspace;
