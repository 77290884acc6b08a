use std::collections::HashMap;

use pvcell_models::photovoltaic::CurveResult;
use serde::{Deserialize, Serialize};
use uom::si::{
    electric_charge::coulomb, electric_current::ampere, electric_potential::volt,
    electrical_resistance::ohm, heat_capacity::joule_per_kelvin, power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::{ConfigError, ServerConfig};

/// Query string accepted by `POST /simulate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulateQuery {
    pub samples: Option<usize>,
}

impl TryFrom<&HashMap<String, String>> for SimulateQuery {
    type Error = ConfigError;

    fn try_from(params: &HashMap<String, String>) -> Result<Self, Self::Error> {
        let samples = params
            .get("samples")
            .map(|value| {
                value.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::Parse {
                        variable: "samples",
                        value: value.clone(),
                        reason: e.to_string(),
                    }
                })
            })
            .transpose()?;

        Ok(Self { samples })
    }
}

/// Curve data in SI base units, index-aligned and ordered by ascending current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub voltage: Vec<f64>,
    pub current: Vec<f64>,
    pub power: Vec<f64>,
}

impl From<&CurveResult> for SimulateResponse {
    fn from(curve: &CurveResult) -> Self {
        Self {
            voltage: curve.voltage().iter().map(|v| v.get::<volt>()).collect(),
            current: curve.current().iter().map(|i| i.get::<ampere>()).collect(),
            power: curve.power().iter().map(|p| p.get::<watt>()).collect(),
        }
    }
}

/// Active cell parameters in SI base units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersResponse {
    pub photocurrent: f64,
    pub saturation_current: f64,
    pub series_resistance: f64,
    pub cell_temperature: f64,
    pub ideality_factor: f64,
    pub elementary_charge: f64,
    pub boltzmann_constant: f64,
    pub sample_count: usize,
}

impl From<&ServerConfig> for ParametersResponse {
    fn from(config: &ServerConfig) -> Self {
        let p = &config.parameters;
        Self {
            photocurrent: p.photocurrent.get::<ampere>(),
            saturation_current: p.saturation_current.get::<ampere>(),
            series_resistance: p.series_resistance.get::<ohm>(),
            cell_temperature: p.cell_temperature.get::<kelvin>(),
            ideality_factor: p.ideality_factor,
            elementary_charge: p.elementary_charge.get::<coulomb>(),
            boltzmann_constant: p.boltzmann_constant.get::<joule_per_kelvin>(),
            sample_count: config.sample_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
