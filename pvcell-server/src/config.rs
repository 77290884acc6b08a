use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    str::FromStr,
};

use pvcell_models::photovoltaic::{CellParameters, ConfigurationError, DEFAULT_SAMPLE_COUNT};
use uom::si::{
    electric_current::ampere,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricalResistance, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::{
    ConfigError,
    logging::{LogConfig, LogFormat, LogLevel},
};

/// Upper bound on samples per request, to keep responses bounded.
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Server configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,

    /// Directory holding `index.html` and any other static assets.
    pub static_dir: PathBuf,

    /// Samples per curve when a request does not specify its own.
    pub sample_count: usize,

    pub parameters: CellParameters,
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3030,
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
            sample_count: DEFAULT_SAMPLE_COUNT,
            parameters: CellParameters::default(),
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Loads the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any variable is malformed or the
    /// resulting parameters are invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from a variable lookup, falling back to
    /// defaults for anything missing.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any variable is malformed or the
    /// resulting parameters are invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let cell = defaults.parameters;

        let parameters = CellParameters {
            photocurrent: parse_or(&lookup, "PVCELL_PHOTOCURRENT")?
                .map_or(cell.photocurrent, ElectricCurrent::new::<ampere>),
            saturation_current: parse_or(&lookup, "PVCELL_SATURATION_CURRENT")?
                .map_or(cell.saturation_current, ElectricCurrent::new::<ampere>),
            series_resistance: parse_or(&lookup, "PVCELL_SERIES_RESISTANCE")?
                .map_or(cell.series_resistance, ElectricalResistance::new::<ohm>),
            cell_temperature: parse_or(&lookup, "PVCELL_CELL_TEMPERATURE")?
                .map_or(cell.cell_temperature, ThermodynamicTemperature::new::<kelvin>),
            ideality_factor: parse_or(&lookup, "PVCELL_IDEALITY_FACTOR")?
                .unwrap_or(cell.ideality_factor),
            ..cell
        };

        let config = Self {
            address: parse_or(&lookup, "PVCELL_HOST")?.unwrap_or(defaults.address),
            port: parse_or(&lookup, "PVCELL_PORT")?.unwrap_or(defaults.port),
            static_dir: lookup("PVCELL_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            sample_count: parse_or(&lookup, "PVCELL_SAMPLE_COUNT")?
                .unwrap_or(defaults.sample_count),
            parameters,
            log: LogConfig {
                level: parse_or::<_, LogLevel>(&lookup, "PVCELL_LOG_LEVEL")?
                    .unwrap_or_default(),
                format: parse_or::<_, LogFormat>(&lookup, "PVCELL_LOG_FORMAT")?
                    .unwrap_or_default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks the cell parameters and the default sample count.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parameters.validate()?;
        check_sample_count(self.sample_count)?;
        Ok(())
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

/// Validates a requested sample count against the supported range.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when fewer than two samples are requested
/// and [`ConfigError::TooManySamples`] when more than [`MAX_SAMPLE_COUNT`] are.
pub fn check_sample_count(count: usize) -> Result<(), ConfigError> {
    if count < 2 {
        return Err(ConfigurationError::TooFewSamples { count }.into());
    }
    if count > MAX_SAMPLE_COUNT {
        return Err(ConfigError::TooManySamples {
            count,
            max: MAX_SAMPLE_COUNT,
        });
    }
    Ok(())
}

fn parse_or<F, T>(lookup: &F, variable: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(variable) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Parse {
            variable,
            value: value.clone(),
            reason: e.to_string(),
        })
}
