//! HTTP front end for the single-diode photovoltaic cell model.
//!
//! Serves the I-V and P-V curves as JSON along with a static page that plots
//! them. See [`routes`] for the endpoints and [`ServerConfig`] for the
//! environment variables read at startup.

mod config;
mod dto;
mod error;
mod logging;
mod routes;

use std::sync::Arc;

use tracing::info;
use uom::si::{
    electric_current::ampere, electrical_resistance::ohm, thermodynamic_temperature::kelvin,
};
use warp::Filter;

pub use config::{MAX_SAMPLE_COUNT, ServerConfig, check_sample_count};
pub use dto::{ErrorResponse, ParametersResponse, SimulateQuery, SimulateResponse};
pub use error::{ConfigError, ServerError};
pub use logging::{LogConfig, LogFormat, LogLevel, init_logging};
pub use routes::routes;

/// Binds the configured address and serves requests until the process exits.
///
/// # Errors
///
/// Returns [`ServerError::Config`] if the configuration is invalid and
/// [`ServerError::Bind`] if the address cannot be bound.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    let address = config.socket_addr();
    let cell = &config.parameters;
    info!(
        photocurrent_a = cell.photocurrent.get::<ampere>(),
        saturation_current_a = cell.saturation_current.get::<ampere>(),
        series_resistance_ohm = cell.series_resistance.get::<ohm>(),
        cell_temperature_k = cell.cell_temperature.get::<kelvin>(),
        ideality_factor = cell.ideality_factor,
        sample_count = config.sample_count,
        static_dir = %config.static_dir.display(),
        "cell configured"
    );

    let filter = routes(Arc::new(config)).with(warp::trace::request());
    let (bound, server) = warp::serve(filter)
        .try_bind_ephemeral(address)
        .map_err(|source| ServerError::Bind { address, source })?;

    info!("server running on http://{bound}");
    server.await;
    Ok(())
}
