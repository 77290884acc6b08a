use std::{collections::HashMap, convert::Infallible, sync::Arc};

use pvcell_core::Model;
use pvcell_models::photovoltaic::{CurveError, CurveRequest, SingleDiodeCurve};
use tracing::{debug, warn};
use uom::si::{electric_potential::volt, power::watt};
use warp::{
    Filter, Rejection, Reply,
    http::StatusCode,
    reply::{Response, json, with_status},
};

use crate::{
    ServerConfig,
    config::check_sample_count,
    dto::{ErrorResponse, ParametersResponse, SimulateQuery, SimulateResponse},
};

/// Builds every route served by the application.
///
/// - `POST /simulate[?samples=N]` returns the curve data as JSON.
/// - `GET /parameters` returns the active cell parameters.
/// - `GET /` serves `index.html`; other paths fall through to the static directory.
pub fn routes(
    config: Arc<ServerConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let simulate = warp::path("simulate")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::query::<HashMap<String, String>>())
        .and(with_config(Arc::clone(&config)))
        .map(simulate_curve);

    let parameters = warp::path("parameters")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_config(Arc::clone(&config)))
        .map(|config: Arc<ServerConfig>| json(&ParametersResponse::from(config.as_ref())));

    let index = warp::path::end()
        .and(warp::get())
        .and(warp::fs::file(config.static_dir.join("index.html")));

    let static_files = warp::get().and(warp::fs::dir(config.static_dir.clone()));

    simulate.or(parameters).or(index).or(static_files)
}

fn with_config(
    config: Arc<ServerConfig>,
) -> impl Filter<Extract = (Arc<ServerConfig>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&config))
}

fn simulate_curve(query: HashMap<String, String>, config: Arc<ServerConfig>) -> Response {
    let sample_count = SimulateQuery::try_from(&query)
        .map(|query| query.samples.unwrap_or(config.sample_count))
        .and_then(|count| check_sample_count(count).map(|()| count));

    let sample_count = match sample_count {
        Ok(count) => count,
        Err(error) => {
            warn!(%error, "rejected simulation request");
            return error_reply(&error.to_string(), StatusCode::BAD_REQUEST);
        }
    };

    let request = CurveRequest::new(config.parameters).with_sample_count(sample_count);
    match SingleDiodeCurve.call(&request) {
        Ok(curve) => {
            if let Some(mpp) = curve.max_power_point() {
                debug!(
                    samples = curve.len(),
                    mpp_voltage = mpp.voltage.get::<volt>(),
                    mpp_power = mpp.power.get::<watt>(),
                    "generated curve"
                );
            }
            json(&SimulateResponse::from(&curve)).into_response()
        }
        Err(error) => {
            let status = match error {
                CurveError::Configuration(_) => StatusCode::BAD_REQUEST,
                CurveError::Domain { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            warn!(%error, "simulation failed");
            error_reply(&error.to_string(), status)
        }
    }
}

fn error_reply(message: &str, status: StatusCode) -> Response {
    with_status(
        json(&ErrorResponse {
            error: message.to_owned(),
        }),
        status,
    )
    .into_response()
}
