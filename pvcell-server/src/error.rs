use std::net::SocketAddr;

use pvcell_models::photovoltaic::ConfigurationError;
use thiserror::Error;

/// Errors raised while loading the server configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("`{variable}` has invalid value `{value}`: {reason}")]
    Parse {
        variable: &'static str,
        value: String,
        reason: String,
    },

    /// More samples were requested than a single curve may hold.
    #[error("sample count {count} exceeds the maximum of {max}")]
    TooManySamples { count: usize, max: usize },

    /// The parsed values do not describe a valid cell or sampling.
    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: warp::Error,
    },
}
