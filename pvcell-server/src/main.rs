use std::process::ExitCode;

use pvcell_server::{ServerConfig, init_logging, run};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("pvcell-server: {error}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server stopped");
            ExitCode::FAILURE
        }
    }
}
