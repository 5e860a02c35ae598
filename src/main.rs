use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use risk::game::BoardGenerator;
use risk::{router, Config, GameStore, RiskError, VERSION};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Risk backend stopped: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), RiskError> {
    BoardGenerator::validate(&BoardGenerator::generate_territories())?;
    info!("World map validated");

    let store = GameStore::new();
    let app = router(store);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| RiskError::Internal(format!("Error binding {}: {}", address, e)))?;

    info!("Starting Risk backend {} on {}", VERSION, address);

    axum::serve(listener, app)
        .await
        .map_err(|e| RiskError::Internal(format!("Server error: {}", e)))
}
