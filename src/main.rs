//! Service binary: composition root.

use twitch_backend::config;
use twitch_backend::http::build_app;
use twitch_backend::lifecycle::Server;
use twitch_backend::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_from_env()?;

    logging::init(&config.environment);

    tracing::info!(
        port = config.port,
        environment = %config.environment,
        allowed_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    let app = build_app(&config);

    // Under a test harness the Router is driven by simulated requests;
    // binding a real socket or installing signal handlers would only fight
    // with the test runner.
    if config.is_test() {
        tracing::info!("Test environment, not binding listener");
        return Ok(());
    }

    Server::new(app, &config).start().await?;

    Ok(())
}
