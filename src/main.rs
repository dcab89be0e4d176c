//! Arena Sim - headless run of the combat core
//!
//! Loads configuration from the environment, runs the reference arena at the
//! configured tick rate and prints the end-of-run summary as JSON.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shooter_sim::config::{Config, LogFormat};
use shooter_sim::game::Arena;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level, config.log_format);

    info!("Starting arena simulation");
    info!(
        seed = config.seed,
        width = config.arena_width,
        height = config.arena_height,
        max_ticks = config.max_ticks,
        "Arena configuration"
    );

    let max_ticks = config.max_ticks;
    let arena = Arena::new(config)?;

    let summary = tokio::select! {
        summary = arena.run(max_ticks) => summary,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, stopping");
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str, format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .init(),
    }
}
