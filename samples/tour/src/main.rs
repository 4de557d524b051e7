//! Tour entry point.
//!
//! Runs the airport dictionary walkthrough and logs every step.

use tour::walkthrough::{airport_steps, log_listing, run};
use tour::{LogFormat, TourConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let loaded = TourConfig::from_env();
    let config = loaded.clone().unwrap_or_default();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tour=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }

    match loaded {
        Ok(_) => tracing::info!(?config, "Configuration loaded"),
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
        }
    }

    let tour = run(&airport_steps());
    log_listing(&tour.airports);

    if config.print_json {
        match serde_json::to_string(&tour.airports) {
            Ok(json) => tracing::info!(%json, "final dictionary"),
            Err(error) => tracing::error!("Failed to serialize dictionary: {error}"),
        }
    }

    tracing::info!(steps = tour.outcomes.len(), "Tour finished");
}
