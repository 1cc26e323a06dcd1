// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, run the available-places component
// against the configured backend, print each state change

use anyhow::Context;
use available_places::config::{self, Config};
use available_places::models::FetchPhase;
use available_places::services::{AvailablePlaces, HttpPlacesClient};
use available_places::views;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,reqwest=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    config.validate().context("invalid configuration")?;

    log::info!("Starting available-places...");
    log::info!("Environment: {}", config.environment);
    // 4. Build the HTTP capability
    let client = config::init_http_client(&config)?;
    let source = HttpPlacesClient::new(client, config.places_url.clone());
    log::info!("Places endpoint: {}", source.url());

    // 5. Wire the component to the view
    let component = AvailablePlaces::new(source);
    log::info!("Component instance: {}", component.id());
    component.subscribe(|snapshot| println!("{}", views::render(&snapshot)));

    // 6. Fetch, then tear down on settlement or Ctrl-C
    component.init();

    let phase = tokio::select! {
        phase = component.settled() => phase,
        _ = tokio::signal::ctrl_c() => {
            log::info!("Interrupted, cancelling fetch");
            component.phase()
        }
    };

    component.destroy();

    match phase {
        FetchPhase::Succeeded => log::info!("Done"),
        FetchPhase::Failed => log::warn!("Fetch failed: {}", component.error().get()),
        FetchPhase::Idle | FetchPhase::Fetching => log::info!("Stopped before the fetch settled"),
    }

    Ok(())
}
