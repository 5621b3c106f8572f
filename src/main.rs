use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lead_places_api::config::Config;
use lead_places_api::handlers::{self, AppState};
use lead_places_api::places::PlacesClient;

/// Main entry point for the application.
///
/// Initializes logging and tracing, loads configuration, builds the Google
/// Maps client and HTTP routes, then starts the Axum server.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_places_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the Google Maps client
    let places = PlacesClient::new(&config);
    tracing::info!("Google Maps client initialized");

    // Build application state and routes
    let state = Arc::new(AppState {
        config: config.clone(),
        places,
    });
    let app = handlers::router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
