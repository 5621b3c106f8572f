use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub google_maps_api_key: String,
    pub private_action_key: String,
    pub geocode_base_url: String,
    pub places_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            google_maps_api_key: std::env::var("GOOGLE_MAPS_API_KEY")
                .map_err(|_| {
                    anyhow::anyhow!("GOOGLE_MAPS_API_KEY environment variable required")
                })
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("GOOGLE_MAPS_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            private_action_key: std::env::var("PRIVATE_ACTION_KEY")
                .map_err(|_| anyhow::anyhow!("PRIVATE_ACTION_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("PRIVATE_ACTION_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            geocode_base_url: std::env::var("GEOCODE_BASE_URL")
                .unwrap_or_else(|_| "https://maps.googleapis.com".to_string()),
            places_base_url: std::env::var("PLACES_BASE_URL")
                .unwrap_or_else(|_| "https://places.googleapis.com".to_string()),
        };

        if !config.geocode_base_url.starts_with("http://")
            && !config.geocode_base_url.starts_with("https://")
        {
            anyhow::bail!("GEOCODE_BASE_URL must start with http:// or https://");
        }
        if !config.places_base_url.starts_with("http://")
            && !config.places_base_url.starts_with("https://")
        {
            anyhow::bail!("PLACES_BASE_URL must start with http:// or https://");
        }

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Geocode base URL: {}", config.geocode_base_url);
        tracing::debug!("Places base URL: {}", config.places_base_url);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
