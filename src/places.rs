use crate::config::Config;
use crate::errors::AppError;
use crate::models::{GeocodeResponse, PlaceDetails};
use reqwest::Client;

/// Fields requested from the Place Details API. Deliberately excludes review
/// text, which is billed at a higher tier.
const DETAILS_FIELD_MASK: &str = "id,displayName,formattedAddress,rating,userRatingCount";

/// Client for the Google Maps geocoding and Place Details (v1) APIs.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    geocode_base_url: String,
    places_base_url: String,
}

impl PlacesClient {
    pub fn new(config: &Config) -> Self {
        Self {
            // No request timeout: a hung upstream call is bounded by the
            // surrounding deployment, not by this client.
            client: Client::new(),
            api_key: config.google_maps_api_key.clone(),
            geocode_base_url: config.geocode_base_url.clone(),
            places_base_url: config.places_base_url.clone(),
        }
    }

    /// Geocode a free-text address to a place identifier.
    ///
    /// Uses only the first candidate; returns `Ok(None)` when the provider
    /// finds nothing. A non-success HTTP status is fatal and carries the
    /// provider's error text.
    ///
    /// # Arguments
    ///
    /// * `address` - The free-text address to resolve.
    ///
    /// # Returns
    ///
    /// * `Result<Option<String>, AppError>` - The place identifier, if any.
    pub async fn geocode_to_place_id(&self, address: &str) -> Result<Option<String>, AppError> {
        // Build URL with proper parameter encoding to prevent injection attacks
        let url = reqwest::Url::parse_with_params(
            &format!("{}/maps/api/geocode/json", self.geocode_base_url),
            &[("address", address), ("key", self.api_key.as_str())],
        )
        .map_err(|e| AppError::Upstream(format!("Failed to build geocode URL: {}", e)))?;

        // Redact the key from logs to prevent credential exposure
        tracing::debug!(
            "Geocoding via {}/maps/api/geocode/json?address={}&key=[REDACTED]",
            self.geocode_base_url,
            address
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Geocode request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Upstream(format!(
                "Geocode failed: {} {}",
                status, error_text
            )));
        }

        let data: GeocodeResponse = response.json().await.map_err(|e| {
            AppError::Upstream(format!("Failed to parse geocode response: {}", e))
        })?;

        let place_id = data.results.into_iter().next().map(|r| r.place_id);
        if place_id.is_none() {
            tracing::debug!(
                "Geocoder found no candidate (status: {}) for: {}",
                data.status,
                address
            );
        }

        Ok(place_id)
    }

    /// Fetch place details for a geocoded place identifier.
    ///
    /// Requests exactly the fields in [`DETAILS_FIELD_MASK`]. A non-success
    /// HTTP status is fatal and carries the provider's error text.
    ///
    /// # Arguments
    ///
    /// * `place_id` - The opaque place identifier from geocoding.
    ///
    /// # Returns
    ///
    /// * `Result<PlaceDetails, AppError>` - The requested detail fields.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, AppError> {
        let url = format!("{}/v1/places/{}", self.places_base_url, place_id);
        tracing::debug!("Fetching place details for {}", place_id);

        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", DETAILS_FIELD_MASK)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Details request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Upstream(format!(
                "Details failed: {} {}",
                status, error_text
            )));
        }

        let details: PlaceDetails = response.json().await.map_err(|e| {
            AppError::Upstream(format!("Failed to parse details response: {}", e))
        })?;

        Ok(details)
    }
}
