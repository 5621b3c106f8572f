use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============ Inbound Models ============

/// A business/place record submitted for enrichment.
///
/// Only `address` matters for processing; every other field (known or not)
/// is passed through to the output untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lead {
    /// Business name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text address used for geocoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Caller-assigned area/neighborhood tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_tag: Option<String>,
    /// Website or Instagram handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_or_instagram: Option<String>,
    /// Any additional caller-supplied fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lead {
    /// The address to geocode, if the lead has a non-empty one.
    pub fn geocode_address(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.is_empty())
    }
}

/// Request body for the enrichment endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrichRequest {
    /// Batch of leads to enrich. A missing field or a non-array value is
    /// treated as an empty batch.
    #[serde(default, deserialize_with = "leads_or_empty")]
    pub leads: Vec<Lead>,
}

fn leads_or_empty<'de, D>(deserializer: D) -> Result<Vec<Lead>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

// ============ Outbound Models ============

/// Response body for the enrichment endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichResponse {
    /// One entry per input lead, in input order.
    pub items: Vec<EnrichedLead>,
}

/// Output record for a single lead.
///
/// Either the lead merged with place data, or the lead unchanged plus a
/// `_note` explaining why enrichment could not proceed. Serialized untagged
/// so both shapes come out as plain lead-shaped objects.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EnrichedLead {
    Enriched {
        #[serde(flatten)]
        lead: Lead,
        /// Provider's formatted address, falling back to the original, or
        /// null when neither exists.
        address: Option<String>,
        /// Place rating, null when the provider has none.
        google_rating: Option<f64>,
        /// Number of user ratings, 0 when the provider has none.
        review_count: u64,
    },
    Noted {
        #[serde(flatten)]
        lead: Lead,
        #[serde(rename = "_note")]
        note: String,
    },
}

impl EnrichedLead {
    /// A lead that could not be enriched, annotated with the reason.
    pub fn noted(lead: Lead, note: &str) -> Self {
        EnrichedLead::Noted {
            lead,
            note: note.to_string(),
        }
    }

    /// A lead merged with the place details fetched for it.
    pub fn enriched(mut lead: Lead, details: PlaceDetails) -> Self {
        // Move the address out of the lead so the flattened fields cannot
        // collide with the explicit one.
        let original_address = lead.address.take();
        EnrichedLead::Enriched {
            lead,
            address: details.formatted_address.or(original_address),
            google_rating: details.rating,
            review_count: details.user_rating_count.unwrap_or(0),
        }
    }
}

// ============ Provider Payloads ============

/// Geocoding API response. Only the candidate list is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    /// Provider status string ("OK", "ZERO_RESULTS", ...), logged only.
    #[serde(default)]
    pub status: String,
}

/// A single geocoding candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub place_id: String,
}

/// Place Details (v1) response, restricted to the requested field mask.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceDetails {
    pub id: Option<String>,
    pub display_name: Option<DisplayName>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<u64>,
}

/// Localized display name as returned by Places v1.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayName {
    pub text: Option<String>,
    pub language_code: Option<String>,
}
