use crate::errors::AppError;
use crate::models::{EnrichedLead, Lead};
use crate::places::PlacesClient;

/// Annotation for leads submitted without a usable address.
pub const NOTE_NO_ADDRESS: &str = "no address; cannot geocode";
/// Annotation for leads whose address resolved to no geocoding candidate.
pub const NOTE_GEOCODE_MISS: &str = "geocode failed; not found/ambiguous";

/// Enrich a batch of leads, one at a time, in input order.
///
/// Per lead: geocode the address to a place identifier, then fetch the
/// place's formatted address, rating, and review count. Leads that cannot
/// be resolved (no address, or no geocoding candidate) are annotated with a
/// `_note` and skipped; an upstream non-success status aborts the whole
/// batch and discards partial progress.
///
/// The loop is deliberately sequential: batches are expected to hold around
/// 30 leads, small enough that fan-out is not worth the complexity.
pub async fn enrich_batch(
    places: &PlacesClient,
    leads: Vec<Lead>,
) -> Result<Vec<EnrichedLead>, AppError> {
    let mut items = Vec::with_capacity(leads.len());

    for lead in leads {
        let Some(address) = lead.geocode_address().map(str::to_owned) else {
            items.push(EnrichedLead::noted(lead, NOTE_NO_ADDRESS));
            continue;
        };

        let Some(place_id) = places.geocode_to_place_id(&address).await? else {
            items.push(EnrichedLead::noted(lead, NOTE_GEOCODE_MISS));
            continue;
        };

        let details = places.place_details(&place_id).await?;
        items.push(EnrichedLead::enriched(lead, details));
    }

    Ok(items)
}
