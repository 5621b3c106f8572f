/// Property-based tests using proptest
/// Tests invariants that should hold for all input batches
use proptest::prelude::*;

use lead_places_api::config::Config;
use lead_places_api::enrichment::{enrich_batch, NOTE_NO_ADDRESS};
use lead_places_api::models::{EnrichRequest, Lead};
use lead_places_api::places::PlacesClient;

/// Client pointed at an unroutable host; address-less batches never reach it.
fn offline_client() -> PlacesClient {
    PlacesClient::new(&Config {
        port: 8080,
        google_maps_api_key: "test_key".to_string(),
        private_action_key: "test_secret".to_string(),
        geocode_base_url: "http://127.0.0.1:9".to_string(),
        places_base_url: "http://127.0.0.1:9".to_string(),
    })
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

// Property: output length and order always equal input length and order
proptest! {
    #[test]
    fn unresolvable_batch_preserves_length_and_order(
        names in proptest::collection::vec("[a-z0-9 ]{0,16}", 0..40)
    ) {
        let leads: Vec<Lead> = names
            .iter()
            .map(|name| Lead {
                name: Some(name.clone()),
                ..Default::default()
            })
            .collect();

        let client = offline_client();
        let items = block_on(enrich_batch(&client, leads)).unwrap();
        prop_assert_eq!(items.len(), names.len());

        let items = serde_json::to_value(&items).unwrap();
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(items[i]["name"].as_str(), Some(name.as_str()));
            prop_assert_eq!(items[i]["_note"].as_str(), Some(NOTE_NO_ADDRESS));
        }
    }

    // Property: an empty-string address is never geocoded
    #[test]
    fn empty_address_is_always_noted(name in "[a-z]{1,12}") {
        let lead = Lead {
            name: Some(name),
            address: Some(String::new()),
            ..Default::default()
        };

        let client = offline_client();
        let items = block_on(enrich_batch(&client, vec![lead])).unwrap();
        let items = serde_json::to_value(&items).unwrap();
        prop_assert_eq!(items[0]["_note"].as_str(), Some(NOTE_NO_ADDRESS));
        prop_assert!(items[0].get("google_rating").is_none());
        prop_assert!(items[0].get("review_count").is_none());
    }

    // Property: caller-supplied passthrough fields survive annotation
    #[test]
    fn passthrough_fields_survive(
        key in "x_[a-z]{1,10}",
        value in "[a-zA-Z0-9 ]{0,24}"
    ) {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "name": "A",
            key.clone(): value.clone()
        }))
        .unwrap();

        let client = offline_client();
        let items = block_on(enrich_batch(&client, vec![lead])).unwrap();
        let items = serde_json::to_value(&items).unwrap();
        prop_assert_eq!(items[0][&key].as_str(), Some(value.as_str()));
    }

    // Property: request parsing never fails on a non-array leads value
    #[test]
    fn non_array_leads_is_always_an_empty_batch(value in prop_oneof![
        Just(serde_json::json!(null)),
        Just(serde_json::json!(true)),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        "[a-z]{0,12}".prop_map(|s| serde_json::json!(s)),
    ]) {
        let request: EnrichRequest =
            serde_json::from_value(serde_json::json!({ "leads": value })).unwrap();
        prop_assert!(request.leads.is_empty());
    }
}
