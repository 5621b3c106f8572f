//! Lead Places Enrichment API Library
//!
//! This library provides the core functionality for the lead enrichment
//! service: it accepts a batch of lead records (name/address pairs) and
//! annotates each with the mapping provider's canonical address, rating,
//! and review count, resolved via geocoding and a place-details lookup.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `enrichment`: Sequential batch enrichment loop.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Request, response, and provider payload models.
//! - `places`: Google Maps API client (geocoding, place details).

pub mod config;
pub mod enrichment;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod places;
