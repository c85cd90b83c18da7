//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use summerlin_leads::{LeadIntake, LeadSink, RecordingLeadSink, TracingLeadSink};
use summerlin_listings::{InMemoryListingStore, ListingSource};

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};

/// Create the API router over the seeded listing catalog.
///
/// Leads are logged; with `expose_leads` the latest `lead_history` of them
/// are also kept in memory.
pub fn create_router(config: ServerConfig) -> Router {
    let sink: Arc<dyn LeadSink> = if config.expose_leads {
        Arc::new(RecordingLeadSink::with_capacity(config.lead_history))
    } else {
        Arc::new(TracingLeadSink)
    };
    create_router_with_stores(config, Arc::new(InMemoryListingStore::seeded()), sink)
}

/// Create the API router with a specific listing source and lead sink.
///
/// # Arguments
/// * `config` - Server configuration
/// * `listings` - Listing catalog
/// * `sink` - Destination for accepted leads
pub fn create_router_with_stores(
    config: ServerConfig,
    listings: Arc<dyn ListingSource>,
    sink: Arc<dyn LeadSink>,
) -> Router {
    let expose_leads = config.expose_leads;
    let state = Arc::new(AppState {
        config,
        listings,
        leads: LeadIntake::new(sink),
    });

    let router = Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Mortgage calculator
        .route("/api/v1/mortgage/payment", post(handlers::calculate_payment))
        .route("/api/v1/mortgage/breakdown", post(handlers::calculate_breakdown))
        .route("/api/v1/mortgage/schedule", post(handlers::calculate_schedule))
        .route("/api/v1/mortgage/quote", post(handlers::calculate_quote))
        // Listings
        .route("/api/v1/listings", get(handlers::list_listings))
        .route("/api/v1/listings/:id", get(handlers::get_listing))
        // Lead forms
        .route("/api/v1/leads/contact", post(handlers::submit_contact))
        .route("/api/v1/leads/valuation", post(handlers::submit_valuation))
        .route("/api/v1/leads/sell", post(handlers::submit_sell));

    let router = if expose_leads {
        router.route("/api/v1/leads", get(handlers::list_leads))
    } else {
        router
    };

    router.with_state(state)
}
