use axum::routing::{get, post};
use axum::Router;
use htlc_protocol::endpoints;
use tower_http::trace::TraceLayer;

use crate::handler::{self, SharedGateway};

/// Build the axum router with all envelope endpoints.
pub fn build_router(gateway: SharedGateway) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::STATE, get(handler::state_handler))
        .route(endpoints::LAST_SECRET_HASH, get(handler::last_secret_hash_handler))
        .route(endpoints::CREATE_ENVELOPE, post(handler::create_envelope_handler))
        .route(endpoints::CLAIM_ENVELOPE, post(handler::claim_envelope_handler))
        .route(endpoints::TRANSACTIONS, get(handler::transactions_handler))
        .route(endpoints::EXPORT_TRANSACTIONS, get(handler::export_handler))
        .route(endpoints::GENERATE_SECRET, get(handler::generate_secret_handler))
        .fallback(handler::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}
