use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use htlc_ledger::TransactionBackup;
use htlc_protocol::{
    ClaimEnvelopeRequest, ClaimEnvelopeResponse, CreateEnvelopeRequest, CreateEnvelopeResponse,
    GenerateSecretResponse, HealthResponse, LastSecretHashResponse, NotFoundResponse,
    ProtocolError, StateResponse, TransactionsResponse,
};

use serde::de::DeserializeOwned;

use crate::error::ServerResult;
use crate::gateway::Gateway;

pub type SharedGateway = Arc<Gateway>;

/// Parse a JSON request body whatever its `Content-Type` says.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ProtocolError> {
    serde_json::from_slice(body).map_err(|e| ProtocolError::InvalidBody(e.to_string()))
}

/// Health check handler.
pub async fn health_handler(State(gw): State<SharedGateway>) -> ServerResult<Json<HealthResponse>> {
    Ok(Json(gw.health()?))
}

pub async fn state_handler(State(gw): State<SharedGateway>) -> ServerResult<Json<StateResponse>> {
    Ok(Json(gw.state()?))
}

pub async fn last_secret_hash_handler(
    State(gw): State<SharedGateway>,
) -> Json<LastSecretHashResponse> {
    Json(gw.last_secret_hash())
}

pub async fn create_envelope_handler(
    State(gw): State<SharedGateway>,
    body: Bytes,
) -> ServerResult<Json<CreateEnvelopeResponse>> {
    let req: CreateEnvelopeRequest = parse_body(&body)?;
    Ok(Json(gw.create_envelope(&req)?))
}

pub async fn claim_envelope_handler(
    State(gw): State<SharedGateway>,
    body: Bytes,
) -> ServerResult<Json<ClaimEnvelopeResponse>> {
    let req: ClaimEnvelopeRequest = parse_body(&body)?;
    Ok(Json(gw.claim_envelope(&req)?))
}

pub async fn transactions_handler(
    State(gw): State<SharedGateway>,
) -> ServerResult<Json<TransactionsResponse>> {
    Ok(Json(gw.transactions()?))
}

pub async fn export_handler(
    State(gw): State<SharedGateway>,
) -> ServerResult<Json<TransactionBackup>> {
    Ok(Json(gw.export()?))
}

pub async fn generate_secret_handler(
    State(gw): State<SharedGateway>,
) -> Json<GenerateSecretResponse> {
    Json(gw.generate_secret())
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> (StatusCode, Json<NotFoundResponse>) {
    (StatusCode::NOT_FOUND, Json(NotFoundResponse::default()))
}
