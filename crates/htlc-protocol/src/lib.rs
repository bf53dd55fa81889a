//! Request/response shapes for the HTLC envelope service.
//!
//! Defines the endpoint paths, the JSON bodies exchanged with clients, and
//! the decoding of hex fields into fixed-width values. Transport-agnostic:
//! the HTTP binding lives in `htlc-server`.

pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;

pub use endpoint::{endpoints, AVAILABLE_ENDPOINTS};
pub use error::{Operation, ProtocolError, ProtocolResult};
pub use request::{ClaimEnvelopeRequest, CreateEnvelopeRequest};
pub use response::{
    ClaimEnvelopeResponse, CreateEnvelopeResponse, ErrorResponse, GenerateSecretResponse,
    HealthResponse, LastSecretHashResponse, NotFoundResponse, StateResponse, TransactionsResponse,
};
