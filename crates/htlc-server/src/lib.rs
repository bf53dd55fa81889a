//! HTTP gateway for the HTLC envelope service.
//!
//! Decodes hex/JSON requests, drives the commitment engine, and appends a
//! transaction record for every accepted create or claim. Rejected requests
//! get a `400` with `{ "error": ... }` and leave no trace in the ledger or log.

pub mod config;
pub mod error;
pub mod gateway;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServerError, ServerResult};
pub use gateway::Gateway;
pub use handler::SharedGateway;
pub use server::HtlcServer;
