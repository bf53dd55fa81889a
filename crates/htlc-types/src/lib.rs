//! Foundation types for the HTLC envelope service.
//!
//! Every other `htlc-*` crate depends on this one. It defines the fixed-width
//! values exchanged by the commit/reveal protocol and the identifiers used by
//! the transaction log.
//!
//! # Key Types
//!
//! - [`SecretHash`] — 32-byte SHA-256 commitment published by the sender
//! - [`Secret`] — 32-byte pre-image revealed by the claimant
//! - [`TransactionId`] — process-unique identifier of an accepted request
//! - [`TransactionKind`] — create or claim

pub mod bytes;
pub mod error;
pub mod hash;
pub mod secret;
pub mod transaction;

pub use bytes::{decode_hex32, preview_hex, preview_str, HASH_LEN, PREVIEW_CHARS};
pub use error::TypeError;
pub use hash::SecretHash;
pub use secret::Secret;
pub use transaction::{TransactionId, TransactionKind};
