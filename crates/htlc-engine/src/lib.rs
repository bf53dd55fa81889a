//! Commitment protocol engine for the HTLC envelope service.
//!
//! The engine owns a [`LedgerStore`](htlc_ledger::LedgerStore) and is the only
//! component that writes to it. It models a single outstanding commitment:
//! creating an envelope replaces whatever hash was stored before.

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::CommitmentEngine;
pub use error::EngineError;
pub use outcome::ClaimOutcome;
