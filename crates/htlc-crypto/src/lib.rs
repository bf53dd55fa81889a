//! Cryptographic primitives for the HTLC envelope service.
//!
//! Provides SHA-256 commitments over 32-byte secrets, a constant-time digest
//! comparison, and random secret generation.
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod compare;
pub mod generate;
pub mod hasher;

pub use compare::digests_match;
pub use generate::{generate_secret, generate_secret_with, SecretPair};
pub use hasher::SecretHasher;
