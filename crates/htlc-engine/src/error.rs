use thiserror::Error;

/// Errors produced by the commitment engine.
///
/// A hash mismatch on claim is not an error; see
/// [`ClaimOutcome::Mismatch`](crate::ClaimOutcome::Mismatch).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{field} must be {expected} bytes, got {actual}")]
    InvalidInputLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
