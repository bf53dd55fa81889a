use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use htlc_crypto::generate_secret;
use htlc_engine::CommitmentEngine;
use htlc_ledger::{TransactionBackup, TransactionEntry, TransactionLog};
use htlc_protocol::{
    ClaimEnvelopeRequest, ClaimEnvelopeResponse, CreateEnvelopeRequest, CreateEnvelopeResponse,
    GenerateSecretResponse, HealthResponse, LastSecretHashResponse, StateResponse,
    TransactionsResponse,
};

use crate::error::{ServerError, ServerResult};

/// Request gateway: validates boundary input, drives the engine, and records
/// every accepted request in the transaction log.
///
/// Mutating requests run one at a time so that the order of the log matches
/// the order in which the ledger was written.
pub struct Gateway {
    engine: CommitmentEngine,
    log: TransactionLog,
    write_lock: Mutex<()>,
    started: Instant,
}

impl Gateway {
    pub fn new() -> Self {
        Self::with_engine(CommitmentEngine::in_memory())
    }

    pub fn with_engine(engine: CommitmentEngine) -> Self {
        Self {
            engine,
            log: TransactionLog::new(),
            write_lock: Mutex::new(()),
            started: Instant::now(),
        }
    }

    pub fn engine(&self) -> &CommitmentEngine {
        &self.engine
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    pub fn create_envelope(&self, req: &CreateEnvelopeRequest) -> ServerResult<CreateEnvelopeResponse> {
        let secret_hash = req.validate()?;

        let _guard = self.lock_writes()?;
        self.engine.create(secret_hash);
        let record = self.log.append(TransactionEntry::create(secret_hash))?;

        Ok(CreateEnvelopeResponse::created(record.tx_id, secret_hash))
    }

    pub fn claim_envelope(&self, req: &ClaimEnvelopeRequest) -> ServerResult<ClaimEnvelopeResponse> {
        let (secret, expected) = req.validate()?;

        let _guard = self.lock_writes()?;
        let outcome = self.engine.claim(&secret, &expected);
        let verified = outcome.is_success();
        let record = self
            .log
            .append(TransactionEntry::claim(&secret, expected, verified))?;

        Ok(ClaimEnvelopeResponse::new(record.tx_id, verified))
    }

    fn lock_writes(&self) -> ServerResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| ServerError::Internal("gateway write lock poisoned".into()))
    }

    pub fn last_secret_hash(&self) -> LastSecretHashResponse {
        LastSecretHashResponse::from(self.engine.last_secret_hash())
    }

    /// Hash and count are read together under the write lock, so the pair
    /// always describes the same point in the log.
    pub fn state(&self) -> ServerResult<StateResponse> {
        let _guard = self.lock_writes()?;
        Ok(StateResponse {
            last_secret_hash: self.engine.last_secret_hash(),
            total_transactions: self.log.len()? as u64,
        })
    }

    pub fn transactions(&self) -> ServerResult<TransactionsResponse> {
        let transactions = self.log.records()?;
        let total = transactions.len() as u64;
        Ok(TransactionsResponse { transactions, total })
    }

    pub fn export(&self) -> ServerResult<TransactionBackup> {
        Ok(TransactionBackup::new(self.log.records()?))
    }

    /// Fresh secret and its hash. Touches neither the ledger nor the log.
    pub fn generate_secret(&self) -> GenerateSecretResponse {
        let pair = generate_secret();
        GenerateSecretResponse {
            secret: pair.secret.to_hex(),
            hash: pair.hash,
            note: GenerateSecretResponse::NOTE.into(),
        }
    }

    pub fn health(&self) -> ServerResult<HealthResponse> {
        Ok(HealthResponse::healthy(
            self.started.elapsed().as_secs_f64(),
            self.log.len()? as u64,
        ))
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new()
    }
}
