/// HTTP endpoint paths for the envelope service.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const STATE: &str = "/state";
    pub const LAST_SECRET_HASH: &str = "/getLastSecretHash";
    pub const CREATE_ENVELOPE: &str = "/createEnvelope";
    pub const CLAIM_ENVELOPE: &str = "/claimEnvelope";
    pub const TRANSACTIONS: &str = "/transactions";
    pub const EXPORT_TRANSACTIONS: &str = "/transactions/export";
    pub const GENERATE_SECRET: &str = "/generateSecret";
}

/// Method and path of every route, as listed in 404 responses.
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET  /health",
    "GET  /state",
    "GET  /getLastSecretHash",
    "POST /createEnvelope",
    "POST /claimEnvelope",
    "GET  /transactions",
    "GET  /transactions/export",
    "GET  /generateSecret",
];
