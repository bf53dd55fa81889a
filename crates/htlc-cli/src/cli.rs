use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "htlc",
    about = "Hash-locked envelopes: commit to a secret, claim by revealing it",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the envelope server
    Serve(ServeArgs),
    /// Generate a random secret and its SHA-256 hash
    Generate,
    /// Print the SHA-256 hash of a 32-byte hex secret
    Hash(HashArgs),
    /// Check that a secret hashes to an expected value
    Verify(VerifyArgs),
    /// Inspect or merge transaction backups
    Backup(BackupArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the config file and PORT
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Do not answer cross-origin requests
    #[arg(long)]
    pub no_cors: bool,
}

#[derive(Args)]
pub struct HashArgs {
    pub secret: String,
}

#[derive(Args)]
pub struct VerifyArgs {
    pub secret: String,
    pub expected_hash: String,
}

#[derive(Args)]
pub struct BackupArgs {
    #[command(subcommand)]
    pub action: BackupAction,
}

#[derive(Subcommand)]
pub enum BackupAction {
    /// Summarize a backup file
    Show { path: PathBuf },
    /// Merge INCOMING into EXISTING, deduplicating by transaction id
    Merge {
        existing: PathBuf,
        incoming: PathBuf,
        /// Output file; defaults to overwriting EXISTING
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
