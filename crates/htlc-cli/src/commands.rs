use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use htlc_crypto::{generate_secret, SecretHasher};
use htlc_ledger::TransactionBackup;
use htlc_server::{HtlcServer, ServerConfig};
use htlc_types::{Secret, SecretHash};
use serde_json::json;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let format = cli.format;
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Generate => cmd_generate(format),
        Command::Hash(args) => cmd_hash(args, format),
        Command::Verify(args) => cmd_verify(args, format),
        Command::Backup(args) => match args.action {
            BackupAction::Show { path } => cmd_backup_show(&path, format),
            BackupAction::Merge { existing, incoming, output } => {
                let output = output.unwrap_or_else(|| existing.clone());
                cmd_backup_merge(&existing, &incoming, &output, format)
            }
        },
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<ExitCode> {
    let port = std::env::var("PORT").ok();
    let config = resolve_config(&args, port.as_deref())?;
    println!("{} HTLC server on {}", "▶".green().bold(), config.bind_addr.to_string().bold());
    println!("  Storage: {}", "in-memory".cyan());
    HtlcServer::new(config).serve().await?;
    Ok(ExitCode::SUCCESS)
}

/// Config file, then `PORT`, then `--bind` and `--no-cors`.
fn resolve_config(args: &ServeArgs, port: Option<&str>) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    }
    .with_port_override(port)?;

    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }
    if args.no_cors {
        config.allow_cors = false;
    }
    Ok(config)
}

fn cmd_generate(format: OutputFormat) -> anyhow::Result<ExitCode> {
    let pair = generate_secret();
    match format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "secret": pair.secret.to_hex(), "hash": pair.hash.to_hex() })
        ),
        OutputFormat::Text => {
            println!("Secret: {}", pair.secret.to_hex().yellow());
            println!("Hash:   {}", pair.hash.to_hex().cyan());
            println!("{}", "Store the secret securely! You need it to claim the envelope.".dimmed());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_hash(args: HashArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let secret = Secret::from_hex(&args.secret).context("secret must be 32 bytes of hex")?;
    let hash = SecretHasher::commit(&secret);
    match format {
        OutputFormat::Json => println!("{}", json!({ "hash": hash.to_hex() })),
        OutputFormat::Text => println!("{}", hash.to_hex()),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_verify(args: VerifyArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let verified = verify_secret(&args.secret, &args.expected_hash)?;
    match format {
        OutputFormat::Json => println!("{}", json!({ "verified": verified })),
        OutputFormat::Text if verified => println!("{} Secret matches hash", "✓".green().bold()),
        OutputFormat::Text => println!("{} Invalid secret - hash mismatch", "✗".red().bold()),
    }
    Ok(if verified { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn verify_secret(secret: &str, expected_hash: &str) -> anyhow::Result<bool> {
    let secret = Secret::from_hex(secret).context("secret must be 32 bytes of hex")?;
    let expected = SecretHash::from_hex(expected_hash).context("hash must be 32 bytes of hex")?;
    let (_, verified) = SecretHasher::verify(&secret, &expected);
    Ok(verified)
}

fn cmd_backup_show(path: &Path, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let backup = TransactionBackup::load(path)
        .with_context(|| format!("reading backup {}", path.display()))?;
    match format {
        OutputFormat::Json => println!("{}", backup.to_json_pretty()?),
        OutputFormat::Text => {
            println!("Backup v{} exported {}", backup.version, backup.export_date.to_rfc3339().dimmed());
            for tx in &backup.transactions {
                let status = if tx.success { "success".green() } else { "failed".red() };
                let hash = tx
                    .secret_hash
                    .or(tx.expected_hash)
                    .map(|h| h.preview())
                    .unwrap_or_default();
                println!("  {} {} {} {}", tx.tx_id.to_string().yellow(), tx.kind, hash.dimmed(), status);
            }
            println!("{} transactions", backup.transactions.len().to_string().bold());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_backup_merge(
    existing: &Path,
    incoming: &Path,
    output: &Path,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let merged = merge_backup_files(existing, incoming)?;
    merged
        .save(output)
        .with_context(|| format!("writing backup {}", output.display()))?;
    match format {
        OutputFormat::Json => println!("{}", json!({ "transactions": merged.transactions.len() })),
        OutputFormat::Text => println!(
            "{} Merged into {} ({} transactions)",
            "✓".green().bold(),
            output.display().to_string().bold(),
            merged.transactions.len()
        ),
    }
    Ok(ExitCode::SUCCESS)
}

fn merge_backup_files(existing: &Path, incoming: &Path) -> anyhow::Result<TransactionBackup> {
    let base = if existing.exists() {
        TransactionBackup::load(existing)
            .with_context(|| format!("reading backup {}", existing.display()))?
    } else {
        TransactionBackup::new(Vec::new())
    };
    let other = TransactionBackup::load(incoming)
        .with_context(|| format!("reading backup {}", incoming.display()))?;

    let mut merged = TransactionBackup::new(base.transactions);
    merged.import(other);
    Ok(merged)
}
