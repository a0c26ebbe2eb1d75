//! apply-edits - send a batch of layer edits to a feature service
//!
//! Reads an array of edit sets from a JSON file and applies them with one
//! `applyEdits` request.

use anyhow::{Context, bail};
use clap::Parser;
use feature_service::utils::{LogFormat, init_tracing};
use feature_service::{
    ApplyOptions, ClientConfig, EditSet, FeatureServiceClient, FeatureServiceError, config,
};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "apply-edits", version, about)]
struct Args {
    /// Feature service URL
    #[arg(long, env = "FEATURE_SERVICE_URL")]
    url: Option<String>,

    /// YAML configuration file, takes precedence over --url
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file holding an array of `{id, adds, updates, deletes}`
    #[arg(long)]
    edits: PathBuf,

    /// Do not ask the service to roll back on failure
    #[arg(long)]
    no_rollback: bool,

    /// Geodatabase version to edit
    #[arg(long)]
    gdb_version: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

/// How a completed run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Every row was applied
    Applied,
    /// The service rejected at least one row
    Rejected,
}

impl Outcome {
    fn exit_code(self) -> u8 {
        match self {
            Outcome::Applied => 0,
            Outcome::Rejected => 2,
        }
    }
}

/// Exit code for configuration, input and transport errors
const ERROR_EXIT_CODE: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    init_tracing(if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    });

    match run(args).await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

async fn run(args: Args) -> anyhow::Result<Outcome> {
    let config = match (&args.config, &args.url) {
        (Some(path), _) => ClientConfig::from_file(path).await?,
        // Remaining settings still come from the environment
        (None, Some(url)) => ClientConfig::from_lookup(|key| {
            if key == config::ENV_URL {
                Some(url.clone())
            } else {
                std::env::var(key).ok()
            }
        })?,
        (None, None) => bail!("either --url or --config is required"),
    };

    let content = tokio::fs::read_to_string(&args.edits)
        .await
        .with_context(|| format!("Failed to read edits file {}", args.edits.display()))?;
    let edits: Vec<EditSet<Value>> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse edits file {}", args.edits.display()))?;

    let client = FeatureServiceClient::from_config(config)?;
    info!(
        "Applying {} edit sets to {}",
        edits.len(),
        client.apply_edits_url()
    );

    let mut options = ApplyOptions::default().with_rollback(!args.no_rollback);
    if let Some(version) = args.gdb_version {
        options = options.with_gdb_version(version);
    }

    match client.apply_edits_with(&edits, options).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(Outcome::Applied)
        }
        Err(FeatureServiceError::Batch(batch)) => {
            println!("{}", serde_json::to_string_pretty(&batch)?);
            Ok(Outcome::Rejected)
        }
        Err(e) => Err(e.into()),
    }
}
