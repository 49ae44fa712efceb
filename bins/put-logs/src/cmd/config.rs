use std::path::PathBuf;

use clap::Args;
use emf_upload::UploadTarget;

use super::error::PutLogsError;

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct PutLogsArgs {
    /// Path to the log file to read. Must be valid JSON holding one log entry
    /// (a JSON object) or an array of them
    pub file: PathBuf,

    /// Log group to use
    #[arg(long)]
    pub log_group: String,

    /// Log stream to use
    #[arg(long)]
    pub log_stream: String,

    /// Region to use (default: resolved by the AWS SDK)
    #[arg(long)]
    pub region: Option<String>,
}

// ═══════════════════════════════════════════════════════════════
//  UploadConfig — validated args
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub file: PathBuf,
    pub target: UploadTarget,
    pub region: Option<String>,
}

impl UploadConfig {
    pub fn new(args: &PutLogsArgs) -> Result<Self, PutLogsError> {
        let log_group = non_empty("--log-group", &args.log_group)?;
        let log_stream = non_empty("--log-stream", &args.log_stream)?;
        let region = args
            .region
            .as_deref()
            .map(|r| non_empty("--region", r))
            .transpose()?;

        Ok(Self {
            file: args.file.clone(),
            target: UploadTarget { log_group, log_stream },
            region,
        })
    }
}

fn non_empty(flag: &str, value: &str) -> Result<String, PutLogsError> {
    if value.trim().is_empty() {
        return Err(PutLogsError::Config(format!("{flag} must not be empty")));
    }
    Ok(value.to_string())
}
