//! Emit command
//!
//! Usage: neoma emit --level <LEVEL> [--config <FILE>] [--min-level <LEVEL>]
//!        [--destination <DEST>] <MESSAGE> [CONTEXT]...

use clap::Args;
use neoma_core_types::LogLevel;
use neoma_logging::logging_facility::{init, Profile};
use neoma_logging::{Destination, LoggerService, LoggingConfiguration, LoggingModule};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Level of the call
    #[arg(short, long, default_value = "log")]
    pub level: LogLevel,

    /// TOML configuration file (logLevel, logDestination)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum level to forward, overriding configuration
    #[arg(long)]
    pub min_level: Option<LogLevel>,

    /// Destination overriding configuration: tracing, stdout, stderr, none, or a file path
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Message, logged verbatim
    pub message: String,

    /// Context arguments; each is parsed as JSON, falling back to a string
    #[arg(allow_hyphen_values = true)]
    pub context: Vec<String>,
}

/// Parse one context argument
pub fn parse_context_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Assemble configuration: file, then environment, then flags
fn load_configuration(args: &EmitArgs) -> neoma_errors::Result<LoggingConfiguration> {
    let mut config = match &args.config {
        Some(path) => LoggingConfiguration::from_file(path)?,
        None => LoggingConfiguration::default(),
    }
    .with_env_overrides();

    if let Some(level) = args.min_level {
        config.log_level = Some(level.to_string());
    }
    if let Some(destination) = &args.destination {
        config.log_destination = Some(destination.clone());
    }
    if config.log_destination.is_none() {
        config.log_destination = Some("stdout".to_string());
    }
    Ok(config)
}

/// Build the logger module for this invocation
fn build_module(args: &EmitArgs) -> neoma_errors::Result<LoggingModule> {
    let config = load_configuration(args)?;

    if config.destination()? == Some(Destination::Tracing) {
        init(Profile::Development);
    }

    Ok(LoggingModule::from_configuration(&config)?)
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> anyhow::Result<()> {
    let module = build_module(&args)?;
    let context: Vec<Value> = args.context.iter().map(|raw| parse_context_arg(raw)).collect();

    module
        .logger()
        .emit(args.level, Value::String(args.message), &context);

    Ok(())
}
