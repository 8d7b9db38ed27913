use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use request_filter::utils::LoggingConfig;
use request_filter::{schema_export, validate_source};

#[derive(Parser)]
#[command(name = "request-filter", version, about = "Request filter configuration tool", author)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a filter configuration and print the normalized result
    Validate {
        /// Read the configuration from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print the normalized configuration as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration format description
    Schema {
        #[arg(long)]
        output: Option<PathBuf>,
        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> anyhow::Result<()> {
    LoggingConfig::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { file, json } => handle_validate(file, json)?,
        Command::Schema { output, compact } => handle_schema(output, !compact)?,
    }
    Ok(())
}

fn handle_validate(file: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let config = validate_source(file.as_deref())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", config.diagnostic());
    }
    Ok(())
}

fn handle_schema(output: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let content = schema_export(pretty)?;
    if let Some(path) = output {
        fs::write(&path, content)?;
        println!("Schema exported to `{}`", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
