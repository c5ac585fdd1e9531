//! `newscast` CLI - resolve news station requests from the command line

mod cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use newscast::NewsConfig;

#[derive(Parser)]
#[command(name = "newscast")]
#[command(about = "Resolve news stations to their latest playable bulletin")]
#[command(version)]
struct Cli {
    /// Log every probe and request
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ~/.config/newscast/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request to the newest bulletin stream
    Resolve {
        /// Source URL, optionally tagged as news//<url>
        request: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check whether a request would be handled (no network access)
    Check {
        /// Source URL, optionally tagged as news//<url>
        request: String,
    },

    /// List registered sources in check order
    Sources,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "newscast=debug" } else { "newscast=info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = match &cli.config {
        Some(path) => NewsConfig::load_from(path)?,
        None => NewsConfig::load()?,
    };

    match cli.command {
        Commands::Resolve { request, format } => cmd::resolve::cmd_resolve(&config, &request, format).await,
        Commands::Check { request } => cmd::check::cmd_check(&config, &request),
        Commands::Sources => cmd::sources::cmd_sources(&config),
    }
}
