use anyhow::{Context, Result};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};

mod config;
mod curl;
mod mcp;
mod utils;

use config::{Overrides, ServerConfig};
use curl::Executor;
use mcp::CurlServer;

/// MCP Curl - expose the local curl binary as MCP tools over stdio.
///
/// Tools:
///   curl_get / curl_post / curl_put / curl_delete   HTTP requests (response headers included)
///   curl_download                                   save a remote file (-O / -o)
///   curl_advanced                                   raw curl arguments, screened by a denylist
///
/// Settings / env:
///   -v / -vv        Increase verbosity (RUST_LOG overrides)
///   -q / --quiet    Errors only
///   --curl-bin      curl program to run (MCP_CURL_BIN)
///   --process-timeout  Kill curl after N seconds (MCP_CURL_PROCESS_TIMEOUT); off by default
///   -c / --config   JSON or YAML file with curl_bin / process_timeout_secs
///
/// Logs go to stderr; stdout is the MCP channel.
///
/// Example client config:
///   { "command": "mcp-curl", "args": ["--process-timeout", "120"] }
#[derive(Parser, Debug)]
#[command(
    name = "mcp-curl",
    version,
    author,
    about = "MCP Curl - curl as MCP tools over stdio",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long)]
    quiet: bool,

    /// curl program to execute (falls back to MCP_CURL_BIN, then "curl")
    #[arg(long = "curl-bin", value_name = "PATH")]
    curl_bin: Option<String>,

    /// Kill curl if it runs longer than this many seconds
    #[arg(long = "process-timeout", value_name = "SECS")]
    process_timeout: Option<f64>,

    /// Config file (JSON, or YAML by .yaml/.yml extension)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    if let Err(e) = run(cli) {
        tracing::error!("Fatal error in main(): {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = cli
        .config
        .as_deref()
        .map(config::load_config_file)
        .transpose()?;
    let settings = ServerConfig::resolve(
        Overrides {
            curl_bin: cli.curl_bin,
            process_timeout_secs: cli.process_timeout,
        },
        file,
        |key| std::env::var(key).ok(),
    )?;
    let executor = settings.executor();
    tracing::debug!(
        curl_bin = executor.program(),
        process_timeout = ?executor.timeout(),
        "resolved settings"
    );

    let rt = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    rt.block_on(serve(executor))
}

async fn serve(executor: Executor) -> Result<()> {
    let service = CurlServer::new(executor)
        .serve(stdio())
        .await
        .context("Failed to start MCP server on stdio")?;
    tracing::info!("Curl MCP Server running on stdio");

    let reason = service.waiting().await.context("MCP server task failed")?;
    tracing::debug!(?reason, "MCP server stopped");
    Ok(())
}
