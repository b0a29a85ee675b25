//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use resume_score_core::config::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP requests on stdin/stdout until the client disconnects.
///
/// Logs go to stderr and the log file only; stdout carries the protocol.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let lexicon = config
        .build_lexicon()
        .context("invalid lexicon in configuration")?;
    let server = ProjectServer::with_lexicon(lexicon, config.input_limit());

    info!("starting MCP server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server stopped")?;
    info!("MCP server shut down");
    Ok(())
}
