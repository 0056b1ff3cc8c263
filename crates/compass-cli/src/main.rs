//! Compass CLI Application
//!
//! Command-line interface for the Compass study-recovery planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use compass_core::PlanStoreBuilder;
use log::info;
use mcp::{run_stdio_server, CompassMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize plan store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Compass started");

    match command {
        Some(Chat(args)) => Cli::new(store, renderer).chat(args).await,
        Some(Plan { command }) => {
            Cli::new(store, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Timer(args)) => Cli::new(store, renderer).timer(args).await,
        Some(Stats(args)) => Cli::new(store, renderer).stats(args).await,
        Some(Serve) => {
            info!("Starting Compass MCP server");
            run_stdio_server(CompassMcpServer::new(store))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(store, renderer).list_plans().await,
    }
}
