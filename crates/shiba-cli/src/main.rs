//! Shiba CLI Application
//!
//! Command-line interface for browsing a workout program and swapping
//! exercises, plus an MCP server exposing the same queries.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, ShibaMcpServer};
use renderer::TerminalRenderer;
use shiba_core::{DuplicatePolicy, LibraryBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        json,
        strict_ids,
        command,
    } = Args::parse();

    let policy = if strict_ids {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::FirstWins
    };

    let library = LibraryBuilder::new()
        .with_catalog_path(catalog_file)
        .with_duplicate_policy(policy)
        .build()
        .await
        .context("Failed to load exercise catalog")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Shiba started");

    match command {
        Some(Exercise { command }) => {
            Cli::new(library, renderer, json).handle_exercise_command(command)
        }
        Some(Sub { command }) => Cli::new(library, renderer, json).handle_sub_command(command),
        Some(Equipment { command }) => {
            Cli::new(library, renderer, json).handle_equipment_command(command)
        }
        Some(Workout { command }) => {
            Cli::new(library, renderer, json).handle_workout_command(command)
        }
        Some(Serve) => {
            info!("Starting Shiba MCP server");
            run_stdio_server(ShibaMcpServer::new(library))
                .await
                .context("MCP server failed")
        }
        Some(Summary) | None => Cli::new(library, renderer, json).summary(),
    }
}
