//! markplan CLI application
//!
//! Command-line interface and MCP server for markdown task plans.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use markplan_core::PlannerBuilder;
use mcp::{run_stdio_server, MarkplanMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        plan_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_plan_path(plan_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("markplan started with plan file {}", planner.plan_path().display());

    match command {
        Some(Task { command }) => {
            Cli::new(planner, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Step { command }) => {
            Cli::new(planner, renderer)
                .handle_step_command(command)
                .await
        }
        Some(Issue { command }) => {
            Cli::new(planner, renderer)
                .handle_issue_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting markplan MCP server");
            run_stdio_server(MarkplanMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).show_plan().await,
    }
}
