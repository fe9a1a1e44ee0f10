//! Furrow CLI Application
//!
//! Command-line interface for the furrow planting calendar.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{CalendarCommands, Cli};
use furrow_core::GardenBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        last_frost,
        year,
        command,
    } = Args::parse();

    let garden = GardenBuilder::new()
        .with_database_path(database_file)
        .with_last_frost(last_frost)
        .build()
        .await
        .context("Failed to initialize garden")?;

    let cli = Cli::new(garden, TerminalRenderer::new(!no_color), year);

    info!("Furrow started with last frost {last_frost}");

    match command {
        Some(Plant { command }) => cli.handle_plant_command(command).await,
        Some(Garden { command }) => cli.handle_garden_command(command).await,
        Some(Calendar { command }) => cli.handle_calendar_command(command).await,
        None => cli.handle_calendar_command(CalendarCommands::Agenda).await,
    }
}
