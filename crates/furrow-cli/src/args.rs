use std::path::PathBuf;

use clap::{Parser, Subcommand};
use furrow_core::LastFrost;

use crate::cli::{CalendarCommands, GardenCommands, PlantCommands};

/// Planting calendar for the terminal
///
/// Furrow keeps a catalog of plants with sowing, transplanting and harvest
/// offsets relative to the last frost date. Plants added to the garden are
/// turned into a dated calendar of gardening tasks for the chosen year.
#[derive(Parser)]
#[command(version, about, name = "furrow")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/furrow/furrow.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Regional last frost date as MM-DD
    #[arg(long, global = true, default_value = "05-15")]
    pub last_frost: LastFrost,

    /// Calendar year. Defaults to the current year
    #[arg(long, global = true)]
    pub year: Option<i16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Furrow CLI
///
/// - `plant`: browse and import the plant catalog
/// - `garden`: choose which plants are grown
/// - `calendar`: view the dated tasks of the garden
#[derive(Subcommand)]
pub enum Commands {
    /// Browse and import catalog plants
    #[command(alias = "p")]
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Manage the plants in your garden
    #[command(alias = "g")]
    Garden {
        #[command(subcommand)]
        command: GardenCommands,
    },
    /// Show the planting calendar
    #[command(alias = "c")]
    Calendar {
        #[command(subcommand)]
        command: CalendarCommands,
    },
}
