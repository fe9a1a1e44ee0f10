//! Command handlers and their clap argument wrappers.
//!
//! Every argument struct converts into the matching core parameter type with
//! a `From` implementation, so clap attributes never leak into the core
//! crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Garden operations
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand};
use furrow_core::{
    display::{Agenda, DayAgenda, MonthGrid, OperationStatus, Plants},
    params::{CalendarYear, DayLookup, Id, ImportPlants, ListPlants, SetFavorite},
    CalendarSync, FavoritesFeed, Garden, PlantRecord,
};
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

/// List catalog plants
#[derive(Args)]
pub struct ListPlantsArgs {
    /// Only show plants whose name contains this text
    #[arg(short, long, help = "Case-insensitive fragment of the plant name")]
    pub search: Option<String>,
}

impl From<ListPlantsArgs> for ListPlants {
    fn from(val: ListPlantsArgs) -> Self {
        ListPlants { search: val.search }
    }
}

/// Show one catalog plant with its schedule
#[derive(Args)]
pub struct ShowPlantArgs {
    #[arg(help = "Unique identifier of the plant to show")]
    pub id: u64,
}

impl From<ShowPlantArgs> for Id {
    fn from(val: ShowPlantArgs) -> Self {
        Id { id: val.id }
    }
}

/// Import plant definitions into the catalog
///
/// Without a file the bundled starter catalog is imported. Importing a plant
/// that already exists updates it and keeps it in the garden.
#[derive(Args)]
pub struct ImportPlantsArgs {
    #[arg(help = "JSON file holding an array of plant definitions")]
    pub file: Option<PathBuf>,
}

impl From<ImportPlantsArgs> for ImportPlants {
    fn from(val: ImportPlantsArgs) -> Self {
        ImportPlants { path: val.file }
    }
}

#[derive(Subcommand)]
pub enum PlantCommands {
    /// List catalog plants
    #[command(aliases = ["l", "ls"])]
    List(ListPlantsArgs),
    /// Show one plant with its schedule
    #[command(alias = "s")]
    Show(ShowPlantArgs),
    /// Import plant definitions
    #[command(alias = "i")]
    Import(ImportPlantsArgs),
}

/// Select a plant for a garden change
#[derive(Args)]
pub struct GardenPlantArgs {
    #[arg(help = "Unique identifier of the catalog plant")]
    pub id: u64,
}

impl From<GardenPlantArgs> for Id {
    fn from(val: GardenPlantArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum GardenCommands {
    /// List the plants in your garden
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a plant to your garden
    #[command(alias = "a")]
    Add(GardenPlantArgs),
    /// Remove a plant from your garden
    #[command(alias = "rm")]
    Remove(GardenPlantArgs),
    /// Add the plant if missing, remove it otherwise
    #[command(alias = "t")]
    Toggle(GardenPlantArgs),
}

/// Show the tasks of one day
#[derive(Args)]
pub struct DayArgs {
    #[arg(help = "Day to look up, as YYYY-MM-DD")]
    pub date: Date,
}

impl From<DayArgs> for DayLookup {
    fn from(val: DayArgs) -> Self {
        DayLookup { date: val.date }
    }
}

/// Show one month as a grid
#[derive(Args)]
pub struct MonthArgs {
    #[arg(
        value_parser = clap::value_parser!(i8).range(1..=12),
        help = "Month number, defaults to the month of the last frost"
    )]
    pub month: Option<i8>,
}

#[derive(Subcommand)]
pub enum CalendarCommands {
    /// Every day with scheduled tasks
    #[command(alias = "a")]
    Agenda,
    /// Tasks of one day
    #[command(alias = "d")]
    Day(DayArgs),
    /// Month grid with marked days
    #[command(alias = "m")]
    Month(MonthArgs),
}

/// Runs commands against a garden and renders their output.
pub struct Cli {
    garden: Garden,
    renderer: TerminalRenderer,
    year: Option<i16>,
}

impl Cli {
    pub fn new(garden: Garden, renderer: TerminalRenderer, year: Option<i16>) -> Self {
        Self {
            garden,
            renderer,
            year,
        }
    }

    pub async fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        match command {
            PlantCommands::List(args) => self.list_plants(&args.into()).await,
            PlantCommands::Show(args) => self.show_plant(&args.into()).await,
            PlantCommands::Import(args) => self.import_plants(&args.into()).await,
        }
    }

    pub async fn handle_garden_command(&self, command: GardenCommands) -> Result<()> {
        match command {
            GardenCommands::List => self.list_garden().await,
            GardenCommands::Add(args) => self.set_favorite(args.id, true).await,
            GardenCommands::Remove(args) => self.set_favorite(args.id, false).await,
            GardenCommands::Toggle(args) => self.toggle_favorite(&args.into()).await,
        }
    }

    pub async fn handle_calendar_command(&self, command: CalendarCommands) -> Result<()> {
        match command {
            CalendarCommands::Agenda => self.agenda().await,
            CalendarCommands::Day(args) => self.day(&args.into()).await,
            CalendarCommands::Month(args) => self.month(args.month).await,
        }
    }

    async fn list_plants(&self, params: &ListPlants) -> Result<()> {
        let plants = self
            .garden
            .list_plants(params)
            .await
            .context("Failed to list plants")?;

        let mut output = String::from("# Plant catalog\n\n");
        output.push_str(&Plants(plants).to_string());
        self.renderer.render(&output)
    }

    async fn show_plant(&self, params: &Id) -> Result<()> {
        let plant = self
            .garden
            .get_plant(params)
            .await
            .context("Failed to load plant")?
            .ok_or_else(|| anyhow!("Plant with ID {} not found", params.id))?;
        self.renderer.render(&plant.to_string())
    }

    async fn import_plants(&self, params: &ImportPlants) -> Result<()> {
        let count = self
            .garden
            .import_plants(params)
            .await
            .context("Failed to import plants")?;

        let source = match &params.path {
            Some(path) => path.display().to_string(),
            None => "the starter catalog".to_string(),
        };
        let status = OperationStatus::success(format!("Imported {count} plants from {source}"));
        self.renderer.render(&status.to_string())
    }

    async fn list_garden(&self) -> Result<()> {
        let plants: Vec<PlantRecord> = self
            .garden
            .list_plants(&ListPlants::default())
            .await
            .context("Failed to list plants")?
            .into_iter()
            .filter(|plant| plant.is_favorite)
            .collect();

        let mut output = String::from("# My garden\n\n");
        output.push_str(&Plants(plants).to_string());
        self.renderer.render(&output)
    }

    async fn set_favorite(&self, id: u64, favorite: bool) -> Result<()> {
        let plant = self
            .garden
            .set_favorite(&SetFavorite { id, favorite })
            .await
            .context("Failed to update garden")?;
        self.garden_changed(&plant).await
    }

    async fn toggle_favorite(&self, params: &Id) -> Result<()> {
        let plant = self
            .garden
            .toggle_favorite(params)
            .await
            .context("Failed to update garden")?;
        self.garden_changed(&plant).await
    }

    /// Reports a garden change and the calendar it produces.
    async fn garden_changed(&self, plant: &PlantRecord) -> Result<()> {
        let message = if plant.is_favorite {
            format!("Added {} to your garden", plant.name())
        } else {
            format!("Removed {} from your garden", plant.name())
        };

        let favorites = FavoritesFeed::new();
        let frost = self.garden.frost_date_feed(self.year)?;
        let mut sync = CalendarSync::new(&favorites, &frost);
        let published = self.garden.publish_favorites(&favorites).await?;
        let calendar = sync.refresh();
        debug!("Garden holds {published} plants after change");

        let mut output = OperationStatus::success(message).to_string();
        output.push_str(&format!(
            "\nYour calendar has {} tasks on {} days.\n",
            calendar.event_count(),
            calendar.len()
        ));
        self.renderer.render(&output)
    }

    async fn agenda(&self) -> Result<()> {
        let calendar = self
            .garden
            .calendar(&CalendarYear { year: self.year })
            .await
            .context("Failed to compute calendar")?;
        self.renderer.render(&Agenda(&calendar).to_string())
    }

    async fn day(&self, params: &DayLookup) -> Result<()> {
        let events = self
            .garden
            .events_on(params)
            .await
            .context("Failed to compute calendar")?;
        let day = DayAgenda {
            date: params.date,
            events: &events,
        };
        self.renderer.render(&day.to_string())
    }

    async fn month(&self, month: Option<i8>) -> Result<()> {
        let anchor = self.garden.anchor_date(self.year)?;
        let calendar = self
            .garden
            .calendar(&CalendarYear {
                year: Some(anchor.year()),
            })
            .await
            .context("Failed to compute calendar")?;

        let grid = MonthGrid::new(&calendar, anchor.year(), month.unwrap_or(anchor.month()))?;
        self.renderer.render(&grid.to_string())
    }
}
