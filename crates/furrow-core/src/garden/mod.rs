//! High-level garden API over the catalog and the calendar engine.
//!
//! [`Garden`] is the async entry point used by the CLI. It owns the catalog
//! location and the configured last frost date:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   plant_ops     │    │    Catalog      │    │    SQLite       │
//! │ (spawn_blocking)│───▶│ (plant_queries) │───▶│  plant rules    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ┌─────────────────┐    ┌─────────────────┐
//! │  calendar_ops   │───▶│   recompute()   │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Catalog access is blocking I/O and runs on `tokio::task::spawn_blocking`.
//! Calendar computation is pure and runs inline once favorites are loaded.
//!
//! # Examples
//!
//! ```rust,no_run
//! use furrow_core::{params::{CalendarYear, SetFavorite}, GardenBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let garden = GardenBuilder::new()
//!     .with_database_path(Some("garden.db"))
//!     .build()
//!     .await?;
//!
//! garden.import_plants(&Default::default()).await?;
//! garden.set_favorite(&SetFavorite { id: 1, favorite: true }).await?;
//!
//! let calendar = garden.calendar(&CalendarYear::default()).await?;
//! for (date, labels) in calendar.date_index() {
//!     println!("{date}: {}", labels.join(", "));
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::config::LastFrost;

pub mod builder;
pub mod calendar_ops;
pub mod plant_ops;

pub use builder::GardenBuilder;

/// Main garden interface over the plant catalog and the calendar.
pub struct Garden {
    pub(crate) db_path: PathBuf,
    pub(crate) last_frost: LastFrost,
}

impl Garden {
    /// Creates a garden over an initialized catalog.
    pub(crate) fn new(db_path: PathBuf, last_frost: LastFrost) -> Self {
        Self {
            db_path,
            last_frost,
        }
    }

    /// The configured last frost date.
    pub fn last_frost(&self) -> LastFrost {
        self.last_frost
    }
}
