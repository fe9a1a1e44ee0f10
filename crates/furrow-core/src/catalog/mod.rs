//! SQLite plant catalog.
//!
//! The catalog stores plant definitions together with the favorite flag and
//! is the favorites provider for the calendar engine. Computed events are
//! never written here.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::PlantRecord,
};

pub mod plant_queries;
mod schema;

/// Starter catalog bundled with the library, a JSON array of plant records.
pub const BUNDLED_PLANTS: &str = include_str!("../../assets/plants.json");

/// Parses the bundled starter catalog.
pub fn bundled_plants() -> Result<Vec<PlantRecord>> {
    Ok(serde_json::from_str(BUNDLED_PLANTS)?)
}

/// Catalog connection and operations handler.
pub struct Catalog {
    connection: Connection,
}

impl Catalog {
    /// Opens the catalog database and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open catalog database")?;

        let catalog = Self { connection };
        catalog.initialize_schema()?;
        Ok(catalog)
    }

    /// Opens a private in-memory catalog.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory catalog")?;

        let catalog = Self { connection };
        catalog.initialize_schema()?;
        Ok(catalog)
    }
}
