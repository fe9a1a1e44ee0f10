//! Parameter structures for furrow operations.
//!
//! These structures are shared by every interface that drives a
//! [`crate::Garden`] and carry no framework-specific derives. The CLI defines
//! its own clap wrappers and converts them with `From` implementations:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Garden      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::path::PathBuf;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just a plant ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plant to operate on
    pub id: u64,
}

/// Parameters for listing catalog plants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlants {
    /// Case-insensitive fragment the plant name must contain
    pub search: Option<String>,
}

/// Parameters for adding a plant to or removing it from the garden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetFavorite {
    /// The ID of the plant
    pub id: u64,
    /// Whether the plant should be in the garden
    pub favorite: bool,
}

/// Parameters for importing plant definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportPlants {
    /// JSON file with an array of plant records. The bundled starter catalog
    /// is imported when absent.
    pub path: Option<PathBuf>,
}

/// Parameters selecting which calendar year to compute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarYear {
    /// Year of the pass, the current year when absent
    pub year: Option<i16>,
}

/// Parameters for a single-day lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLookup {
    /// The day to look up; the calendar is computed for its year
    pub date: Date,
}
