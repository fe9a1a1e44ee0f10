//! Calendar event definitions.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The fixed vocabulary of planting actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Sow seeds in trays indoors
    StartIndoors,

    /// Move indoor seedlings outside
    Transplant,

    /// Sow seeds in their final place
    DirectSow,

    /// First day of the harvest window
    HarvestStart,

    /// Last day of the harvest window
    HarvestEnd,
}

impl EventKind {
    /// Human readable label for the action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furrow_core::models::EventKind;
    ///
    /// assert_eq!(EventKind::StartIndoors.description(), "Start seeds indoors");
    /// assert_eq!(EventKind::HarvestEnd.description(), "End harvest window");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            EventKind::StartIndoors => "Start seeds indoors",
            EventKind::Transplant => "Transplant seedlings",
            EventKind::DirectSow => "Direct sow seeds",
            EventKind::HarvestStart => "Begin harvesting",
            EventKind::HarvestEnd => "End harvest window",
        }
    }
}

/// One dated action for one plant, produced by a single calculation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Calendar date of the action
    pub date: Date,

    /// Catalog id of the source plant
    pub plant_id: u64,

    /// Display name of the source plant
    pub plant_name: String,

    /// Which action happens on this date
    pub kind: EventKind,
}

impl CalendarEvent {
    /// Action label, see [`EventKind::description`].
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// The line shown in a date bucket: `"{plant}: {action}"`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.plant_name, self.description())
    }
}
