//! Plant rule and catalog record definitions.

use serde::{Deserialize, Serialize};

/// Relative-offset rules for one plant, read by the calendar engine.
///
/// Every offset is optional. Offsets that are absent simply produce fewer
/// events; none of them is ever an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantRule {
    /// Stable identifier of the plant in the catalog
    pub id: u64,

    /// Display name used in event labels
    pub name: String,

    /// Days before the last frost to start seeds indoors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_indoors_days_before_frost: Option<i32>,

    /// Days after the last frost to move seedlings outdoors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transplant_days_after_frost: Option<i32>,

    /// Days after the last frost to sow directly in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_sow_days_after_frost: Option<i32>,

    /// Days after planting when the harvest window opens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_start_days_after_planting: Option<i32>,

    /// Days after planting when the harvest window closes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_end_days_after_planting: Option<i32>,
}

impl PlantRule {
    /// Creates a rule with a name and no offsets.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the plant is started indoors.
    ///
    /// Only a present, positive indoor offset counts. This is the single gate
    /// used for the transplant step.
    pub fn starts_indoors(&self) -> bool {
        matches!(self.start_indoors_days_before_frost, Some(days) if days > 0)
    }

    /// Whether any of the frost-relative planting offsets is present.
    pub fn has_planting_offsets(&self) -> bool {
        self.start_indoors_days_before_frost.is_some()
            || self.transplant_days_after_frost.is_some()
            || self.direct_sow_days_after_frost.is_some()
    }
}

/// A plant as stored in the catalog: its rule plus catalog-only fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantRecord {
    /// Scheduling rule fed to the calendar engine
    #[serde(flatten)]
    pub rule: PlantRule,

    /// Free-form description of the plant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Growing notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Whether the plant is part of the user's garden
    #[serde(default)]
    pub is_favorite: bool,
}

impl PlantRecord {
    /// Shorthand for the record's catalog id.
    pub fn id(&self) -> u64 {
        self.rule.id
    }

    /// Shorthand for the record's display name.
    pub fn name(&self) -> &str {
        &self.rule.name
    }
}

impl From<PlantRecord> for PlantRule {
    fn from(record: PlantRecord) -> Self {
        record.rule
    }
}

impl From<PlantRule> for PlantRecord {
    fn from(rule: PlantRule) -> Self {
        Self {
            rule,
            ..Default::default()
        }
    }
}
