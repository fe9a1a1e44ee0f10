//! Display implementations for domain models.
//!
//! Plants render as markdown with their schedule rules spelled out relative
//! to the last frost date. Events render as a single agenda line.

use std::fmt;

use crate::models::{CalendarEvent, EventKind, PlantRecord, PlantRule};

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.label())
    }
}

/// Phrase for a signed offset relative to the last frost date.
pub(crate) fn frost_offset(days: i32) -> String {
    match days {
        0 => "on the last frost date".to_string(),
        1 => "1 day after last frost".to_string(),
        -1 => "1 day before last frost".to_string(),
        d if d > 0 => format!("{d} days after last frost"),
        d => format!("{} days before last frost", d.unsigned_abs()),
    }
}

impl PlantRule {
    fn fmt_schedule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(days) = self.start_indoors_days_before_frost.filter(|d| *d > 0) {
            writeln!(f, "- Start indoors: {}", frost_offset(-days))?;
        }
        if let Some(days) = self.transplant_days_after_frost.filter(|_| self.starts_indoors()) {
            writeln!(f, "- Transplant: {}", frost_offset(days))?;
        }
        let transplanted = self.starts_indoors() && self.transplant_days_after_frost.is_some();
        if let Some(days) = self.direct_sow_days_after_frost.filter(|_| !transplanted) {
            writeln!(f, "- Direct sow: {}", frost_offset(days))?;
        }
        match (
            self.harvest_start_days_after_planting,
            self.harvest_end_days_after_planting,
        ) {
            (Some(start), Some(end)) if end > start => {
                writeln!(f, "- Harvest: {start} to {end} days after planting")?
            }
            (Some(start), _) => writeln!(f, "- Harvest: from {start} days after planting")?,
            (None, _) => {}
        }
        Ok(())
    }
}

impl fmt::Display for PlantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_favorite { " ★" } else { "" };
        writeln!(f, "# {}. {}{marker}", self.id(), self.name())?;
        writeln!(f)?;

        if self.rule.has_planting_offsets() {
            self.rule.fmt_schedule(f)?;
        } else {
            writeln!(f, "- No planting schedule")?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "## Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}
