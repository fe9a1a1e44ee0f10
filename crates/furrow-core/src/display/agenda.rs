//! Agenda views over a computed calendar.

use std::fmt;

use jiff::civil::Date;

use super::dates::DayHeading;
use crate::calendar::CalendarIndex;

/// Shown instead of an agenda when the garden produced no events.
pub const EMPTY_GARDEN_MESSAGE: &str = "Add plants to your garden to see calendar events.";

/// Every dated bucket of a calendar, in date order.
///
/// # Examples
///
/// ```rust
/// use furrow_core::{calendar::recompute, display::Agenda, models::PlantRule};
/// use jiff::civil::date;
///
/// let peas = PlantRule {
///     direct_sow_days_after_frost: Some(-35),
///     ..PlantRule::new(11, "Pea")
/// };
/// let index = recompute(&[peas], date(2024, 5, 15));
/// let output = Agenda(&index).to_string();
/// assert!(output.contains("- Pea: Direct sow seeds"));
/// ```
pub struct Agenda<'a>(pub &'a CalendarIndex);

impl fmt::Display for Agenda<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "{EMPTY_GARDEN_MESSAGE}");
        }

        match self.0.anchor() {
            Some(anchor) => writeln!(f, "# Planting calendar {} (last frost {anchor})", anchor.year())?,
            None => writeln!(f, "# Planting calendar")?,
        }

        for (date, labels) in self.0.date_index() {
            writeln!(f)?;
            writeln!(f, "## {}", DayHeading(*date))?;
            writeln!(f)?;
            for label in labels {
                writeln!(f, "- {label}")?;
            }
        }
        Ok(())
    }
}

/// What happens on one day.
pub struct DayAgenda<'a> {
    pub date: Date,
    pub events: &'a [String],
}

impl<'a> DayAgenda<'a> {
    /// Looks up `date` in a computed calendar.
    pub fn new(index: &'a CalendarIndex, date: Date) -> Self {
        Self {
            date,
            events: index.events_on(date),
        }
    }
}

impl fmt::Display for DayAgenda<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return writeln!(f, "No scheduled tasks for {}.", self.date);
        }

        writeln!(f, "## {}", DayHeading(self.date))?;
        writeln!(f)?;
        for label in self.events {
            writeln!(f, "- {label}")?;
        }
        Ok(())
    }
}
