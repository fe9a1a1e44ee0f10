//! Calendar aggregation over the favorited plants.

use std::collections::{BTreeMap, BTreeSet};

use jiff::civil::Date;
use log::debug;
use serde::Serialize;

use super::calculator::calculate;
use crate::models::PlantRule;

/// The result of one aggregation pass.
///
/// Holds the date index (event labels grouped by date) and the set of marked
/// dates. Both are replaced wholesale by the next pass; an index is never
/// updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarIndex {
    anchor: Option<Date>,
    dates: BTreeMap<Date, Vec<String>>,
    marked: BTreeSet<Date>,
}

impl CalendarIndex {
    /// Anchor date of the pass that produced this index, `None` for an empty
    /// default index.
    pub fn anchor(&self) -> Option<Date> {
        self.anchor
    }

    /// Event labels grouped by date, dates in ascending order.
    pub fn date_index(&self) -> &BTreeMap<Date, Vec<String>> {
        &self.dates
    }

    /// Dates carrying at least one event.
    pub fn marked_dates(&self) -> &BTreeSet<Date> {
        &self.marked
    }

    /// Labels scheduled on `date`, empty when nothing happens that day.
    pub fn events_on(&self, date: Date) -> &[String] {
        self.dates.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `date` should carry a marker on a calendar widget.
    pub fn is_marked(&self, date: Date) -> bool {
        self.marked.contains(&date)
    }

    /// Whether the pass produced no events at all.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Number of distinct dates with events.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Total number of event labels across all dates.
    pub fn event_count(&self) -> usize {
        self.dates.values().map(Vec::len).sum()
    }

    /// Consumes the index, returning the date index and the marked dates.
    pub fn into_parts(self) -> (BTreeMap<Date, Vec<String>>, BTreeSet<Date>) {
        (self.dates, self.marked)
    }
}

/// Recomputes the full calendar for a snapshot of favorited plants.
///
/// Each plant's events are appended to their date bucket as
/// `"{plant}: {action}"`, in favorites order and then in the plant's own
/// event order. A date that cannot be represented only drops its own event,
/// so one plant never affects another.
///
/// # Examples
///
/// ```rust
/// use furrow_core::{calendar::recompute, models::PlantRule};
/// use jiff::civil::date;
///
/// let beans = PlantRule {
///     direct_sow_days_after_frost: Some(7),
///     ..PlantRule::new(1, "Beans")
/// };
/// let index = recompute(&[beans], date(2024, 5, 15));
/// assert_eq!(index.events_on(date(2024, 5, 22)), ["Beans: Direct sow seeds"]);
/// assert!(index.is_marked(date(2024, 5, 22)));
/// ```
pub fn recompute(favorites: &[PlantRule], anchor: Date) -> CalendarIndex {
    let mut index = CalendarIndex {
        anchor: Some(anchor),
        ..Default::default()
    };

    if favorites.is_empty() {
        debug!("No favorite plants, calendar is empty");
        return index;
    }

    for plant in favorites {
        for event in calculate(plant, anchor) {
            index.marked.insert(event.date);
            index.dates.entry(event.date).or_default().push(event.label());
        }
    }

    debug!(
        "Calculated {} events on {} dates for {} plants",
        index.event_count(),
        index.len(),
        favorites.len()
    );
    index
}
