//! Per-plant event calculation.
//!
//! A plant's events are derived by an ordered pipeline of small pure steps.
//! Each step reads the rule and the anchor date and returns the date it
//! contributes, if any. The effective planting date is passed explicitly from
//! the planting steps into the harvest step:
//!
//! ```text
//! indoor_start ──▶ transplant ──┐
//!                               ├──▶ planting date ──▶ harvest_window
//!                  direct_sow ──┘
//! ```

use jiff::{civil::Date, Span};
use log::{debug, trace, warn};

use crate::{
    error::{FurrowError, Result},
    models::{CalendarEvent, EventKind, PlantRule},
};

/// Dates of the harvest window, relative to the effective planting date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestWindow {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

/// Calculates every event for one plant in the calendar year of `anchor`.
///
/// Events come back in pipeline order: indoor start, transplant or direct
/// sow, harvest start, harvest end. Events whose date falls outside the
/// anchor's year are dropped. A date beyond the range `jiff` can represent
/// is outside every anchor year, so it only drops its own event. Missing or
/// non-positive offsets simply produce fewer events.
///
/// # Examples
///
/// ```rust
/// use furrow_core::{calendar::calculate, models::PlantRule};
/// use jiff::civil::date;
///
/// let lettuce = PlantRule {
///     direct_sow_days_after_frost: Some(-21),
///     harvest_start_days_after_planting: Some(45),
///     ..PlantRule::new(4, "Lettuce")
/// };
/// let events = calculate(&lettuce, date(2024, 5, 15));
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[0].date, date(2024, 4, 24));
/// ```
pub fn calculate(plant: &PlantRule, anchor: Date) -> Vec<CalendarEvent> {
    debug!(
        "Calculating events for {} (ID: {}) with frost date {anchor}",
        plant.name, plant.id
    );

    let mut events = Vec::new();
    let mut emit = |date: Option<Date>, kind: EventKind| {
        if let Some(date) = date {
            trace!(" -> {}: {date}", kind.description());
            events.push(CalendarEvent {
                date,
                plant_id: plant.id,
                plant_name: plant.name.clone(),
                kind,
            });
        }
    };

    emit(
        in_range(plant, EventKind::StartIndoors, indoor_start(plant, anchor)),
        EventKind::StartIndoors,
    );

    // An out-of-range transplant is still the planting: direct sow stays
    // suppressed and there is no harvest date to derive from it.
    let transplanted = transplant(plant, anchor);
    let sown = match &transplanted {
        Ok(planting) => direct_sow(plant, anchor, *planting),
        Err(_) => Ok(None),
    };
    let planted = match (&transplanted, &sown) {
        (Ok(transplanted), Ok(sown)) => transplanted.or(*sown),
        _ => None,
    };
    emit(
        in_range(plant, EventKind::Transplant, transplanted),
        EventKind::Transplant,
    );
    emit(in_range(plant, EventKind::DirectSow, sown), EventKind::DirectSow);

    let window = harvest_window(plant, planted);
    emit(window.start, EventKind::HarvestStart);
    emit(window.end, EventKind::HarvestEnd);

    let year = anchor.year();
    events.retain(|event| event.date.year() == year);
    events
}

/// Step 1: indoor seed start, `anchor - days` when the offset is positive.
pub fn indoor_start(plant: &PlantRule, anchor: Date) -> Result<Option<Date>> {
    if !plant.starts_indoors() {
        return Ok(None);
    }
    match plant.start_indoors_days_before_frost {
        Some(days) => shift(anchor, -i64::from(days)).map(Some),
        None => Ok(None),
    }
}

/// Step 2: transplant, `anchor + days`, only for plants started indoors.
pub fn transplant(plant: &PlantRule, anchor: Date) -> Result<Option<Date>> {
    match plant.transplant_days_after_frost {
        Some(days) if plant.starts_indoors() => shift(anchor, i64::from(days)).map(Some),
        Some(_) => {
            trace!(" -> Transplant offset ignored, {} is not started indoors", plant.name);
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Step 3: direct sow, `anchor + days`, unless the plant was already
/// transplanted.
pub fn direct_sow(
    plant: &PlantRule,
    anchor: Date,
    planting: Option<Date>,
) -> Result<Option<Date>> {
    match (plant.direct_sow_days_after_frost, planting) {
        (Some(days), None) => shift(anchor, i64::from(days)).map(Some),
        (Some(_), Some(_)) => {
            trace!(" -> Direct sow offset ignored, {} is transplanted", plant.name);
            Ok(None)
        }
        (None, _) => Ok(None),
    }
}

/// Steps 4 and 5: harvest start and end, relative to the effective planting
/// date.
///
/// Without a planting date there is no harvest. The end is only reported when
/// its offset is strictly greater than the start offset. Each date that falls
/// outside the representable range is left out on its own.
pub fn harvest_window(plant: &PlantRule, planting: Option<Date>) -> HarvestWindow {
    let Some(planted) = planting else {
        debug!(" -> No planting date for {}, skipping harvest", plant.name);
        return HarvestWindow::default();
    };
    let Some(start_days) = plant.harvest_start_days_after_planting else {
        return HarvestWindow::default();
    };

    let start = in_range(
        plant,
        EventKind::HarvestStart,
        shift(planted, i64::from(start_days)).map(Some),
    );
    let end = match plant.harvest_end_days_after_planting {
        Some(end_days) if end_days > start_days => in_range(
            plant,
            EventKind::HarvestEnd,
            shift(planted, i64::from(end_days)).map(Some),
        ),
        Some(end_days) => {
            warn!(
                " -> Harvest end ({end_days} days) for {} is not after start ({start_days} days), skipping end event",
                plant.name
            );
            None
        }
        None => None,
    };

    HarvestWindow { start, end }
}

/// Keeps a step's date, dropping one that `jiff` cannot represent.
fn in_range(plant: &PlantRule, kind: EventKind, step: Result<Option<Date>>) -> Option<Date> {
    step.unwrap_or_else(|e| {
        warn!(" -> {} for {} dropped: {e}", kind.description(), plant.name);
        None
    })
}

fn shift(date: Date, days: i64) -> Result<Date> {
    let span = Span::new()
        .try_days(days)
        .map_err(|e| FurrowError::date_arithmetic(format!("{days} days is out of range"), e))?;
    date.checked_add(span)
        .map_err(|e| FurrowError::date_arithmetic(format!("{date} shifted by {days} days"), e))
}
