//! Core library for the Furrow planting calendar.
//!
//! This crate turns per-plant relative-offset rules into dated gardening
//! events anchored to a regional last frost date, and keeps that calendar in
//! step with the set of plants the gardener has chosen.
//!
//! # Architecture
//!
//! - **Calendar engine** ([`calendar`]): the pure per-plant calculator, the
//!   aggregator building a [`CalendarIndex`], and the push feeds that trigger
//!   a full recompute on every change
//! - **Catalog** ([`catalog`]): SQLite store of plant definitions and the
//!   favorite flag, the provider of favorited plants
//! - **Garden** ([`garden`]): async facade over catalog and engine used by the
//!   CLI
//! - **Display** ([`display`]): markdown renderings of plants and calendars
//!
//! # Quick Start
//!
//! ```rust
//! use furrow_core::{calendar::recompute, models::PlantRule, LastFrost};
//!
//! let tomato = PlantRule {
//!     start_indoors_days_before_frost: Some(10),
//!     transplant_days_after_frost: Some(14),
//!     harvest_start_days_after_planting: Some(30),
//!     harvest_end_days_after_planting: Some(45),
//!     ..PlantRule::new(1, "Tomato")
//! };
//!
//! let anchor = LastFrost::default().in_year(2024).unwrap();
//! let calendar = recompute(&[tomato], anchor);
//!
//! assert_eq!(calendar.marked_dates().len(), 4);
//! for (date, labels) in calendar.date_index() {
//!     println!("{date}: {}", labels.join(", "));
//! }
//! ```

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod garden;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use calendar::{
    calculate, recompute, CalendarIndex, CalendarSink, CalendarSync, FavoritesFeed,
    FrostDateFeed, Snapshot,
};
pub use catalog::Catalog;
pub use config::LastFrost;
pub use display::{Agenda, DayAgenda, MonthGrid, OperationStatus, Plants};
pub use error::{FurrowError, Result};
pub use garden::{Garden, GardenBuilder};
pub use models::{CalendarEvent, EventKind, PlantRecord, PlantRule};
