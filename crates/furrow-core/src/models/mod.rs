//! Data models for plants and calendar events.
//!
//! This module contains the domain types shared by the calendar engine and the
//! catalog:
//!
//! - [`PlantRule`]: the relative-offset rules for one plant, the only input the
//!   calendar engine reads
//! - [`PlantRecord`]: a catalog row, a rule plus description, notes and the
//!   favorite flag
//! - [`CalendarEvent`] and [`EventKind`]: the dated actions produced by a
//!   calculation pass
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use furrow_core::models::{PlantRecord, PlantRule};
//!
//! let rule = PlantRule {
//!     start_indoors_days_before_frost: Some(42),
//!     transplant_days_after_frost: Some(14),
//!     ..PlantRule::new(1, "Tomato")
//! };
//! assert!(rule.starts_indoors());
//!
//! let record = PlantRecord::from(rule.clone());
//! assert!(!record.is_favorite);
//! assert_eq!(PlantRule::from(record), rule);
//! ```

pub mod event;
pub mod plant;


pub use event::{CalendarEvent, EventKind};
pub use plant::{PlantRecord, PlantRule};
