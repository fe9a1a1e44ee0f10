//! The planting calendar engine.
//!
//! The engine turns relative-offset plant rules into dated events and groups
//! them for display. It is made of two pure parts and one driver:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  FavoritesFeed  │    │   recompute()   │    │  CalendarSink   │
//! │  FrostDateFeed  │───▶│  calculate() ×n │───▶│ (CalendarIndex) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!       snapshots          pure aggregation         display layer
//! ```
//!
//! - [`calculator`]: per-plant event pipeline ([`calculate`])
//! - [`aggregator`]: merges all favorites into a [`CalendarIndex`]
//!   ([`recompute`])
//! - [`sync`]: the push interface ([`FavoritesFeed`], [`FrostDateFeed`]) and
//!   the [`CalendarSync`] driver that recomputes on every emission
//!
//! Calculation and aggregation never perform I/O and hold no state between
//! calls; every pass starts from a full snapshot.

pub mod aggregator;
pub mod calculator;
pub mod sync;


pub use aggregator::{recompute, CalendarIndex};
pub use calculator::{calculate, HarvestWindow};
pub use sync::{CalendarSink, CalendarSync, FavoritesFeed, FrostDateFeed, Snapshot};
