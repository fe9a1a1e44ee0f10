//! Display formatting for plants and calendars.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! calendar views are newtype wrappers borrowing a computed
//! [`crate::calendar::CalendarIndex`]. Everything renders as markdown, which
//! the CLI passes through its terminal renderer.
//!
//! - [`agenda`]: [`Agenda`] (every dated bucket) and [`DayAgenda`] (one day)
//! - [`month`]: [`MonthGrid`], a week grid with marked dates
//! - [`collections`]: [`Plants`], a compact catalog listing
//! - [`status`]: [`OperationStatus`] confirmation lines
//! - [`dates`]: date headings

pub mod agenda;
pub mod collections;
pub mod dates;
pub mod models;
pub mod month;
pub mod status;

pub use agenda::{Agenda, DayAgenda, EMPTY_GARDEN_MESSAGE};
pub use collections::Plants;
pub use dates::DayHeading;
pub use month::MonthGrid;
pub use status::OperationStatus;
