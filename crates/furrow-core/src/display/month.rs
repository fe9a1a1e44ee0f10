//! Month grid with marked dates.

use std::fmt;

use jiff::{civil::Date, ToSpan};

use crate::{
    calendar::CalendarIndex,
    error::{FurrowError, Result},
};

const WEEKDAY_HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su";

/// A month laid out as a week grid, Monday first.
///
/// Days that carry at least one event are followed by `*`. The grid is
/// followed by the tasks of the marked days.
pub struct MonthGrid<'a> {
    index: &'a CalendarIndex,
    first: Date,
}

impl<'a> MonthGrid<'a> {
    /// Creates the grid for `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` if the year or month is out of
    /// range.
    pub fn new(index: &'a CalendarIndex, year: i16, month: i8) -> Result<Self> {
        let first = Date::new(year, month, 1).map_err(|e| {
            FurrowError::invalid_input("month").with_reason(format!("{year}-{month:02}: {e}"))
        })?;
        Ok(Self { index, first })
    }

    fn days(&self) -> impl Iterator<Item = Date> {
        self.first
            .series(1.day())
            .take(self.first.days_in_month() as usize)
    }
}

impl fmt::Display for MonthGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.first.strftime("%B %Y"))?;
        writeln!(f)?;
        writeln!(f, "```")?;
        writeln!(f, "{WEEKDAY_HEADER}")?;

        let mut line = "    ".repeat(self.first.weekday().to_monday_zero_offset() as usize);
        for date in self.days() {
            let marker = if self.index.is_marked(date) { '*' } else { ' ' };
            line.push_str(&format!("{:>3}{marker}", date.day()));
            if date.weekday().to_monday_zero_offset() == 6 {
                writeln!(f, "{}", line.trim_end())?;
                line.clear();
            }
        }
        if !line.is_empty() {
            writeln!(f, "{}", line.trim_end())?;
        }
        writeln!(f, "```")?;

        let marked: Vec<Date> = self.days().filter(|d| self.index.is_marked(*d)).collect();
        if marked.is_empty() {
            writeln!(f)?;
            writeln!(f, "No scheduled tasks this month.")?;
            return Ok(());
        }

        writeln!(f)?;
        for date in marked {
            writeln!(f, "- **{}**: {}", date.day(), self.index.events_on(date).join("; "))?;
        }
        Ok(())
    }
}
