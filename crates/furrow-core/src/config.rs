//! Anchor date configuration.
//!
//! The anchor of every calculation pass is the regional last frost date. It
//! is configured as a month and day and normalized to a concrete year on each
//! pass.

use std::{fmt, str::FromStr};

use jiff::{civil::Date, Zoned};
use serde::{Deserialize, Serialize};

use crate::error::{FurrowError, Result};

/// Month of the default last frost date.
pub const DEFAULT_FROST_MONTH: i8 = 5;

/// Day of the default last frost date.
pub const DEFAULT_FROST_DAY: i8 = 15;

/// A last frost date without a year, written `MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LastFrost {
    month: i8,
    day: i8,
}

impl LastFrost {
    /// Creates a last frost date, validating the month and day against a
    /// leap year so that `02-29` is accepted.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` if the pair is not a real
    /// calendar day.
    pub fn new(month: i8, day: i8) -> Result<Self> {
        Date::new(2000, month, day).map_err(|e| {
            FurrowError::invalid_input("last_frost").with_reason(format!("{month:02}-{day:02}: {e}"))
        })?;
        Ok(Self { month, day })
    }

    /// Month, 1 through 12.
    pub fn month(&self) -> i8 {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> i8 {
        self.day
    }

    /// Resolves the anchor date in the given year.
    ///
    /// A day past the end of the month in that year (Feb 29 outside leap
    /// years) is clamped to the month's last day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furrow_core::LastFrost;
    /// use jiff::civil::date;
    ///
    /// let frost = LastFrost::new(2, 29).unwrap();
    /// assert_eq!(frost.in_year(2024).unwrap(), date(2024, 2, 29));
    /// assert_eq!(frost.in_year(2025).unwrap(), date(2025, 2, 28));
    /// ```
    pub fn in_year(&self, year: i16) -> Result<Date> {
        let first = Date::new(year, self.month, 1).map_err(|e| {
            FurrowError::invalid_input("year").with_reason(format!("{year}: {e}"))
        })?;
        let day = self.day.min(first.days_in_month());
        Date::new(year, self.month, day).map_err(|e| {
            FurrowError::invalid_input("year").with_reason(format!("{year}: {e}"))
        })
    }

    /// Resolves the anchor date in the current year of the system clock.
    pub fn current(&self) -> Result<Date> {
        self.in_year(Zoned::now().year())
    }
}

impl Default for LastFrost {
    fn default() -> Self {
        Self {
            month: DEFAULT_FROST_MONTH,
            day: DEFAULT_FROST_DAY,
        }
    }
}

impl FromStr for LastFrost {
    type Err = FurrowError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            FurrowError::invalid_input("last_frost")
                .with_reason(format!("expected MM-DD, got '{s}'"))
        };
        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month = month.parse::<i8>().map_err(|_| invalid())?;
        let day = day.parse::<i8>().map_err(|_| invalid())?;
        Self::new(month, day)
    }
}

impl fmt::Display for LastFrost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl TryFrom<String> for LastFrost {
    type Error = FurrowError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LastFrost> for String {
    fn from(value: LastFrost) -> Self {
        value.to_string()
    }
}
