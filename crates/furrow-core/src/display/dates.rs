//! Calendar date formatting.

use std::fmt;

use jiff::civil::Date;

/// A date written as `YYYY-MM-DD (Weekday)`, used for agenda headings.
pub struct DayHeading(pub Date);

impl fmt::Display for DayHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d (%A)"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_day_heading() {
        assert_eq!(
            DayHeading(date(2024, 5, 15)).to_string(),
            "2024-05-15 (Wednesday)"
        );
    }
}
