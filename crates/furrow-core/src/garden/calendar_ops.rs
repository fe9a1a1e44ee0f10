//! Calendar operations for the Garden.

use jiff::civil::Date;
use log::debug;

use super::Garden;
use crate::{
    calendar::{recompute, CalendarIndex, FavoritesFeed, FrostDateFeed},
    error::Result,
    params::{CalendarYear, DayLookup},
};

impl Garden {
    /// Resolves the configured last frost date in `year`, or in the current
    /// year when absent.
    pub fn anchor_date(&self, year: Option<i16>) -> Result<Date> {
        match year {
            Some(year) => self.last_frost.in_year(year),
            None => self.last_frost.current(),
        }
    }

    /// Computes the full calendar for the plants currently in the garden.
    pub async fn calendar(&self, params: &CalendarYear) -> Result<CalendarIndex> {
        let anchor = self.anchor_date(params.year)?;
        let favorites = self.favorite_plants().await?;
        debug!(
            "Computing calendar for {} favorites, last frost {anchor}",
            favorites.len()
        );
        Ok(recompute(&favorites, anchor))
    }

    /// Event labels scheduled on one day.
    pub async fn events_on(&self, params: &DayLookup) -> Result<Vec<String>> {
        let calendar = self
            .calendar(&CalendarYear {
                year: Some(params.date.year()),
            })
            .await?;
        Ok(calendar.events_on(params.date).to_vec())
    }

    /// Pushes the current garden into a favorites feed as one full snapshot.
    /// Returns the number of plants published.
    pub async fn publish_favorites(&self, feed: &FavoritesFeed) -> Result<usize> {
        let favorites = self.favorite_plants().await?;
        let count = favorites.len();
        feed.publish(favorites);
        Ok(count)
    }

    /// Creates an anchor feed starting at the configured last frost date.
    pub fn frost_date_feed(&self, year: Option<i16>) -> Result<FrostDateFeed> {
        Ok(FrostDateFeed::new(self.anchor_date(year)?))
    }
}
