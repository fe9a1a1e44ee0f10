//! Push interface between the favorites source and the calendar engine.
//!
//! The favorites source publishes full snapshots into a [`FavoritesFeed`]; the
//! anchor date lives in a [`FrostDateFeed`]. A [`CalendarSync`] subscribes to
//! both and runs one complete [`recompute`] per emission, handing the result
//! to a [`CalendarSink`].
//!
//! Both feeds are `tokio::sync::watch` channels, so a subscriber only ever
//! sees the latest value. Snapshots published while a pass is running are not
//! queued: the next pass simply reads whatever is newest.

use std::sync::Arc;

use jiff::civil::Date;
use log::debug;
use tokio::sync::watch;

use super::aggregator::{recompute, CalendarIndex};
use crate::models::PlantRule;

/// An immutable, shareable snapshot of the favorited plants.
pub type Snapshot = Arc<[PlantRule]>;

/// Receiver of recomputed calendars, usually a display layer.
pub trait CalendarSink {
    /// Called with every freshly computed index.
    fn publish(&mut self, index: &CalendarIndex);
}

impl<F> CalendarSink for F
where
    F: FnMut(&CalendarIndex),
{
    fn publish(&mut self, index: &CalendarIndex) {
        self(index)
    }
}

/// Registration point for snapshots of the favorited plants.
///
/// Until the first snapshot is published the feed holds no collection at all,
/// which subscribers treat as an empty garden.
#[derive(Debug)]
pub struct FavoritesFeed {
    sender: watch::Sender<Option<Snapshot>>,
}

impl FavoritesFeed {
    /// Creates a feed that has not emitted yet.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Replaces the current snapshot and notifies every subscriber.
    pub fn publish(&self, favorites: impl Into<Snapshot>) {
        let snapshot = favorites.into();
        debug!("Publishing {} favorite plants", snapshot.len());
        self.sender.send_replace(Some(snapshot));
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> Option<Snapshot> {
        self.sender.borrow().clone()
    }

    /// Subscribes to future snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for FavoritesFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the anchor date and notifies subscribers when it changes.
#[derive(Debug)]
pub struct FrostDateFeed {
    sender: watch::Sender<Date>,
}

impl FrostDateFeed {
    /// Creates a feed starting at `anchor`.
    pub fn new(anchor: Date) -> Self {
        let (sender, _) = watch::channel(anchor);
        Self { sender }
    }

    /// Moves the anchor date. Setting the same date again is not an emission.
    pub fn set(&self, anchor: Date) {
        self.sender.send_if_modified(|current| {
            if *current == anchor {
                false
            } else {
                *current = anchor;
                true
            }
        });
    }

    /// Current anchor date.
    pub fn current(&self) -> Date {
        *self.sender.borrow()
    }

    /// Subscribes to anchor changes.
    pub fn subscribe(&self) -> watch::Receiver<Date> {
        self.sender.subscribe()
    }
}

/// Keeps a sink in step with the favorites and anchor feeds.
#[derive(Debug)]
pub struct CalendarSync {
    favorites: watch::Receiver<Option<Snapshot>>,
    anchor: watch::Receiver<Date>,
}

impl CalendarSync {
    /// Subscribes to both feeds.
    pub fn new(favorites: &FavoritesFeed, anchor: &FrostDateFeed) -> Self {
        Self {
            favorites: favorites.subscribe(),
            anchor: anchor.subscribe(),
        }
    }

    /// Runs one full pass over the latest snapshot and anchor, marking both as
    /// seen.
    pub fn refresh(&mut self) -> CalendarIndex {
        let snapshot = self.favorites.borrow_and_update().clone();
        let anchor = *self.anchor.borrow_and_update();
        let favorites: &[PlantRule] = snapshot.as_deref().unwrap_or_default();
        recompute(favorites, anchor)
    }

    /// Publishes the current calendar, then one recomputed calendar per
    /// change of either feed.
    ///
    /// Returns once either feed is dropped. A value published right before
    /// the drop is still delivered.
    pub async fn run<S: CalendarSink>(mut self, mut sink: S) {
        sink.publish(&self.refresh());

        loop {
            tokio::select! {
                changed = self.favorites.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                changed = self.anchor.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }

            let index = self.refresh();
            debug!("Recomputed calendar: {} marked dates", index.marked_dates().len());
            sink.publish(&index);
        }

        debug!("Calendar sync stopped, an input feed was closed");
    }
}
