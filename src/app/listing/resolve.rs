//! Per-day version resolution
//!
//! The portal keeps every reprocessed version of a day's file side by side.
//! [`VersionResolver`] reduces a listing to the newest version of each day.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::trace;

use crate::app::models::RemoteEntry;

/// Single-pass reduction of listing entries to one winner per day
///
/// A later entry replaces the recorded one only when its version is strictly
/// greater, so among identical versions the first one seen is kept. Winners
/// are returned in the order their day was first seen.
#[derive(Debug, Default)]
pub struct VersionResolver {
    slots: HashMap<NaiveDate, usize>,
    winners: Vec<RemoteEntry>,
}

impl VersionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one entry; returns true if it became the day's current winner
    pub fn offer(&mut self, entry: RemoteEntry) -> bool {
        match self.slots.entry(entry.date) {
            Entry::Vacant(slot) => {
                slot.insert(self.winners.len());
                self.winners.push(entry);
                true
            }
            Entry::Occupied(slot) => {
                let current = &mut self.winners[*slot.get()];
                if entry.version > current.version {
                    trace!("{} supersedes {}", entry.filename, current.filename);
                    *current = entry;
                    true
                } else {
                    trace!("Keeping {} over {}", current.filename, entry.filename);
                    false
                }
            }
        }
    }

    /// Number of distinct days seen so far
    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    /// Consume the resolver, yielding one entry per day
    pub fn finish(self) -> Vec<RemoteEntry> {
        self.winners
    }
}

/// Resolve a batch of entries to the newest version per day
pub fn resolve_latest<I>(entries: I) -> Vec<RemoteEntry>
where
    I: IntoIterator<Item = RemoteEntry>,
{
    let mut resolver = VersionResolver::new();
    for entry in entries {
        resolver.offer(entry);
    }
    resolver.finish()
}

/// Drop repeated file names, keeping the first occurrence
///
/// Used for categories without version history, where the same file is
/// usually linked more than once in a listing.
pub fn unique_filenames<I>(entries: I) -> Vec<RemoteEntry>
where
    I: IntoIterator<Item = RemoteEntry>,
{
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.filename.clone()))
        .collect()
}
