//! # Saved List
//!
//! The session's saved videos, keyed by id. Ordering policy: most recently
//! saved first. Re-saving an id that is already present changes nothing,
//! including its position.

use std::collections::HashMap;
use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use log::{debug, warn};

use crate::core::catalog::SavedSeed;

/// Default strftime pattern for save-time labels ("Oct 3, 2026").
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub video_id: String,
    pub saved_at_label: String,
}

#[derive(Debug, Default)]
pub struct SavedList {
    entries: HashMap<String, SavedEntry>,
    /// Ids in save order, oldest first.
    order: Vec<String>,
}

impl SavedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from catalog seeds. The first seed is the most recent save.
    pub fn from_seed(seed: &[SavedSeed]) -> Self {
        let mut list = Self::new();
        for entry in seed.iter().rev() {
            list.add_saved(&entry.video_id, &entry.saved_at_label);
        }
        list
    }

    /// Insert an entry unless one already exists for `video_id`.
    /// Returns whether anything was inserted.
    pub fn add_saved(&mut self, video_id: &str, saved_at_label: &str) -> bool {
        if self.entries.contains_key(video_id) {
            return false;
        }
        debug!("Saving {} at {}", video_id, saved_at_label);
        self.entries.insert(
            video_id.to_string(),
            SavedEntry {
                video_id: video_id.to_string(),
                saved_at_label: saved_at_label.to_string(),
            },
        );
        self.order.push(video_id.to_string());
        true
    }

    /// Remove the entry for `video_id`. Returns whether one was present.
    pub fn remove_saved(&mut self, video_id: &str) -> bool {
        if self.entries.remove(video_id).is_none() {
            return false;
        }
        self.order.retain(|id| id != video_id);
        true
    }

    /// Entries, most recently saved first.
    pub fn list_saved(&self) -> Vec<&SavedEntry> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.entries.get(id))
            .collect()
    }

    pub fn is_saved(&self, video_id: &str) -> bool {
        self.entries.contains_key(video_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format a save time with a strftime pattern. An invalid pattern falls
/// back to `DEFAULT_DATE_FORMAT`.
pub fn timestamp_label<Tz: TimeZone>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut label = String::new();
    if write!(label, "{}", now.format(format)).is_err() {
        warn!("Invalid date format {:?}, using default", format);
        label = now.format(DEFAULT_DATE_FORMAT).to_string();
    }
    label
}
