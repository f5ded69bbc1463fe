//! # Application State
//!
//! Core business state for VideoStream. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>         // read-only, shared
//! ├── nav: Navigator                // active tab + detail screen stack
//! ├── search: SearchState           // explore query + matched ids
//! ├── watch: WatchStateTracker      // liked/saved flags per video
//! ├── saved: SavedList              // saved entries, newest first
//! ├── profile: Profile              // profile card + settings toggles
//! ├── watched: HashSet<String>      // videos opened this session
//! ├── embed_base_url: String        // for embed playback URLs
//! ├── date_format: String           // saved-at label format
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::catalog::{Catalog, VideoRecord};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Navigator;
use crate::core::profile::Profile;
use crate::core::saved::SavedList;
use crate::core::search::SearchState;
use crate::core::watch_state::{WatchState, WatchStateTracker};

pub struct App {
    pub catalog: Arc<Catalog>,
    pub nav: Navigator,
    pub search: SearchState,
    pub watch: WatchStateTracker,
    pub saved: SavedList,
    pub profile: Profile,
    /// Distinct videos opened (and found) this session.
    pub watched: HashSet<String>,
    pub embed_base_url: String,
    pub date_format: String,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, config: &ResolvedConfig) -> Self {
        let saved = SavedList::from_seed(catalog.saved_seed());
        let mut watch = WatchStateTracker::new();
        for entry in saved.list_saved() {
            watch.set_saved(&entry.video_id, true);
        }

        Self {
            catalog,
            nav: Navigator::new(config.start_tab),
            search: SearchState::default(),
            watch,
            saved,
            profile: Profile::from_config(config),
            watched: HashSet::new(),
            embed_base_url: config.embed_base_url.clone(),
            date_format: config.date_format.clone(),
            status_message: String::from("Welcome to VideoStream!"),
        }
    }

    /// The video on the top detail screen, if it was found.
    pub fn current_video(&self) -> Option<&VideoRecord> {
        self.nav
            .current_found()
            .and_then(|id| self.catalog.lookup(id))
    }

    pub fn watch_state(&self, video_id: &str) -> WatchState {
        self.watch.get(video_id)
    }

    /// Search results resolved to records, in catalog order.
    pub fn search_results(&self) -> Vec<&VideoRecord> {
        self.search
            .results
            .iter()
            .filter_map(|id| self.catalog.lookup(id))
            .collect()
    }

    /// Saved entries paired with their records, newest first.
    pub fn saved_videos(&self) -> Vec<(&VideoRecord, &str)> {
        self.saved
            .list_saved()
            .into_iter()
            .filter_map(|entry| {
                self.catalog
                    .lookup(&entry.video_id)
                    .map(|video| (video, entry.saved_at_label.as_str()))
            })
            .collect()
    }
}
