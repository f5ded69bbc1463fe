//! # Watch State
//!
//! Per-video like/save flags for the running session. Unknown ids read as the
//! default state; an entry is only stored once something about it changes.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchState {
    pub liked: bool,
    /// Local view state; mirrors the saved list once the change is confirmed.
    pub saved: bool,
}

#[derive(Debug, Default)]
pub struct WatchStateTracker {
    states: HashMap<String, WatchState>,
}

impl WatchStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, video_id: &str) -> WatchState {
        self.states.get(video_id).copied().unwrap_or_default()
    }

    /// Flip `liked` for one video and return its new state.
    pub fn toggle_liked(&mut self, video_id: &str) -> WatchState {
        let state = self.entry(video_id);
        state.liked = !state.liked;
        *state
    }

    /// Flip `saved` for one video and return its new state.
    pub fn toggle_saved(&mut self, video_id: &str) -> WatchState {
        let state = self.entry(video_id);
        state.saved = !state.saved;
        *state
    }

    /// Align the `saved` flag with the saved list. Does not create an entry
    /// when the value already matches.
    pub fn set_saved(&mut self, video_id: &str, saved: bool) {
        if self.get(video_id).saved != saved {
            self.entry(video_id).saved = saved;
        }
    }

    /// Number of videos with a stored state.
    #[cfg(test)]
    pub fn tracked(&self) -> usize {
        self.states.len()
    }

    /// Forget everything; the next session starts from defaults.
    #[cfg(test)]
    pub fn reset(&mut self) {
        self.states.clear();
    }

    fn entry(&mut self, video_id: &str) -> &mut WatchState {
        self.states.entry(video_id.to_string()).or_default()
    }
}
