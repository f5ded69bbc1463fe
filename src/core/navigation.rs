//! # Navigation
//!
//! The active tab at the root plus a LIFO stack of video-detail screens.
//! Each detail screen is keyed only by its video id and carries its own load
//! state:
//!
//! ```text
//!            resolve(lookup hit)
//! Loading ───────────────────────▶ Found
//!    │
//!    │       resolve(lookup miss)
//!    └───────────────────────────▶ NotFound   (terminal; only exit is back)
//! ```

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::catalog::Catalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Explore,
    Saved,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Explore, Tab::Saved, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Explore => "Explore",
            Tab::Saved => "Saved",
            Tab::Profile => "Profile",
        }
    }

    fn position(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.position() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Tab::ALL[(self.position() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Found,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailScreen {
    pub video_id: String,
    pub load: LoadState,
}

impl DetailScreen {
    /// Settle a `Loading` screen against the catalog. Settled screens are
    /// left alone; there is no retry from `NotFound`.
    pub fn resolve(&mut self, catalog: &Catalog) -> LoadState {
        if self.load == LoadState::Loading {
            self.load = match catalog.get(&self.video_id) {
                Ok(_) => LoadState::Found,
                Err(e) => {
                    debug!("Detail screen settled as not found: {}", e);
                    LoadState::NotFound
                }
            };
        }
        self.load
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    tab: Tab,
    stack: Vec<DetailScreen>,
}

impl Navigator {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            stack: Vec::new(),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch tabs. Only possible at the root; returns whether the tab changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.at_root() || self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }

    pub fn navigate_to_video(&mut self, video_id: &str) {
        debug!("Push detail screen for {}", video_id);
        self.stack.push(DetailScreen {
            video_id: video_id.to_string(),
            load: LoadState::Loading,
        });
    }

    /// Pop the top screen. At the root this does nothing and returns false.
    pub fn navigate_back(&mut self) -> bool {
        let popped = self.stack.pop();
        if let Some(ref screen) = popped {
            debug!("Pop detail screen for {}", screen.video_id);
        }
        popped.is_some()
    }

    pub fn current(&self) -> Option<&DetailScreen> {
        self.stack.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut DetailScreen> {
        self.stack.last_mut()
    }

    /// Id of the top screen when its video was found.
    pub fn current_found(&self) -> Option<&str> {
        self.current()
            .filter(|screen| screen.load == LoadState::Found)
            .map(|screen| screen.video_id.as_str())
    }

    pub fn at_root(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut nav = Navigator::new(Tab::Home);
        nav.navigate_to_video("a");
        nav.navigate_to_video("b");
        assert_eq!(nav.current().map(|s| s.video_id.as_str()), Some("b"));

        assert!(nav.navigate_back());
        assert_eq!(nav.current().map(|s| s.video_id.as_str()), Some("a"));
        assert!(nav.navigate_back());
        assert!(nav.at_root());
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::new(Tab::Saved);
        assert!(!nav.navigate_back());
        assert!(nav.at_root());
        assert_eq!(nav.tab(), Tab::Saved);
    }

    #[test]
    fn test_new_screen_starts_loading() {
        let mut nav = Navigator::new(Tab::Home);
        nav.navigate_to_video("v1");
        assert_eq!(nav.current().unwrap().load, LoadState::Loading);
        assert_eq!(nav.current_found(), None);
    }

    #[test]
    fn test_resolve_found_and_not_found() {
        let catalog = sample_catalog();
        let mut nav = Navigator::new(Tab::Home);

        nav.navigate_to_video("v1");
        assert_eq!(nav.current_mut().unwrap().resolve(&catalog), LoadState::Found);
        assert_eq!(nav.current_found(), Some("v1"));

        nav.navigate_to_video("missing");
        assert_eq!(
            nav.current_mut().unwrap().resolve(&catalog),
            LoadState::NotFound
        );
        assert_eq!(nav.current_found(), None);
    }

    #[test]
    fn test_not_found_is_terminal() {
        let catalog = sample_catalog();
        let mut screen = DetailScreen {
            video_id: "missing".to_string(),
            load: LoadState::Loading,
        };
        screen.resolve(&catalog);
        assert_eq!(screen.resolve(&catalog), LoadState::NotFound);
    }

    #[test]
    fn test_not_found_follows_catalog_get() {
        let catalog = sample_catalog();
        for id in ["v2", "ghost", ""] {
            let mut screen = DetailScreen {
                video_id: id.to_string(),
                load: LoadState::Loading,
            };
            let expected = match catalog.get(id) {
                Ok(_) => LoadState::Found,
                Err(_) => LoadState::NotFound,
            };
            assert_eq!(screen.resolve(&catalog), expected, "id {id:?}");
        }
    }

    #[test]
    fn test_select_tab_only_at_root() {
        let mut nav = Navigator::new(Tab::Home);
        assert!(nav.select_tab(Tab::Explore));
        assert!(!nav.select_tab(Tab::Explore));

        nav.navigate_to_video("v1");
        assert!(!nav.select_tab(Tab::Profile));
        assert_eq!(nav.tab(), Tab::Explore);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Home.next(), Tab::Explore);
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Profile);
    }
}
