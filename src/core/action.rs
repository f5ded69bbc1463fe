//! # Actions
//!
//! Everything that can happen in VideoStream becomes an `Action`.
//! User picks a video? That's `Action::OpenVideo(id)`.
//! User types in the search box? That's `Action::SearchQueryChanged(query)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing the side effect the adapter should
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut app, action), expected)`.
//! And debuggable: log every action, replay the exact session.

use log::{debug, info};

use crate::core::navigation::{LoadState, Tab};
use crate::core::profile::Setting;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    NextTab,
    PrevTab,
    SearchQueryChanged(String),
    ClearSearch,
    /// Push a detail screen for this id.
    OpenVideo(String),
    /// Pop the top detail screen.
    Back,
    ToggleLike,
    /// `saved_at` labels the entry if this toggle saves the video.
    ToggleSave { saved_at: String },
    /// Remove from the saved list (Saved tab).
    RemoveSaved(String),
    Share,
    Play,
    ToggleSetting(Setting),
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Hand this URL to the player surface.
    Play(String),
    Share(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectTab(tab) => {
            select_tab(app, tab);
            Effect::None
        }
        Action::NextTab => {
            let tab = app.nav.tab().next();
            select_tab(app, tab);
            Effect::None
        }
        Action::PrevTab => {
            let tab = app.nav.tab().prev();
            select_tab(app, tab);
            Effect::None
        }
        Action::SearchQueryChanged(query) => {
            app.search.set_query(query, app.catalog.videos());
            Effect::None
        }
        Action::ClearSearch => {
            app.search.clear();
            Effect::None
        }
        Action::OpenVideo(video_id) => {
            open_video(app, &video_id);
            Effect::None
        }
        Action::Back => {
            if app.nav.navigate_back() {
                app.status_message.clear();
            }
            Effect::None
        }
        Action::ToggleLike => {
            if let Some(id) = app.nav.current_found().map(str::to_string) {
                let state = app.watch.toggle_liked(&id);
                app.status_message = if state.liked { "Liked" } else { "Like removed" }.to_string();
            }
            Effect::None
        }
        Action::ToggleSave { saved_at } => {
            if let Some(id) = app.nav.current_found().map(str::to_string) {
                // View state flips first, then the saved list confirms it.
                let state = app.watch.toggle_saved(&id);
                if state.saved {
                    app.saved.add_saved(&id, &saved_at);
                    app.status_message = "Saved".to_string();
                } else {
                    app.saved.remove_saved(&id);
                    app.status_message = "Removed from saved".to_string();
                }
            }
            Effect::None
        }
        Action::RemoveSaved(video_id) => {
            if app.saved.remove_saved(&video_id) {
                app.watch.set_saved(&video_id, false);
                app.status_message = "Removed from saved".to_string();
            }
            Effect::None
        }
        Action::Share => match current_playback(app) {
            Some((url, _)) => {
                app.status_message = "Sharing this video!".to_string();
                Effect::Share(url)
            }
            None => Effect::None,
        },
        Action::Play => match current_playback(app) {
            Some((url, title)) => {
                info!("Playing {} from {}", title, url);
                app.status_message = format!("Playing: {}", title);
                Effect::Play(url)
            }
            None => Effect::None,
        },
        Action::ToggleSetting(setting) => {
            let value = app.profile.settings.toggle(setting);
            app.status_message = format!(
                "{}: {}",
                setting.label(),
                if value { "on" } else { "off" }
            );
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn select_tab(app: &mut App, tab: Tab) {
    if app.nav.select_tab(tab) {
        app.status_message.clear();
    }
}

/// Playback URL and title of the found video on the top screen.
fn current_playback(app: &App) -> Option<(String, String)> {
    app.current_video()
        .map(|video| (video.playback_url(&app.embed_base_url), video.title.clone()))
}

fn open_video(app: &mut App, video_id: &str) {
    app.nav.navigate_to_video(video_id);
    let Some(screen) = app.nav.current_mut() else {
        return;
    };
    match screen.resolve(&app.catalog) {
        LoadState::Found => {
            app.watched.insert(video_id.to_string());
            if let Some(video) = app.catalog.lookup(video_id) {
                app.status_message = video.title.clone();
            }
        }
        LoadState::NotFound => {
            info!("Video not found: {}", video_id);
            app.status_message = "Video not found".to_string();
        }
        LoadState::Loading => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::DEFAULT_EMBED_BASE_URL;
    use crate::test_support::{seeded_app, test_app};

    fn save(app: &mut App) -> Effect {
        update(app, Action::ToggleSave { saved_at: "2024-01-01".to_string() })
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_open_found_video() {
        let mut app = test_app();
        update(&mut app, Action::OpenVideo("v1".to_string()));
        assert_eq!(app.nav.current().unwrap().load, LoadState::Found);
        assert_eq!(app.current_video().unwrap().title, "Space Odyssey");
        assert!(app.watched.contains("v1"));
    }

    #[test]
    fn test_open_missing_video_then_back() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Tab::Explore));
        update(&mut app, Action::OpenVideo("nope".to_string()));
        assert_eq!(app.nav.current().unwrap().load, LoadState::NotFound);
        assert_eq!(app.status_message, "Video not found");
        assert!(app.watched.is_empty());

        update(&mut app, Action::Back);
        assert!(app.nav.at_root());
        assert_eq!(app.nav.tab(), Tab::Explore);
    }

    #[test]
    fn test_actions_on_not_found_screen_are_noops() {
        let mut app = test_app();
        update(&mut app, Action::OpenVideo("nope".to_string()));

        assert_eq!(update(&mut app, Action::ToggleLike), Effect::None);
        assert_eq!(save(&mut app), Effect::None);
        assert_eq!(update(&mut app, Action::Play), Effect::None);
        assert_eq!(update(&mut app, Action::Share), Effect::None);
        assert!(app.saved.is_empty());
        assert_eq!(app.watch.tracked(), 0);
    }

    #[test]
    fn test_back_at_root_changes_nothing() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert!(app.nav.at_root());
    }

    #[test]
    fn test_toggle_save_syncs_saved_list() {
        let mut app = test_app();
        update(&mut app, Action::OpenVideo("v1".to_string()));

        save(&mut app);
        assert!(app.watch_state("v1").saved);
        assert!(app.saved.is_saved("v1"));
        assert_eq!(app.saved.list_saved()[0].saved_at_label, "2024-01-01");

        save(&mut app);
        assert!(!app.watch_state("v1").saved);
        assert!(!app.saved.is_saved("v1"));
    }

    #[test]
    fn test_toggle_like_twice_restores() {
        let mut app = test_app();
        update(&mut app, Action::OpenVideo("v2".to_string()));
        update(&mut app, Action::ToggleLike);
        assert!(app.watch_state("v2").liked);
        update(&mut app, Action::ToggleLike);
        assert!(!app.watch_state("v2").liked);
        assert!(!app.watch_state("v1").liked);
    }

    #[test]
    fn test_remove_saved_clears_watch_flag() {
        let mut app = seeded_app();
        assert!(app.watch_state("v3").saved);
        update(&mut app, Action::RemoveSaved("v3".to_string()));
        assert!(!app.saved.is_saved("v3"));
        assert!(!app.watch_state("v3").saved);
    }

    #[test]
    fn test_play_builds_playback_url() {
        let mut app = test_app();
        update(&mut app, Action::OpenVideo("v1".to_string()));
        assert_eq!(
            update(&mut app, Action::Play),
            Effect::Play("https://cdn.example/v1.mp4".to_string())
        );

        update(&mut app, Action::OpenVideo("v2".to_string()));
        assert_eq!(
            update(&mut app, Action::Play),
            Effect::Play(format!("{}/yt-v2", DEFAULT_EMBED_BASE_URL))
        );
    }

    #[test]
    fn test_share_sets_status() {
        let mut app = test_app();
        update(&mut app, Action::OpenVideo("v1".to_string()));
        assert!(matches!(update(&mut app, Action::Share), Effect::Share(_)));
        assert_eq!(app.status_message, "Sharing this video!");
    }

    #[test]
    fn test_search_actions() {
        let mut app = test_app();
        update(&mut app, Action::SearchQueryChanged("sci".to_string()));
        let ids: Vec<&str> = app.search_results().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1"]);

        update(&mut app, Action::SearchQueryChanged("  ".to_string()));
        assert!(app.search.results.is_empty());
        assert_eq!(app.search.query, "  ");

        update(&mut app, Action::ClearSearch);
        assert!(app.search.query.is_empty());
    }

    #[test]
    fn test_tabs_do_not_switch_under_detail_screen() {
        let mut app = test_app();
        update(&mut app, Action::NextTab);
        assert_eq!(app.nav.tab(), Tab::Explore);

        update(&mut app, Action::OpenVideo("v1".to_string()));
        update(&mut app, Action::PrevTab);
        assert_eq!(app.nav.tab(), Tab::Explore);
    }

    #[test]
    fn test_toggle_setting() {
        let mut app = test_app();
        update(&mut app, Action::ToggleSetting(Setting::DarkMode));
        assert!(!app.profile.settings.dark_mode);
        assert_eq!(app.status_message, "Dark Mode: off");
    }
}
