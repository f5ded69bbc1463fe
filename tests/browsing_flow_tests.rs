//! End-to-end browsing flows through the public core API.
//!
//! Each test drives `update()` the way the TUI does and checks the state the
//! screens would render.

use std::sync::Arc;

use videostream::core::action::{Action, Effect, update};
use videostream::core::catalog::{Catalog, NotFoundError};
use videostream::core::config::{VideostreamConfig, resolve_with_env};
use videostream::core::navigation::{LoadState, Tab};
use videostream::core::search::search;
use videostream::core::state::App;

const CATALOG: &str = r#"{
    "videos": [
        { "id": "v1", "title": "Space Odyssey", "description": "A sci-fi epic",
          "video_url": "https://cdn.example/v1.mp4" },
        { "id": "v2", "title": "Comedy Night", "description": "Laughs all around",
          "youtube_id": "abc123" },
        { "id": "v3", "title": "Ocean Deep", "description": "Underwater documentary",
          "youtube_id": "def456" }
    ],
    "featured": "v1",
    "categories": [ { "id": "c1", "name": "Picks", "videos": ["v2", "v3"] } ],
    "related": ["v2", "v3"]
}"#;

fn app() -> App {
    let catalog = Catalog::from_json(CATALOG).expect("catalog is valid");
    let config = resolve_with_env(&VideostreamConfig::default(), None, None, |_| None);
    App::new(Arc::new(catalog), &config)
}

fn saved_ids(app: &App) -> Vec<String> {
    app.saved_videos()
        .iter()
        .map(|(video, _)| video.id.clone())
        .collect()
}

#[test]
fn search_matches_title_and_description() {
    let mut app = app();
    update(&mut app, Action::SelectTab(Tab::Explore));

    update(&mut app, Action::SearchQueryChanged("SPACE".to_string()));
    assert_eq!(app.search.results, vec!["v1".to_string()]);

    update(&mut app, Action::SearchQueryChanged("documentary".to_string()));
    assert_eq!(app.search.results, vec!["v3".to_string()]);

    update(&mut app, Action::SearchQueryChanged("zzz".to_string()));
    assert!(app.search.no_results());

    update(&mut app, Action::SearchQueryChanged("   ".to_string()));
    assert!(app.search.results.is_empty());
    assert!(!app.search.no_results());
}

#[test]
fn search_function_keeps_catalog_order() {
    let catalog = Catalog::from_json(CATALOG).expect("catalog is valid");
    let ids: Vec<&str> = search("o", catalog.videos())
        .iter()
        .map(|v| v.id.as_str())
        .collect();
    assert_eq!(ids, vec!["v1", "v2", "v3"]);
}

#[test]
fn save_list_and_remove() {
    let mut app = app();

    update(&mut app, Action::OpenVideo("v1".to_string()));
    update(&mut app, Action::ToggleSave { saved_at: "Jan 1, 2024".to_string() });
    update(&mut app, Action::Back);

    update(&mut app, Action::OpenVideo("v2".to_string()));
    update(&mut app, Action::ToggleSave { saved_at: "Jan 2, 2024".to_string() });
    update(&mut app, Action::Back);

    // newest first
    assert_eq!(saved_ids(&app), vec!["v2", "v1"]);
    assert!(app.watch_state("v1").saved);

    update(&mut app, Action::SelectTab(Tab::Saved));
    update(&mut app, Action::RemoveSaved("v1".to_string()));
    assert_eq!(saved_ids(&app), vec!["v2"]);
    assert!(!app.watch_state("v1").saved);
    assert_eq!(app.status_message, "Removed from saved");
}

#[test]
fn missing_video_shows_not_found_then_back() {
    let mut app = app();
    update(&mut app, Action::OpenVideo("nope".to_string()));

    let screen = app.nav.current().expect("detail screen pushed");
    assert_eq!(screen.load, LoadState::NotFound);
    assert!(app.current_video().is_none());

    // nothing to act on
    assert_eq!(update(&mut app, Action::Play), Effect::None);
    assert_eq!(update(&mut app, Action::ToggleLike), Effect::None);
    assert!(!app.watch_state("nope").liked);

    update(&mut app, Action::Back);
    assert!(app.nav.at_root());
    assert_eq!(app.nav.tab(), Tab::Home);
}

#[test]
fn lookup_error_names_the_id() {
    let catalog = Catalog::from_json(CATALOG).expect("catalog is valid");
    assert_eq!(
        catalog.get("nope").unwrap_err(),
        NotFoundError { video_id: "nope".to_string() }
    );
}

#[test]
fn play_resolves_direct_and_embed_urls() {
    let mut app = app();
    update(&mut app, Action::OpenVideo("v1".to_string()));
    assert_eq!(
        update(&mut app, Action::Play),
        Effect::Play("https://cdn.example/v1.mp4".to_string())
    );

    update(&mut app, Action::OpenVideo("v2".to_string()));
    assert_eq!(
        update(&mut app, Action::Share),
        Effect::Share("https://www.youtube.com/embed/abc123".to_string())
    );
    assert_eq!(app.nav.depth(), 2);
}

#[test]
fn tabs_do_not_switch_over_a_detail_screen() {
    let mut app = app();
    update(&mut app, Action::OpenVideo("v3".to_string()));
    update(&mut app, Action::SelectTab(Tab::Profile));
    assert_eq!(app.nav.tab(), Tab::Home);
    assert_eq!(app.current_video().map(|v| v.id.as_str()), Some("v3"));
}
