//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::{Catalog, PlaybackSource, VideoRecord};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// A record with only the searchable fields filled in.
pub fn video(id: &str, title: &str, description: &str) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        channel: "Test Channel".to_string(),
        duration_label: "1:00".to_string(),
        views_label: "1K".to_string(),
        upload_date_label: "today".to_string(),
        subscribers_label: "10".to_string(),
        thumbnail_url: format!("https://img.example/{id}.jpg"),
        playback: PlaybackSource::Embed {
            video_id: format!("yt-{id}"),
        },
        progress: None,
        remaining_time_label: None,
    }
}

/// v1 "Space Odyssey" (direct URL), v2 "Comedy Night", v3 "Ocean Deep".
pub fn sample_videos() -> Vec<VideoRecord> {
    let mut v1 = video("v1", "Space Odyssey", "A sci-fi epic");
    v1.playback = PlaybackSource::Direct("https://cdn.example/v1.mp4".to_string());
    vec![
        v1,
        video("v2", "Comedy Night", "Laughs all around"),
        video("v3", "Ocean Deep", "Underwater documentary"),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_videos(sample_videos()).expect("sample ids are unique")
}

/// App over `sample_catalog()` with default config and nothing saved.
pub fn test_app() -> App {
    App::new(Arc::new(sample_catalog()), &ResolvedConfig::default())
}

/// App over a catalog with home sections and `v3` pre-saved.
pub fn seeded_app() -> App {
    App::new(Arc::new(seeded_catalog()), &ResolvedConfig::default())
}

pub fn seeded_catalog() -> Catalog {
    let json = r#"{
        "videos": [
            { "id": "v1", "title": "Space Odyssey", "description": "A sci-fi epic", "video_url": "https://cdn.example/v1.mp4" },
            { "id": "v2", "title": "Comedy Night", "description": "Laughs all around", "youtube_id": "yt-v2" },
            { "id": "v3", "title": "Ocean Deep", "description": "Underwater documentary", "youtube_id": "yt-v3",
              "progress": 40, "remaining_time": "12 min left" }
        ],
        "featured": "v1",
        "continue_watching": ["v3"],
        "categories": [ { "id": "c1", "name": "Picks", "videos": ["v2", "v1"] } ],
        "related": ["v2"],
        "saved": [ { "video_id": "v3", "saved_at": "Jan 2, 2024" } ]
    }"#;
    Catalog::from_json(json).expect("seeded catalog is valid")
}
