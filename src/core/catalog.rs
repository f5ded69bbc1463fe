//! # Video Catalog
//!
//! The immutable, in-memory set of videos plus the groupings the home feed
//! shows. The catalog owns every `VideoRecord`; categories, the featured slot,
//! the continue-watching row, related videos and saved seeds all refer to
//! records by id.
//!
//! ```text
//! Catalog
//! ├── videos: Vec<VideoRecord>          // canonical records, file order
//! ├── index: HashMap<id, usize>         // id → position in `videos`
//! ├── categories: Vec<CategoryGroup>    // ordered id lists
//! ├── featured: Option<String>
//! ├── continue_watching: Vec<String>
//! ├── related: Vec<String>
//! └── saved_seed: Vec<SavedSeed>        // initial saved list, newest first
//! ```
//!
//! A catalog is validated once when it is built and never mutated afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

/// Default base for embed URLs built from a platform id.
pub const DEFAULT_EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Where a video's playback comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSource {
    /// A media URL the player can open as-is.
    Direct(String),
    /// An external-platform id, turned into an embed URL on demand.
    Embed { video_id: String },
}

impl PlaybackSource {
    /// The URL handed to the player surface.
    pub fn playback_url(&self, embed_base_url: &str) -> String {
        match self {
            PlaybackSource::Direct(url) => url.clone(),
            PlaybackSource::Embed { video_id } => {
                format!("{}/{}", embed_base_url.trim_end_matches('/'), video_id)
            }
        }
    }
}

/// Partial-watch information shown in the continue-watching row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchProgress {
    /// 0–100.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel: String,
    pub duration_label: String,
    pub views_label: String,
    pub upload_date_label: String,
    pub subscribers_label: String,
    pub thumbnail_url: String,
    pub playback: PlaybackSource,
    pub progress: Option<WatchProgress>,
    pub remaining_time_label: Option<String>,
}

impl VideoRecord {
    pub fn playback_url(&self, embed_base_url: &str) -> String {
        self.playback.playback_url(embed_base_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub id: String,
    pub name: String,
    pub video_ids: Vec<String>,
}

/// An entry of the initial saved list shipped with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSeed {
    pub video_id: String,
    pub saved_at_label: String,
}

/// Raised when a video id has no matching record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("video not found: {video_id}")]
pub struct NotFoundError {
    pub video_id: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate video id: {0}")]
    DuplicateId(String),
    #[error("{section} refers to unknown video id: {video_id}")]
    UnknownReference { section: String, video_id: String },
    #[error("video {0} has neither video_url nor youtube_id")]
    MissingPlayback(String),
}

// ============================================================================
// On-disk format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    videos: Vec<VideoEntry>,
    #[serde(default)]
    categories: Vec<CategoryEntry>,
    #[serde(default)]
    featured: Option<String>,
    #[serde(default)]
    continue_watching: Vec<String>,
    #[serde(default)]
    related: Vec<String>,
    #[serde(default)]
    saved: Vec<SavedEntryFile>,
}

#[derive(Debug, Deserialize)]
struct VideoEntry {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    views: String,
    #[serde(default)]
    upload_date: String,
    #[serde(default)]
    subscribers: String,
    #[serde(default)]
    thumbnail: String,
    video_url: Option<String>,
    youtube_id: Option<String>,
    progress: Option<f64>,
    remaining_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    id: String,
    name: String,
    #[serde(default)]
    videos: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SavedEntryFile {
    video_id: String,
    saved_at: String,
}

impl TryFrom<VideoEntry> for VideoRecord {
    type Error = CatalogError;

    fn try_from(entry: VideoEntry) -> Result<Self, Self::Error> {
        // A direct URL wins over the platform id.
        let playback = match (entry.video_url, entry.youtube_id) {
            (Some(url), _) if !url.trim().is_empty() => PlaybackSource::Direct(url),
            (_, Some(video_id)) if !video_id.trim().is_empty() => {
                PlaybackSource::Embed { video_id }
            }
            _ => return Err(CatalogError::MissingPlayback(entry.id)),
        };

        Ok(VideoRecord {
            id: entry.id,
            title: entry.title,
            description: entry.description,
            channel: entry.channel,
            duration_label: entry.duration,
            views_label: entry.views,
            upload_date_label: entry.upload_date,
            subscribers_label: entry.subscribers,
            thumbnail_url: entry.thumbnail,
            playback,
            progress: entry.progress.map(|p| WatchProgress {
                percent: p.clamp(0.0, 100.0).round() as u8,
            }),
            remaining_time_label: entry.remaining_time,
        })
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<VideoRecord>,
    index: HashMap<String, usize>,
    categories: Vec<CategoryGroup>,
    featured: Option<String>,
    continue_watching: Vec<String>,
    related: Vec<String>,
    saved_seed: Vec<SavedSeed>,
}

impl Catalog {
    /// Build a catalog from bare records. Fails on duplicate ids.
    pub fn from_videos(videos: Vec<VideoRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(videos.len());
        for (pos, video) in videos.iter().enumerate() {
            if index.insert(video.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(video.id.clone()));
            }
        }
        Ok(Self {
            videos,
            index,
            ..Default::default()
        })
    }

    /// The mock catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        info!(
            "Loaded catalog from {} ({} videos)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let videos = file
            .videos
            .into_iter()
            .map(VideoRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let mut catalog = Self::from_videos(videos)?;

        for category in file.categories {
            catalog.check_refs(&format!("category {}", category.id), &category.videos)?;
            catalog.categories.push(CategoryGroup {
                id: category.id,
                name: category.name,
                video_ids: category.videos,
            });
        }

        if let Some(ref featured) = file.featured {
            catalog.check_refs("featured", std::slice::from_ref(featured))?;
        }
        catalog.featured = file.featured;

        catalog.check_refs("continue_watching", &file.continue_watching)?;
        catalog.continue_watching = file.continue_watching;

        catalog.check_refs("related", &file.related)?;
        catalog.related = file.related;

        for seed in file.saved {
            catalog.check_refs("saved", std::slice::from_ref(&seed.video_id))?;
            catalog.saved_seed.push(SavedSeed {
                video_id: seed.video_id,
                saved_at_label: seed.saved_at,
            });
        }

        debug!(
            "Catalog built: {} videos, {} categories",
            catalog.videos.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    fn check_refs(&self, section: &str, ids: &[String]) -> Result<(), CatalogError> {
        match ids.iter().find(|id| !self.index.contains_key(id.as_str())) {
            Some(missing) => Err(CatalogError::UnknownReference {
                section: section.to_string(),
                video_id: missing.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&VideoRecord> {
        self.index.get(id).map(|&pos| &self.videos[pos])
    }

    pub fn get(&self, id: &str) -> Result<&VideoRecord, NotFoundError> {
        self.lookup(id).ok_or_else(|| NotFoundError {
            video_id: id.to_string(),
        })
    }

    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    /// Records of a category in category order.
    pub fn category_videos<'a>(
        &'a self,
        category: &'a CategoryGroup,
    ) -> impl Iterator<Item = &'a VideoRecord> + 'a {
        self.resolve_all(&category.video_ids)
    }

    pub fn featured(&self) -> Option<&VideoRecord> {
        self.featured.as_deref().and_then(|id| self.lookup(id))
    }

    pub fn continue_watching(&self) -> impl Iterator<Item = &VideoRecord> + '_ {
        self.resolve_all(&self.continue_watching)
    }

    pub fn related(&self) -> impl Iterator<Item = &VideoRecord> + '_ {
        self.resolve_all(&self.related)
    }

    pub fn saved_seed(&self) -> &[SavedSeed] {
        &self.saved_seed
    }

    fn resolve_all<'a>(&'a self, ids: &'a [String]) -> impl Iterator<Item = &'a VideoRecord> + 'a {
        ids.iter().filter_map(|id| self.lookup(id))
    }
}
