//! # Search
//!
//! Case-insensitive substring search over titles and descriptions.
//!
//! Case folding uses `str::to_lowercase` (full Unicode lowercase mapping) on
//! both the query and every compared field. An empty or whitespace-only query
//! matches nothing; it clears results rather than listing the whole catalog.

use crate::core::catalog::VideoRecord;

/// Labels of the category grid shown while the query is empty.
pub const POPULAR_CATEGORIES: [&str; 8] = [
    "Action",
    "Comedy",
    "Drama",
    "Sci-Fi",
    "Documentary",
    "Animation",
    "Horror",
    "Thriller",
];

/// Returns every record whose title or description contains `query`,
/// in the order the records were given.
pub fn search<'a>(query: &str, records: &'a [VideoRecord]) -> Vec<&'a VideoRecord> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|video| {
            video.title.to_lowercase().contains(&needle)
                || video.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Explore-screen search state: the raw query and the ids it matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<String>,
}

impl SearchState {
    pub fn set_query(&mut self, query: String, records: &[VideoRecord]) {
        self.results = search(&query, records)
            .into_iter()
            .map(|video| video.id.clone())
            .collect();
        self.query = query;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    /// Whitespace-only queries count as empty.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// True when the query has text but nothing matched.
    pub fn no_results(&self) -> bool {
        !self.is_blank() && self.results.is_empty()
    }
}
