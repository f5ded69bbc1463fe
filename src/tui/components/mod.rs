//! # TUI Components
//!
//! All screens and widgets of the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields:
//! - `TitleBar`: app name, current screen, status message
//! - `TabBar`: the four root tabs
//!
//! ### Screens (Persistent State + Transient Wrapper)
//!
//! Each screen is built per frame with borrowed core state and a `&mut`
//! cursor that lives in `TuiState`:
//! - `HomeFeed`, `Explore`, `SavedList`, `ProfileView`, `VideoDetail`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: query input, emits `SearchEvent::Changed`
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── list_cursor.rs   (selection index for list screens)
//! ├── title_bar.rs
//! ├── tab_bar.rs
//! ├── search_box.rs
//! ├── home.rs
//! ├── explore.rs
//! ├── saved_list.rs
//! ├── profile.rs
//! └── video_detail.rs
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod list_cursor;
pub use list_cursor::ListCursor;
mod title_bar;
pub use title_bar::TitleBar;
mod tab_bar;
pub use tab_bar::TabBar;

pub mod explore;
pub mod home;
pub mod profile;
pub mod saved_list;
pub mod search_box;
pub mod video_detail;
pub use explore::{Explore, ExploreFocus, ExploreState};
pub use home::HomeFeed;
pub use profile::ProfileView;
pub use saved_list::SavedList;
pub use search_box::{SearchBox, SearchEvent};
pub use video_detail::VideoDetail;

/// Truncate to `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("Ocean", 10), "Ocean");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_str("Space Odyssey", 8), "Space...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_str("Space", 2), "..");
    }

    #[test]
    fn test_truncate_counts_columns_not_bytes() {
        // each CJK char is two columns wide
        assert_eq!(truncate_str("日本語のビデオ", 7), "日本...");
        assert_eq!(truncate_str("école", 5), "école");
    }
}
