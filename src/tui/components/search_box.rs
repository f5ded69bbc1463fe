//! # SearchBox Component
//!
//! Single-line query input for the Explore tab.
//!
//! ## State Management
//!
//! The buffer and the cursor (a byte offset, always on a char boundary) are
//! internal state. `focused` is a prop from the Explore screen. Every edit
//! emits `SearchEvent::Changed` with the full query so the core can re-run
//! the search on each keystroke.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const PLACEHOLDER: &str = "Search videos...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Changed(String),
}

pub struct SearchBox {
    pub buffer: String,
    pub focused: bool,
    pub palette: Palette,
    cursor: usize,
}

impl SearchBox {
    pub fn new(palette: Palette) -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            palette,
            cursor: 0,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    #[cfg(test)]
    fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                let mut encoded = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .filter(|c| !c.is_control())
                    .collect();
                if flat.is_empty() {
                    return None;
                }
                self.insert_str(&flat);
                self.changed()
            }
            TuiEvent::Backspace => {
                let start = self.prev_boundary()?;
                self.buffer.replace_range(start..self.cursor, "");
                self.cursor = start;
                self.changed()
            }
            TuiEvent::Delete => {
                let end = self.next_boundary()?;
                self.buffer.replace_range(self.cursor..end, "");
                self.changed()
            }
            TuiEvent::CursorLeft => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::CursorRight => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                None
            }
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            self.palette.accent_style()
        } else {
            self.palette.muted
        };
        let block = Block::bordered().title(" Search ").border_style(border);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(self.palette.muted)
        } else {
            Paragraph::new(self.buffer.as_str()).style(self.palette.base)
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let offset = self.buffer[..self.cursor].width() as u16;
            let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_box() -> SearchBox {
        SearchBox::new(Palette::new(true))
    }

    fn type_str(sb: &mut SearchBox, text: &str) -> Option<SearchEvent> {
        let mut last = None;
        for c in text.chars() {
            last = sb.handle_event(&TuiEvent::InputChar(c));
        }
        last
    }

    #[test]
    fn test_typing_emits_full_query() {
        let mut sb = search_box();
        assert_eq!(
            type_str(&mut sb, "sci"),
            Some(SearchEvent::Changed("sci".to_string()))
        );
        assert_eq!(sb.cursor(), 3);
    }

    #[test]
    fn test_backspace_handles_multibyte() {
        let mut sb = search_box();
        type_str(&mut sb, "café");
        assert_eq!(
            sb.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("caf".to_string()))
        );
        assert_eq!(sb.cursor(), 3);
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut sb = search_box();
        assert_eq!(sb.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut sb = search_box();
        type_str(&mut sb, "ac");
        sb.handle_event(&TuiEvent::CursorLeft);
        type_str(&mut sb, "b");
        assert_eq!(sb.buffer, "abc");

        sb.handle_event(&TuiEvent::Delete);
        assert_eq!(sb.buffer, "ab");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut sb = search_box();
        assert_eq!(
            sb.handle_event(&TuiEvent::Paste("deep\nocean".to_string())),
            Some(SearchEvent::Changed("deep ocean".to_string()))
        );
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut sb = search_box();
        type_str(&mut sb, "xyz");
        sb.clear();
        assert!(sb.buffer.is_empty());
        assert_eq!(sb.cursor(), 0);
    }
}
