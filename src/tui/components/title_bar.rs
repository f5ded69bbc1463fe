//! # TitleBar Component
//!
//! Top status bar: app name, the current screen, and the latest status
//! message from the core.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Explore".to_string(), app.status_message.clone(), palette);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"VideoStream · Explore | Saved"`
//! 2. **Default**: `"VideoStream · Explore"`

use crate::tui::component::Component;
use crate::tui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Name of the visible screen (tab label or video title)
    pub screen: String,
    /// Status message from core state
    pub status_message: String,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(screen: String, status_message: String, palette: Palette) -> Self {
        Self {
            screen,
            status_message,
            palette,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!(" · {}", self.screen)
        } else {
            format!(" · {} | {}", self.screen, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("VideoStream", self.palette.accent_style()),
            Span::styled(self.text(), self.palette.base),
        ]);
        frame.render_widget(line, area);
    }
}
