//! # TabBar Component
//!
//! Bottom navigation bar with the four root tabs. Hidden while a detail
//! screen is on top of the stack.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::core::navigation::Tab;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct TabBar {
    pub active: Tab,
    pub palette: Palette,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
            .collect();
        let selected = Tab::ALL.iter().position(|t| *t == self.active);

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(self.palette.muted)
            .highlight_style(self.palette.accent_style())
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(self.palette.muted),
            );
        frame.render_widget(tabs, area);
    }
}
