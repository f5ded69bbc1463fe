//! # Saved List Component
//!
//! The Saved tab: saved videos, most recently saved first, each with its
//! save label. Empty list shows a hint instead.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::catalog::VideoRecord;
use crate::tui::component::Component;
use crate::tui::components::{ListCursor, truncate_str};
use crate::tui::theme::Palette;

pub struct SavedList<'a> {
    /// (record, saved-at label), newest first
    pub entries: Vec<(&'a VideoRecord, &'a str)>,
    pub cursor: &'a mut ListCursor,
    pub palette: Palette,
}

impl Component for SavedList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(p.muted)
            .title(" Saved Videos ")
            .title_bottom(Line::from(" Enter open  d remove ").centered())
            .padding(Padding::horizontal(1));

        if self.entries.is_empty() {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled("No saved videos", p.base.add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(
                    "Videos you save will appear here for easy access",
                    p.muted,
                )),
            ];
            let empty = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.cursor.clamp(self.entries.len());
        let width = area.width.saturating_sub(8) as usize;

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|(video, saved_at)| {
                ListItem::new(vec![
                    Line::from(Span::styled(truncate_str(&video.title, width), p.base)),
                    Line::from(Span::styled(
                        format!("{} · Saved on {}", video.duration_label, saved_at),
                        p.muted,
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(p.highlight)
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.cursor.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
