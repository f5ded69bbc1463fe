//! # Explore Component
//!
//! Search box on top; below it one of three views:
//! - blank query: the popular-categories grid
//! - query with no matches: `No videos found for "<query>"`
//! - otherwise: the result list
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ExploreState` lives in `TuiState`
//! - `Explore` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use crate::core::catalog::VideoRecord;
use crate::core::search::{POPULAR_CATEGORIES, SearchState};
use crate::tui::component::Component;
use crate::tui::components::search_box::SearchBox;
use crate::tui::components::{ListCursor, truncate_str};
use crate::tui::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreFocus {
    Input,
    Results,
}

pub struct ExploreState {
    pub search_box: SearchBox,
    pub focus: ExploreFocus,
    pub results: ListCursor,
}

impl ExploreState {
    pub fn new(palette: Palette) -> Self {
        Self {
            search_box: SearchBox::new(palette),
            focus: ExploreFocus::Input,
            results: ListCursor::default(),
        }
    }

    pub fn typing(&self) -> bool {
        self.focus == ExploreFocus::Input
    }
}

pub struct Explore<'a> {
    pub state: &'a mut ExploreState,
    pub search: &'a SearchState,
    pub results: Vec<&'a VideoRecord>,
    pub palette: Palette,
}

impl Explore<'_> {
    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        let mut lines = vec![
            Line::from(Span::styled("Popular Categories", p.accent_style())),
            Line::from(""),
        ];
        for pair in POPULAR_CATEGORIES.chunks(2) {
            let left = format!("{:<16}", pair[0]);
            let right = pair.get(1).copied().unwrap_or("");
            lines.push(Line::from(vec![
                Span::styled(format!("  {left}"), p.base),
                Span::styled(right.to_string(), p.base),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_no_results(&self, frame: &mut Frame, area: Rect) {
        let message = format!("No videos found for \"{}\"", self.search.query);
        let paragraph = Paragraph::new(message)
            .style(self.palette.muted)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        self.state.results.clamp(self.results.len());
        let width = area.width.saturating_sub(12) as usize;
        let p = self.palette;

        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|video| {
                ListItem::new(Line::from(vec![
                    Span::styled(truncate_str(&video.title, width), p.base),
                    Span::styled(format!("  {}", video.duration_label), p.muted),
                ]))
            })
            .collect();

        let selected = match self.state.focus {
            ExploreFocus::Results => Some(self.state.results.selected),
            ExploreFocus::Input => None,
        };
        let list = List::new(items)
            .highlight_style(p.highlight)
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Component for Explore<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        self.state.search_box.focused = self.state.typing();
        self.state.search_box.render(frame, input_area);

        if self.search.is_blank() {
            self.render_categories(frame, body_area);
        } else if self.search.no_results() {
            self.render_no_results(frame, body_area);
        } else {
            self.render_results(frame, body_area);
        }
    }
}
