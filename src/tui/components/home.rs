//! # Home Feed Component
//!
//! The Home tab: featured video, the continue-watching row, then every
//! category in catalog order. All sections are flattened into one list of
//! rows; only video rows can be selected.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding};

use crate::core::catalog::{Catalog, VideoRecord};
use crate::tui::component::Component;
use crate::tui::components::ListCursor;
use crate::tui::components::truncate_str;
use crate::tui::theme::Palette;

const PROGRESS_BAR_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRow<'a> {
    Header(&'a str),
    Featured(&'a VideoRecord),
    Continue(&'a VideoRecord),
    Video(&'a VideoRecord),
}

impl<'a> FeedRow<'a> {
    pub fn video(&self) -> Option<&'a VideoRecord> {
        match *self {
            FeedRow::Header(_) => None,
            FeedRow::Featured(v) | FeedRow::Continue(v) | FeedRow::Video(v) => Some(v),
        }
    }
}

/// Flatten the home sections into rows.
pub fn feed_rows(catalog: &Catalog) -> Vec<FeedRow<'_>> {
    let mut rows = Vec::new();

    if let Some(featured) = catalog.featured() {
        rows.push(FeedRow::Header("Featured"));
        rows.push(FeedRow::Featured(featured));
    }

    let continue_watching: Vec<&VideoRecord> = catalog.continue_watching().collect();
    if !continue_watching.is_empty() {
        rows.push(FeedRow::Header("Continue Watching"));
        rows.extend(continue_watching.into_iter().map(FeedRow::Continue));
    }

    for category in catalog.categories() {
        rows.push(FeedRow::Header(&category.name));
        rows.extend(catalog.category_videos(category).map(FeedRow::Video));
    }

    rows
}

/// Ids of the selectable rows, in row order.
pub fn selectable_ids<'a>(rows: &[FeedRow<'a>]) -> Vec<&'a str> {
    rows.iter()
        .filter_map(|row| row.video())
        .map(|video| video.id.as_str())
        .collect()
}

/// `[██████░░░░] 60%`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}

pub struct HomeFeed<'a> {
    pub catalog: &'a Catalog,
    pub cursor: &'a mut ListCursor,
    pub palette: Palette,
}

impl HomeFeed<'_> {
    fn row_item(&self, row: &FeedRow, width: usize) -> ListItem<'static> {
        let p = self.palette;
        match row {
            FeedRow::Header(name) => ListItem::new(Line::from(Span::styled(
                name.to_string(),
                p.accent_style().add_modifier(Modifier::UNDERLINED),
            ))),
            FeedRow::Featured(video) => ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_str(&video.title, width),
                    p.base.add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate_str(&video.description, width),
                    p.muted,
                )),
                Line::from(Span::styled(
                    format!("{} · {} views", video.duration_label, video.views_label),
                    p.muted,
                )),
            ]),
            FeedRow::Continue(video) => {
                let progress = video
                    .progress
                    .map(|pr| progress_bar(pr.percent, PROGRESS_BAR_WIDTH))
                    .unwrap_or_default();
                let remaining = video.remaining_time_label.as_deref().unwrap_or("");
                ListItem::new(vec![
                    Line::from(Span::styled(truncate_str(&video.title, width), p.base)),
                    Line::from(Span::styled(format!("{progress} {remaining}"), p.muted)),
                ])
            }
            FeedRow::Video(video) => ListItem::new(Line::from(vec![
                Span::styled(truncate_str(&video.title, width.saturating_sub(10)), p.base),
                Span::styled(format!("  {}", video.duration_label), p.muted),
            ])),
        }
    }
}

impl Component for HomeFeed<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = feed_rows(self.catalog);
        let selectable = selectable_ids(&rows).len();
        self.cursor.clamp(selectable);

        let width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = rows.iter().map(|row| self.row_item(row, width)).collect();

        // Map the cursor (n-th selectable row) back to a row index
        let selected_row = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.video().is_some())
            .nth(self.cursor.selected)
            .map(|(i, _)| i);

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .style(self.palette.base)
            .highlight_style(self.palette.highlight)
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(selected_row);
        frame.render_stateful_widget(list, area, &mut state);
    }
}
