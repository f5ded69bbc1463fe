//! # Video Detail Component
//!
//! Renders the top detail screen for each load state:
//!
//! - `Loading`: a placeholder line
//! - `NotFound`: "Video not found" with a way back
//! - `Found`: player pane, metadata, actions, channel, description, related
//!
//! The player pane only shows the playback URL; `p` hands it to the player.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::catalog::{Catalog, VideoRecord};
use crate::core::navigation::{DetailScreen, LoadState};
use crate::core::watch_state::WatchState;
use crate::tui::component::Component;
use crate::tui::components::{ListCursor, truncate_str};
use crate::tui::theme::Palette;

/// Related videos shown under `current_id`, excluding itself.
pub fn related_for<'a>(catalog: &'a Catalog, current_id: &str) -> Vec<&'a VideoRecord> {
    catalog
        .related()
        .filter(|video| video.id != current_id)
        .collect()
}

pub struct VideoDetail<'a> {
    pub screen: &'a DetailScreen,
    pub video: Option<&'a VideoRecord>,
    pub watch: WatchState,
    pub playback_url: String,
    pub related: Vec<&'a VideoRecord>,
    pub cursor: &'a mut ListCursor,
    pub palette: Palette,
}

impl VideoDetail<'_> {
    fn render_message(&self, frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
    }

    fn actions_line(&self) -> Line<'static> {
        let p = self.palette;
        let toggle = |on: bool, on_label: &str, off_label: &str, key: char| {
            let style = if on { p.accent_style() } else { p.base };
            Span::styled(
                format!("[{key}] {}   ", if on { on_label } else { off_label }),
                style,
            )
        };
        Line::from(vec![
            toggle(self.watch.liked, "Liked", "Like", 'l'),
            toggle(self.watch.saved, "Saved", "Save", 's'),
            Span::styled("[r] Share", p.base),
        ])
    }

    fn render_found(&mut self, frame: &mut Frame, area: Rect, video: &VideoRecord) {
        let p = self.palette;
        let width = area.width.saturating_sub(4) as usize;

        let description = textwrap::wrap(&video.description, width.max(1));
        let description_height = description.len().min(6) as u16;

        let [player, meta, description_area, related_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(description_height + 1),
            Constraint::Min(0),
        ])
        .areas(area);

        let player_pane = Paragraph::new(vec![
            Line::from(Span::styled(truncate_str(&self.playback_url, width), p.muted)),
            Line::from(Span::styled("▶  p to play", p.accent_style())),
        ])
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(p.muted));
        frame.render_widget(player_pane, player);

        let meta_lines = vec![
            Line::from(Span::styled(
                truncate_str(&video.title, width),
                p.base.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} views • {}", video.views_label, video.upload_date_label),
                p.muted,
            )),
            Line::from(""),
            self.actions_line(),
            Line::from(""),
            Line::from(vec![
                Span::styled(video.channel.clone(), p.base.add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {} subscribers", video.subscribers_label), p.muted),
            ]),
        ];
        frame.render_widget(Paragraph::new(meta_lines), meta);

        let description_lines: Vec<Line> = description
            .into_iter()
            .take(description_height as usize)
            .map(|line| Line::from(Span::styled(line.into_owned(), p.base)))
            .collect();
        frame.render_widget(Paragraph::new(description_lines), description_area);

        self.cursor.clamp(self.related.len());
        let items: Vec<ListItem> = self
            .related
            .iter()
            .map(|related| {
                ListItem::new(Line::from(vec![
                    Span::styled(truncate_str(&related.title, width.saturating_sub(10)), p.base),
                    Span::styled(format!("  {}", related.duration_label), p.muted),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(p.muted)
                    .title(" Related Videos "),
            )
            .highlight_style(p.highlight)
            .highlight_symbol("▶ ");
        let selected = (!self.related.is_empty()).then_some(self.cursor.selected);
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, related_area, &mut state);
    }
}

impl Component for VideoDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        match (self.screen.load, self.video) {
            (LoadState::Found, Some(video)) => self.render_found(frame, area, video),
            (LoadState::Loading, _) => self.render_message(
                frame,
                area,
                vec![Line::from(Span::styled("Loading video...", p.muted))],
            ),
            _ => self.render_message(
                frame,
                area,
                vec![
                    Line::from(Span::styled(
                        "Video not found",
                        p.base.add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled("[Esc] Go Back", p.accent_style())),
                ],
            ),
        }
    }
}
