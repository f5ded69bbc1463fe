//! # Profile Component
//!
//! Profile card, session stats, and the settings toggles.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::profile::{Profile, Setting};
use crate::tui::component::Component;
use crate::tui::components::ListCursor;
use crate::tui::theme::Palette;

pub struct ProfileView<'a> {
    pub profile: &'a Profile,
    pub saved_count: usize,
    pub watched_count: usize,
    pub cursor: &'a mut ListCursor,
    pub palette: Palette,
}

fn on_off(value: bool) -> &'static str {
    if value { "[on] " } else { "[off]" }
}

impl Component for ProfileView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        let info = &self.profile.info;
        let [card_area, stats_area, settings_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(Setting::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .areas(area);

        let initial = info.name.chars().next().unwrap_or('?');
        let card = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("({initial}) "), p.accent_style()),
                Span::styled(info.name.clone(), p.base.add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(info.email.clone(), p.muted)),
            Line::from(Span::styled(info.avatar_url.clone(), p.muted)),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(p.muted));
        frame.render_widget(card, card_area);

        let stats = Paragraph::new(Line::from(vec![
            Span::styled(format!("{}", self.saved_count), p.accent_style()),
            Span::styled(" Saved   │   ", p.muted),
            Span::styled(format!("{}", self.watched_count), p.accent_style()),
            Span::styled(" Watched   │   ", p.muted),
            Span::styled(info.plan.clone(), p.accent_style()),
            Span::styled(" Plan", p.muted),
        ]))
        .block(Block::default().borders(Borders::BOTTOM).border_style(p.muted));
        frame.render_widget(stats, stats_area);

        self.cursor.clamp(Setting::ALL.len());
        let items: Vec<ListItem> = Setting::ALL
            .iter()
            .map(|setting| {
                let value = self.profile.settings.get(*setting);
                ListItem::new(Line::from(vec![
                    Span::styled(on_off(value), if value { p.accent_style() } else { p.muted }),
                    Span::styled(format!(" {}", setting.label()), p.base),
                ]))
            })
            .collect();
        let settings = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(p.muted)
                    .title(" Settings "),
            )
            .highlight_style(p.highlight)
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.cursor.selected));
        frame.render_stateful_widget(settings, settings_area, &mut state);

        let footer = Paragraph::new(vec![
            Line::from(Span::styled("Help & Info", p.accent_style())),
            Line::from(Span::styled("  Privacy Policy", p.base)),
            Line::from(Span::styled("  Help Center", p.base)),
            Line::from(""),
            Line::from(Span::styled(
                format!("VideoStream v{}", env!("CARGO_PKG_VERSION")),
                p.muted,
            )),
        ]);
        frame.render_widget(footer, footer_area);
    }
}
