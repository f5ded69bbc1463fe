//! Colors derived from the session's dark-mode setting.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Style,
    pub accent: Color,
    pub muted: Style,
    pub highlight: Style,
}

impl Palette {
    pub fn new(dark_mode: bool) -> Self {
        let (fg, bg, muted, accent) = if dark_mode {
            (Color::White, Color::Black, Color::DarkGray, Color::Red)
        } else {
            (Color::Black, Color::White, Color::Gray, Color::Blue)
        };
        Self {
            base: Style::default().fg(fg).bg(bg),
            accent,
            muted: Style::default().fg(muted),
            highlight: Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        }
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}
