//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ─► TuiEvent ─► dispatch() ─► Action ─► update() ─► Effect
//!                              │                                   │
//!                        TuiState (cursors,               run_effect(): player,
//!                        search box, focus)               share log, quit
//! ```
//!
//! `dispatch` is pure apart from the presentation state it owns, so the
//! keymap is tested without a terminal.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks up to 500ms for input and only
//! redraws after an event or a resize.

mod component;
pub mod components;
pub mod event;
pub mod player;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{LoadState, Tab};
use crate::core::profile::Setting;
use crate::core::saved::timestamp_label;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::home::{feed_rows, selectable_ids};
use crate::tui::components::video_detail::related_for;
use crate::tui::components::{ExploreFocus, ExploreState, ListCursor, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::player::PlayerLauncher;
use crate::tui::theme::Palette;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub home: ListCursor,
    pub explore: ExploreState,
    pub saved: ListCursor,
    pub profile: ListCursor,
    /// Related-list cursor on the detail screen
    pub detail: ListCursor,
}

impl TuiState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            home: ListCursor::default(),
            explore: ExploreState::new(Palette::new(dark_mode)),
            saved: ListCursor::default(),
            profile: ListCursor::default(),
            detail: ListCursor::default(),
        }
    }

    /// Keystrokes go to the search box instead of the global keymap.
    fn typing(&self, app: &App) -> bool {
        app.nav.at_root() && app.nav.tab() == Tab::Explore && self.explore.typing()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Translate one terminal event into at most one core action.
pub fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if !app.nav.at_root() {
        return dispatch_detail(app, tui, event);
    }

    match event {
        TuiEvent::NextTab => return Some(Action::NextTab),
        TuiEvent::PrevTab => return Some(Action::PrevTab),
        _ => {}
    }

    if tui.typing(app) {
        return dispatch_search_input(app, tui, event);
    }

    // Explore sends every keystroke to the search box
    if let TuiEvent::InputChar(c) = event
        && app.nav.tab() != Tab::Explore
        && let Some(action) = global_key(*c)
    {
        return Some(action);
    }

    match app.nav.tab() {
        Tab::Home => {
            let rows = feed_rows(&app.catalog);
            let ids = selectable_ids(&rows);
            list_keys(&mut tui.home, &ids, event)
        }
        Tab::Explore => dispatch_search_results(app, tui, event),
        Tab::Saved => {
            let ids: Vec<&str> = app
                .saved_videos()
                .iter()
                .map(|(video, _)| video.id.as_str())
                .collect();
            match event {
                TuiEvent::InputChar('d') | TuiEvent::Delete => ids
                    .get(tui.saved.selected)
                    .map(|id| Action::RemoveSaved(id.to_string())),
                _ => list_keys(&mut tui.saved, &ids, event),
            }
        }
        Tab::Profile => match event {
            TuiEvent::CursorUp => {
                tui.profile.up();
                None
            }
            TuiEvent::CursorDown => {
                tui.profile.down(Setting::ALL.len());
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => Setting::ALL
                .get(tui.profile.selected)
                .map(|setting| Action::ToggleSetting(*setting)),
            _ => None,
        },
    }
}

/// `q` and the tab digits, outside of Explore.
fn global_key(c: char) -> Option<Action> {
    match c {
        'q' => Some(Action::Quit),
        '1'..='4' => {
            let index = c as usize - '1' as usize;
            Tab::ALL.get(index).map(|tab| Action::SelectTab(*tab))
        }
        _ => None,
    }
}

/// Up/Down move the cursor over `ids`, Enter opens the selected one.
fn list_keys(cursor: &mut ListCursor, ids: &[&str], event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::CursorUp => {
            cursor.up();
            None
        }
        TuiEvent::CursorDown => {
            cursor.down(ids.len());
            None
        }
        TuiEvent::Submit => ids
            .get(cursor.selected)
            .map(|id| Action::OpenVideo(id.to_string())),
        _ => None,
    }
}

fn dispatch_search_input(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let explore = &mut tui.explore;
    match event {
        TuiEvent::Escape => {
            if app.search.query.is_empty() && explore.search_box.buffer.is_empty() {
                return None;
            }
            explore.search_box.clear();
            explore.results.reset();
            Some(Action::ClearSearch)
        }
        TuiEvent::CursorDown | TuiEvent::Submit => {
            if !app.search.results.is_empty() {
                explore.focus = ExploreFocus::Results;
                explore.results.reset();
            }
            None
        }
        _ => match explore.search_box.handle_event(event)? {
            SearchEvent::Changed(query) => {
                explore.results.reset();
                Some(Action::SearchQueryChanged(query))
            }
        },
    }
}

fn dispatch_search_results(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let explore = &mut tui.explore;
    let ids: Vec<&str> = app.search.results.iter().map(String::as_str).collect();
    match event {
        TuiEvent::CursorUp if explore.results.selected == 0 => {
            explore.focus = ExploreFocus::Input;
            None
        }
        TuiEvent::Escape => {
            explore.focus = ExploreFocus::Input;
            None
        }
        // Typing jumps back into the search box
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
            explore.focus = ExploreFocus::Input;
            dispatch_search_input(app, tui, event)
        }
        _ => list_keys(&mut explore.results, &ids, event),
    }
}

fn dispatch_detail(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::Escape | TuiEvent::Backspace) {
        tui.detail.reset();
        return Some(Action::Back);
    }

    let screen = app.nav.current()?;
    if screen.load != LoadState::Found {
        return match event {
            TuiEvent::Submit => {
                tui.detail.reset();
                Some(Action::Back)
            }
            _ => None,
        };
    }

    match event {
        TuiEvent::InputChar('l') => Some(Action::ToggleLike),
        TuiEvent::InputChar('s') => Some(Action::ToggleSave {
            saved_at: timestamp_label(&chrono::Local::now(), &app.date_format),
        }),
        TuiEvent::InputChar('r') => Some(Action::Share),
        TuiEvent::InputChar('p') => Some(Action::Play),
        _ => {
            let related = related_for(&app.catalog, &screen.video_id);
            let ids: Vec<&str> = related.iter().map(|video| video.id.as_str()).collect();
            let action = list_keys(&mut tui.detail, &ids, event);
            if matches!(action, Some(Action::OpenVideo(_))) {
                tui.detail.reset();
            }
            action
        }
    }
}

/// Perform an effect. Returns true when the loop should stop.
fn run_effect(app: &mut App, player: &mut PlayerLauncher, effect: Effect) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Play(url) => {
            if let Some(status) = player.launch(&url) {
                app.status_message = status;
            }
            false
        }
        Effect::Share(url) => {
            info!("Share link: {}", url);
            false
        }
    }
}

pub fn run(catalog: Arc<Catalog>, config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(catalog, &config);
    let mut tui = TuiState::new(app.profile.settings.dark_mode);
    let mut player = PlayerLauncher::new(config.player_command.clone());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true; // Force first frame

        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            let first_event = poll_event_timeout(Duration::from_millis(500));
            player.reap();
            if first_event.is_some() {
                needs_redraw = true;
            }

            // Process first event + drain ALL pending events before next draw
            let mut should_quit = false;
            for event in first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate))
            {
                let Some(action) = dispatch(&app, &mut tui, &event) else {
                    continue;
                };
                debug!("Dispatching {:?}", action);
                let effect = update(&mut app, action);
                if run_effect(&mut app, &mut player, effect) {
                    should_quit = true;
                    break;
                }
            }

            if should_quit {
                info!("Quitting with {} player(s) still running", player.running());
                return Ok(());
            }
        }
    });

    ratatui::restore();
    result
}
