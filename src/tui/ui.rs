use crate::core::navigation::LoadState;
use crate::core::navigation::Tab;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::video_detail::related_for;
use crate::tui::components::{
    Explore, HomeFeed, ProfileView, SavedList, TabBar, TitleBar, VideoDetail,
};
use crate::tui::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Block;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let palette = Palette::new(app.profile.settings.dark_mode);
    tui.explore.search_box.palette = palette;
    frame.render_widget(Block::default().style(palette.base), frame.area());

    // Tab bar only at the navigation root
    let tab_height = if app.nav.at_root() { 2 } else { 0 };
    let layout = Layout::vertical([Length(1), Min(0), Length(1), Length(tab_height)]);
    let [title_area, main_area, help_area, tab_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(screen_name(app), app.status_message.clone(), palette);
    title_bar.render(frame, title_area);

    if app.nav.at_root() {
        draw_tab(frame, main_area, app, tui, palette);
        let mut tab_bar = TabBar {
            active: app.nav.tab(),
            palette,
        };
        tab_bar.render(frame, tab_area);
    } else {
        draw_detail(frame, main_area, app, tui, palette);
    }

    frame.render_widget(
        Line::from(help_text(app, tui)).style(palette.muted).centered(),
        help_area,
    );
}

fn draw_tab(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    match app.nav.tab() {
        Tab::Home => HomeFeed {
            catalog: &app.catalog,
            cursor: &mut tui.home,
            palette,
        }
        .render(frame, area),
        Tab::Explore => Explore {
            state: &mut tui.explore,
            search: &app.search,
            results: app.search_results(),
            palette,
        }
        .render(frame, area),
        Tab::Saved => SavedList {
            entries: app.saved_videos(),
            cursor: &mut tui.saved,
            palette,
        }
        .render(frame, area),
        Tab::Profile => ProfileView {
            profile: &app.profile,
            saved_count: app.saved.len(),
            watched_count: app.watched.len(),
            cursor: &mut tui.profile,
            palette,
        }
        .render(frame, area),
    }
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    let Some(screen) = app.nav.current() else {
        return;
    };
    let video = app.current_video();
    let mut detail = VideoDetail {
        screen,
        video,
        watch: app.watch_state(&screen.video_id),
        playback_url: video
            .map(|v| v.playback_url(&app.embed_base_url))
            .unwrap_or_default(),
        related: related_for(&app.catalog, &screen.video_id),
        cursor: &mut tui.detail,
        palette,
    };
    detail.render(frame, area);
}

fn screen_name(app: &App) -> String {
    match app.nav.current() {
        None => app.nav.tab().label().to_string(),
        Some(screen) => match app.current_video() {
            Some(video) => video.title.clone(),
            None if screen.load == LoadState::Loading => "Loading".to_string(),
            None => "Not found".to_string(),
        },
    }
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    match app.nav.current() {
        Some(screen) if screen.load == LoadState::Found => {
            "↑↓ related · Enter open · l like · s save · r share · p play · Esc back"
        }
        Some(_) => "Esc back",
        None => match app.nav.tab() {
            Tab::Home => "↑↓ move · Enter open · Tab switch · q quit",
            Tab::Explore if tui.explore.typing() => "type to search · ↓ results · Esc clear",
            Tab::Explore => "↑↓ move · Enter open · type to search · Tab switch",
            Tab::Saved => "↑↓ move · Enter open · d remove · q quit",
            Tab::Profile => "↑↓ move · Enter toggle · q quit",
        },
    }
}
