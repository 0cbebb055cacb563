pub mod charts;
pub mod footer;
pub mod header;
pub mod popups;
pub mod sites;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Color;

use crate::tui::state::AppState;

pub const COLOR_BRAND: Color = Color::Cyan;
pub const COLOR_ACTIVE: Color = Color::Yellow;
pub const COLOR_LABEL: Color = Color::Gray;
pub const COLOR_MUTED: Color = Color::DarkGray;
pub const COLOR_SUCCESS: Color = Color::Rgb(0x10, 0xB9, 0x81);
pub const COLOR_ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const COLOR_PENDING: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
pub const COLOR_INFO: Color = Color::Blue;

/// Render the entire UI
pub fn render(f: &mut Frame, state: &AppState) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    header::render(f, chunks[0], state);

    let grid = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let top_panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(grid[0]);

    sites::render(f, top_panes[0], state);
    charts::render_status_pie(f, top_panes[1], state);
    charts::render_latency_bars(f, grid[1], state);

    footer::render(f, chunks[2]);

    // Popups (overlays)
    if state.show_help {
        popups::help::render(f, size);
    }

    if state.show_add {
        popups::add::render(f, size, state);
    }

    if let Some(site) = &state.delete_target {
        popups::delete::render(f, size, site);
    }
}
