use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::monitoring::SchedulerHandle;
use crate::tui::state::{AppState, StatusLevel};

/// Handle keyboard events in main view (no popups open)
pub async fn handle_main_view(
    state: &mut AppState,
    key: KeyEvent,
    scheduler: &SchedulerHandle,
) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc if key.modifiers.is_empty() => {
            return Ok(true);
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(true);
        }

        // Help toggle
        KeyCode::Char('h') | KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down if key.modifiers.is_empty() => state.next_site(),
        KeyCode::Char('k') | KeyCode::Up if key.modifiers.is_empty() => state.prev_site(),
        KeyCode::Char('g') | KeyCode::Home if key.modifiers.is_empty() => state.first_site(),
        KeyCode::Char('G') | KeyCode::End => state.last_site(),

        // Add
        KeyCode::Char('a') | KeyCode::Char('A') => state.open_add(),

        // Delete selected
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            state.open_delete();
        }

        // Run a pass right away
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if state.sites.is_empty() {
                state.set_status("Nothing to check yet", StatusLevel::Info);
            } else {
                state.set_status("Checking all websites...", StatusLevel::Info);
            }
            scheduler.check_now().await;
        }

        _ => {}
    }

    Ok(false)
}
