pub mod keyboard;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::monitoring::SchedulerHandle;
use crate::tui::state::AppState;

/// Handle all events and return true if should quit
pub async fn handle_event(state: &mut AppState, event: Event, scheduler: &SchedulerHandle) -> Result<bool> {
    let Event::Key(k) = event else {
        return Ok(false);
    };

    // Only process key press events, ignore releases and repeats
    if k.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if state.show_help {
        if matches!(k.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return Ok(false);
    }

    if state.show_add {
        match k.code {
            KeyCode::Enter => {
                let input = state.take_add_input();
                scheduler.add(input).await;
            }
            KeyCode::Esc => {
                state.take_add_input();
            }
            KeyCode::Backspace => {
                state.add_input.pop();
            }
            KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => {
                state.add_input.push(c);
            }
            _ => {}
        }
        return Ok(false);
    }

    if state.delete_target.is_some() {
        match k.code {
            KeyCode::Char('y') => {
                if let Some(site) = state.delete_target.take() {
                    scheduler.remove(site.id).await;
                }
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => {
                state.delete_target = None;
            }
            _ => {}
        }
        return Ok(false);
    }

    keyboard::handle_main_view(state, k, scheduler).await
}
