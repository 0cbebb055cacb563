mod events;
mod state;
mod ui;
pub mod bus;

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use crate::models::Site;
use crate::monitoring::SchedulerHandle;

use state::AppState;

/// Run the dashboard until the user quits.
///
/// The dashboard only reads scheduler state through `bus_rx` and only changes
/// it by sending commands through `scheduler`. Subscribe before the scheduler
/// starts so its first events are not lost.
pub async fn run_dashboard(
    initial_sites: Vec<Site>,
    mut bus_rx: broadcast::Receiver<bus::DashboardEvent>,
    scheduler: SchedulerHandle,
    toast_duration: Duration,
) -> Result<()> {
    let mut state = AppState::new(toast_duration);
    state.apply(bus::DashboardEvent::Sites(initial_sites));

    // Init terminal in alternate screen
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let backend = CrosstermBackend::new(&mut stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let outcome = event_loop(&mut terminal, &mut state, &mut bus_rx, &scheduler).await;

    // Cleanup terminal
    drop(terminal);
    let exec_result = execute!(stdout, Show, LeaveAlternateScreen);
    let raw_mode_result = disable_raw_mode();
    exec_result.and(raw_mode_result)?;
    outcome
}

async fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    bus_rx: &mut broadcast::Receiver<bus::DashboardEvent>,
    scheduler: &SchedulerHandle,
) -> Result<()> {
    loop {
        // Drain bus (non-blocking) for live updates
        loop {
            match bus_rx.try_recv() {
                Ok(ev) => state.apply(ev),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Dashboard bus: lagged behind scheduler");
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Closed) => {
                    tracing::warn!("Dashboard bus closed");
                    return Ok(());
                }
            }
        }
        state.clear_expired_status();

        terminal.draw(|f| ui::render(f, state))?;

        // Poll for events
        if event::poll(Duration::from_millis(250))? {
            let ev = event::read()?;
            if events::handle_event(state, ev, scheduler).await? {
                break;
            }
        }
    }

    Ok(())
}
