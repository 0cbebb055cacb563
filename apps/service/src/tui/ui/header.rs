use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use std::time::SystemTime;

use super::{COLOR_BRAND, COLOR_ERROR, COLOR_INFO, COLOR_LABEL, COLOR_MUTED, COLOR_SUCCESS};
use crate::tui::state::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let counts = state.counts();

    // Row 1: Brand + counters
    let brand = Line::from(vec![
        Span::styled("PingNotify ", Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)),
        Span::styled(" Total ", Style::default().fg(COLOR_LABEL)),
        Span::styled(counts.total.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("  Online ", Style::default().fg(COLOR_LABEL)),
        Span::styled(counts.online.to_string(), Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::BOLD)),
        Span::styled("  Offline ", Style::default().fg(COLOR_LABEL)),
        Span::styled(counts.offline.to_string(), Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)),
    ]);

    // Row 2: last pass + toast
    let mut status_spans = vec![];

    match state.last_pass {
        Some((checked, at)) => {
            let secs = SystemTime::now().duration_since(at).unwrap_or_default().as_secs();
            status_spans.push(Span::styled(
                format!("[last pass: {checked} checked, {secs}s ago] "),
                Style::default().fg(COLOR_MUTED),
            ));
        }
        None => {
            status_spans.push(Span::styled("[waiting for first pass] ", Style::default().fg(COLOR_MUTED)));
        }
    }

    if let Some((msg, _, level)) = &state.status_message {
        let color = match level {
            StatusLevel::Success => COLOR_SUCCESS,
            StatusLevel::Error => COLOR_ERROR,
            StatusLevel::Info => COLOR_INFO,
        };
        status_spans.push(Span::styled(
            format!(" -- {msg}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(vec![brand, Line::from(""), Line::from(status_spans)]);

    f.render_widget(Clear, area);
    f.render_widget(header, area);
}
