use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::AppState;
use crate::tui::ui::{COLOR_ACTIVE, COLOR_BRAND, COLOR_MUTED};

pub fn render(f: &mut Frame, size: Rect, state: &AppState) {
    let area = super::centered(size, 60, 25);

    let popup = Paragraph::new(vec![
        Line::from(Span::styled(
            "Add Website",
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("URL: "),
            Span::styled(state.add_input.clone(), Style::default().fg(COLOR_ACTIVE)),
            Span::styled("_", Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Enter: Add    Esc: Cancel", Style::default().fg(COLOR_MUTED))),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Add "));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
