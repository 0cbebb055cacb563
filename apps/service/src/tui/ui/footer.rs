use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use super::COLOR_BRAND;

pub fn render(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);

    let labels = ["Add", "Delete", "Check now", "Help", "Quit"];
    let keys = ["A", "D", "R", "?", "Q/Esc"];

    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(labels.iter().map(|_| Constraint::Ratio(1, labels.len() as u32)).collect::<Vec<_>>())
        .split(area);

    for (i, (label, key)) in labels.iter().zip(keys.iter()).enumerate() {
        let btn = Paragraph::new(Line::from(Span::styled(
            format!("{key}: {label}"),
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);

        f.render_widget(btn, footer_chunks[i]);
    }
}
