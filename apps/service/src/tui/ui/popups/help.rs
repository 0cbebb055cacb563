use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(f: &mut Frame, size: Rect) {
    let area = super::centered(size, 60, 60);

    let help_lines = vec![
        Line::from(Span::styled(
            "Keybinds",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation:", Style::default().fg(Color::Yellow))),
        Line::from("  Up/Down, k/j      - Move selection"),
        Line::from("  g/Home            - Jump to first"),
        Line::from("  G/End             - Jump to last"),
        Line::from(""),
        Line::from(Span::styled("Actions:", Style::default().fg(Color::Yellow))),
        Line::from("  A                 - Add website"),
        Line::from("  D                 - Delete selected website"),
        Line::from("  R                 - Check all websites now"),
        Line::from(""),
        Line::from(Span::styled("General:", Style::default().fg(Color::Yellow))),
        Line::from("  ?                 - Toggle help"),
        Line::from("  Q / Esc           - Quit"),
        Line::from(""),
        Line::from(Span::styled("Tips:", Style::default().fg(Color::Gray))),
        Line::from("  - URLs without a scheme are checked over https://"),
        Line::from("  - Alerts fire only when a site goes down or comes back"),
    ];

    let popup = Paragraph::new(help_lines)
        .block(Block::default().borders(Borders::ALL).title("Help - Keybinds"));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
