use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::models::Site;

pub fn render(f: &mut Frame, size: Rect, site: &Site) {
    let area = super::centered(size, 50, 30);

    let popup = Paragraph::new(vec![
        Line::from(Span::styled(
            "Delete Website",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Stop monitoring '{}' ?", site.url)),
        Line::from(""),
        Line::from("Y: Yes    N/Esc: No"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Confirm"));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
