use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use super::{COLOR_ACTIVE, COLOR_BRAND, COLOR_ERROR, COLOR_LABEL, COLOR_MUTED, COLOR_PENDING, COLOR_SUCCESS};
use crate::monitoring::types::SiteStatus;
use crate::tui::state::AppState;

pub fn status_color(status: SiteStatus) -> ratatui::style::Color {
    match status {
        SiteStatus::Up => COLOR_SUCCESS,
        SiteStatus::Down => COLOR_ERROR,
        SiteStatus::Pending => COLOR_PENDING,
    }
}

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Websites ")
        .border_style(Style::default().fg(COLOR_BRAND));

    if state.sites.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No websites added yet.", Style::default().fg(COLOR_MUTED))),
            Line::from(""),
            Line::from(Span::styled("Press 'a' to add one", Style::default().fg(COLOR_LABEL))),
        ])
        .block(block);

        f.render_widget(Clear, area);
        f.render_widget(empty, area);
        return;
    }

    // Available width for content (minus borders)
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = state
        .sites
        .iter()
        .enumerate()
        .map(|(i, site)| {
            let selected = i == state.selected;
            let url_style = if selected {
                Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let color = status_color(site.status);

            // Build: ● url ... 123ms
            let latency = format!(" {}ms", site.latency);
            let fixed_len = 2 + latency.len();
            let url = site.display_url();
            let shown: String = if fixed_len + url.chars().count() > inner_width && inner_width > fixed_len + 3 {
                let max = inner_width - fixed_len - 2;
                format!("{}..", url.chars().take(max).collect::<String>())
            } else {
                url.to_string()
            };
            let padding = inner_width.saturating_sub(fixed_len + shown.chars().count());

            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(shown, url_style),
                Span::raw(" ".repeat(padding)),
                Span::styled(latency, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]))
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(List::new(items).block(block), area);
}
