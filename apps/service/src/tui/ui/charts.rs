use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Gauge, Paragraph};

use super::{COLOR_BRAND, COLOR_ERROR, COLOR_LABEL, COLOR_MUTED, COLOR_PENDING, COLOR_SUCCESS};
use super::sites::status_color;
use crate::registry::SiteCounts;
use crate::tui::state::AppState;

/// Latency at which a bar reaches full height
const FULL_SCALE_MS: u64 = 500;
/// Smallest visible bar, in percent
const MIN_BAR_PERCENT: u64 = 10;

/// Bar height in percent of the chart for a latency
pub fn bar_height(latency_ms: u64) -> u64 {
    (latency_ms.saturating_mul(100) / FULL_SCALE_MS).clamp(MIN_BAR_PERCENT, 100)
}

/// Rounded (up, down) legend percentages. Everything not up counts as down.
pub fn legend_percentages(counts: &SiteCounts) -> (u64, u64) {
    if counts.total == 0 {
        return (0, 0);
    }
    let online = counts.online_percent();
    (online.round() as u64, (100.0 - online).round() as u64)
}

pub fn render_status_pie(f: &mut Frame, area: Rect, state: &AppState) {
    let counts = state.counts();
    let (up, down) = legend_percentages(&counts);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Status ")
        .border_style(Style::default().fg(COLOR_BRAND));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let gauge_style = if counts.total == 0 {
        Style::default().fg(COLOR_PENDING).bg(COLOR_PENDING)
    } else {
        Style::default().fg(COLOR_SUCCESS).bg(COLOR_ERROR)
    };
    let gauge = Gauge::default()
        .gauge_style(gauge_style)
        .percent(up.min(100) as u16)
        .label(format!("{up}% online"));
    f.render_widget(gauge, rows[1]);

    let legend = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("■ ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(format!("Up {up}%"), Style::default().fg(COLOR_LABEL)),
            Span::raw("    "),
            Span::styled("■ ", Style::default().fg(COLOR_ERROR)),
            Span::styled(format!("Down {down}%"), Style::default().fg(COLOR_LABEL)),
        ]),
        Line::from(Span::styled(
            format!("{} pending", counts.pending),
            Style::default().fg(COLOR_MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(legend, rows[2]);
}

pub fn render_latency_bars(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Latency ")
        .border_style(Style::default().fg(COLOR_BRAND));

    f.render_widget(Clear, area);

    let bars: Vec<Bar> = state
        .sites
        .iter()
        .filter(|site| site.latency > 0)
        .map(|site| {
            let label: String = site.display_url().chars().take(8).collect();
            Bar::default()
                .value(bar_height(site.latency))
                .text_value(format!("{}ms", site.latency))
                .label(Line::from(label))
                .style(Style::default().fg(status_color(site.status)))
        })
        .collect();

    if state.sites.is_empty() || bars.is_empty() {
        let text = if state.sites.is_empty() { "Add websites to see data" } else { "No latency data yet" };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(COLOR_MUTED).add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2)
        .max(100);
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scale() {
        assert_eq!(bar_height(250), 50);
        assert_eq!(bar_height(500), 100);
        assert_eq!(bar_height(5000), 100);
        assert_eq!(bar_height(1), MIN_BAR_PERCENT);
        assert_eq!(bar_height(u64::MAX), 100);
    }

    #[test]
    fn test_legend_percentages() {
        assert_eq!(legend_percentages(&SiteCounts::default()), (0, 0));

        let counts = SiteCounts { total: 3, online: 1, offline: 1, pending: 1 };
        assert_eq!(legend_percentages(&counts), (33, 67));

        let counts = SiteCounts { total: 2, online: 2, offline: 0, pending: 0 };
        assert_eq!(legend_percentages(&counts), (100, 0));
    }
}
