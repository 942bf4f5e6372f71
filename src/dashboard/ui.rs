//! Terminal rendering of the calculator page

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Gauge, List, ListItem, ListState,
        Paragraph, Row, Table, Wrap,
    },
    Frame,
};

use crate::dashboard::DashboardApp;
use crate::metric::{Metric, Period};
use crate::report::{chart_series, format_metric, format_value};
use crate::tips::TIPS;

const HIGHLIGHT: Color = Color::Rgb(0x6D, 0xBF, 0x67);

fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Energy => Color::Rgb(0x6D, 0xBF, 0x67),
        Metric::Co2 => Color::Rgb(0xA1, 0xD9, 0x9B),
        Metric::Water => Color::Rgb(0x7F, 0xDB, 0xFF),
    }
}

/// Render the whole dashboard
pub fn render(app: &DashboardApp, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(10), // Inputs + results
            Constraint::Min(10),    // Chart
            Constraint::Length(11), // Ranking + tips
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);
    render_model_list(app, f, middle[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(middle[1]);
    render_requests_slider(app, f, right[0]);
    render_results(app, f, right[1]);

    render_chart(app, f, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);
    render_ranking(app, f, bottom[0]);
    render_tips(f, bottom[1]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = vec![
        Line::from(Span::styled(
            "AI Impact Calculator - energy, CO2 and water footprint of your AI usage",
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "↑/↓ model | ←/→ ±1 request | PgUp/PgDn ±10 | Home/End min/max | q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_model_list(app: &DashboardApp, f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .catalog()
        .profiles()
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::raw(p.name.clone()),
                Span::styled(format!("  {}", p.category), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Model"))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_requests_slider(app: &DashboardApp, f: &mut Frame, area: Rect) {
    let span = app.range.max.saturating_sub(app.range.min);
    let ratio = if span == 0 {
        1.0
    } else {
        f64::from(app.requests_per_day - app.range.min) / f64::from(span)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Requests per day ({}-{})", app.range.min, app.range.max)),
        )
        .gauge_style(Style::default().fg(HIGHLIGHT))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(app.requests_per_day.to_string());

    f.render_widget(gauge, area);
}

fn render_results(app: &DashboardApp, f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Estimated results");

    let Some(report) = &app.report else {
        let message = app.error_message.clone().unwrap_or_else(|| "No estimate".to_string());
        let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut header_cells = vec![Cell::from("Period")];
    header_cells.extend(report.metrics.iter().map(|m| Cell::from(m.to_string())));
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = Period::ALL
        .iter()
        .map(|&period| {
            let values = report.periods.get(period);
            let mut cells = vec![Cell::from(period.label())];
            cells.extend(
                report
                    .metrics
                    .iter()
                    .map(|&m| Cell::from(format_metric(values.get(m), m))),
            );
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(8)];
    widths.extend(report.metrics.iter().map(|_| Constraint::Min(14)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2);

    f.render_widget(table, area);
}

/// Grouped bars: one group per period, one bar per tracked metric
fn render_chart(app: &DashboardApp, f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Estimated impact by period");

    let Some(report) = &app.report else {
        f.render_widget(block, area);
        return;
    };

    let series = chart_series(report);
    let mut chart = BarChart::default()
        .block(block)
        .bar_width(9)
        .bar_gap(1)
        .group_gap(4);

    for (idx, period) in Period::ALL.iter().enumerate() {
        let bars: Vec<Bar> = series
            .iter()
            .map(|(metric, values)| {
                let value = values[idx];
                Bar::default()
                    .value(bar_height(value))
                    .text_value(format_value(value))
                    .label(Line::from(metric.label()))
                    .style(Style::default().fg(metric_color(*metric)))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(period.label()))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}

/// Bars take integers; keep two decimals of resolution
fn bar_height(value: f64) -> u64 {
    (value.max(0.0) * 100.0).round() as u64
}

fn render_ranking(app: &DashboardApp, f: &mut Frame, area: Rect) {
    let estimator = app.estimator();
    let tracked = estimator.settings().tracked();

    let items: Vec<ListItem> = estimator
        .ranking()
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let coefficients: Vec<String> = tracked
                .iter()
                .map(|&m| format_metric(p.coefficient(m), m))
                .collect();
            let style = if idx == 0 {
                Style::default().fg(HIGHLIGHT)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. {}", idx + 1, p.name), style),
                Span::styled(
                    format!("  {}", coefficients.join(" · ")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Ranking (per request, lightest first)"),
    );
    f.render_widget(list, area);
}

fn render_tips(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = TIPS
        .iter()
        .enumerate()
        .map(|(idx, tip)| {
            Line::from(vec![
                Span::styled(
                    format!("{}. {}: ", idx + 1, tip.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(tip.body),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tips to reduce your impact"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::estimator::EstimatorSettings;
    use crate::input::RequestRange;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &DashboardApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(3.5), 350);
        assert_eq!(bar_height(0.004), 0);
        assert_eq!(bar_height(-1.0), 0);
    }

    #[test]
    fn test_render_dashboard() {
        let app = DashboardApp::new(
            Catalog::builtin().clone(),
            EstimatorSettings::default(),
            RequestRange::default(),
            Some("GPT-3.5"),
            Some(10),
        )
        .unwrap();

        let text = rendered_text(&app);
        assert!(text.contains("AI Impact Calculator"));
        assert!(text.contains("105.00 Wh"));
        assert!(text.contains("Midjourney"));
        assert!(text.contains("Tips to reduce your impact"));
    }
}
