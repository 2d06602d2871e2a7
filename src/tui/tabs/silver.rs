//! Silver overview tab: metric cards plus the closing-price line chart.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use rust_decimal::prelude::ToPrimitive;

use crate::snapshot::SilverOverview;
use crate::tui::app::App;
use crate::tui::components::{header, metric_card, status_bar};
use crate::tui::format;

/// Renders the silver tab.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Status bar
            Constraint::Length(5), // Metric cards
            Constraint::Min(8),    // Closing-price chart
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    header::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    match app.snapshot.as_ref() {
        Some(snapshot) => {
            render_cards(frame, main_layout[2], &snapshot.silver);
            render_chart(frame, main_layout[3], &snapshot.silver);
        }
        None => {
            let para = Paragraph::new("Fetching market data...")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(para, main_layout[2]);
        }
    }

    render_keybindings(frame, main_layout[4]);
}

/// Renders the three metric cards: USD price, KRW per gram, FX rate.
fn render_cards(frame: &mut Frame, area: Rect, silver: &SilverOverview) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let delta = silver.change_pct.map(|pct| metric_card::Delta {
        text: format::signed_pct(pct),
        value: pct,
    });
    let session_caption = format!("session {}", silver.quote.session);
    metric_card::render(
        frame,
        columns[0],
        &format!("Silver ({})", silver.quote.symbol),
        &format!("${:.2} /oz", silver.quote.last),
        delta,
        Some(session_caption.as_str()),
    );

    metric_card::render(
        frame,
        columns[1],
        "Silver (KRW/g)",
        &format!("₩{} /g", format::grouped_int(silver.krw_per_gram)),
        None,
        Some("converted at the current rate"),
    );

    metric_card::render(
        frame,
        columns[2],
        "USD/KRW",
        &format!("₩{:.2}", silver.fx_rate),
        None,
        None,
    );
}

/// Renders the closing-price line chart.
fn render_chart(frame: &mut Frame, area: Rect, silver: &SilverOverview) {
    let block = Block::default()
        .title(" Silver close ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if silver.closes.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let para = Paragraph::new("No chart data").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    }

    let points: Vec<(f64, f64)> = silver
        .closes
        .iter()
        .enumerate()
        .map(|(i, (_, close))| (i as f64, close.to_f64().unwrap_or(0.0)))
        .collect();

    let (min_y, max_y) = points.iter().fold((f64::MAX, f64::MIN), |(min, max), p| {
        (min.min(p.1), max.max(p.1))
    });
    // Pad the bounds slightly so the line doesn't hug the frame.
    let pad = ((max_y - min_y) * 0.05).max(0.01);
    let bounds_y = [min_y - pad, max_y + pad];

    let first_date = silver.closes.first().map(|(d, _)| d.to_string());
    let last_date = silver.closes.last().map(|(d, _)| d.to_string());

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, (points.len().saturating_sub(1)).max(1) as f64])
                .labels([
                    Span::raw(first_date.unwrap_or_default()),
                    Span::raw(last_date.unwrap_or_default()),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds(bounds_y)
                .labels([
                    Span::raw(format!("{:.2}", bounds_y[0])),
                    Span::raw(format!("{:.2}", (bounds_y[0] + bounds_y[1]) / 2.0)),
                    Span::raw(format!("{:.2}", bounds_y[1])),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[Tab]/[1-2] switch tab  [r]efresh  [q]uit";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
