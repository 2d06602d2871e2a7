//! Ranking tab: top-N volume cards plus the full watchlist table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

use crate::models::RankingRow;
use crate::tui::app::App;
use crate::tui::components::{header, metric_card, status_bar};
use crate::tui::format;

/// Display width of the name column (Korean names are double-width).
const NAME_COL_WIDTH: usize = 16;

/// Renders the ranking tab.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Status bar
            Constraint::Length(5), // Top-N cards
            Constraint::Min(6),    // Watchlist table
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    header::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    match app.snapshot.as_ref() {
        Some(snapshot) => {
            render_top_cards(frame, main_layout[2], &snapshot.rows, app.top_n);
            render_table(frame, main_layout[3], &snapshot.rows);
        }
        None => {
            let para = Paragraph::new("Fetching market data...")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(para, main_layout[2]);
        }
    }

    render_keybindings(frame, main_layout[4]);
}

/// Renders one card per top-volume ticker.
fn render_top_cards(frame: &mut Frame, area: Rect, rows: &[RankingRow], top_n: usize) {
    let count = rows.len().min(top_n).max(1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area);

    if rows.is_empty() {
        let para = Paragraph::new("No watchlist data").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, columns[0]);
        return;
    }

    for (i, row) in rows.iter().take(count).enumerate() {
        let delta = metric_card::Delta {
            text: format::signed_pct(row.change_pct),
            value: row.change_pct,
        };
        let volume_caption = format!("vol {}", format::grouped_int(row.volume));
        metric_card::render(
            frame,
            columns[i],
            &format!("#{} {}", i + 1, row.name),
            &format!("₩{}", format::grouped_int(row.close)),
            Some(delta),
            Some(volume_caption.as_str()),
        );
    }
}

/// Renders the full watchlist table, sorted descending by volume.
fn render_table(frame: &mut Frame, area: Rect, rows: &[RankingRow]) {
    let block = Block::default()
        .title(" Watchlist ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(
            "{} {:>10} {:>8} {:>12} {:>8} {:>8} {:>10} {:>10}",
            format::pad_display("Name", NAME_COL_WIDTH),
            "Close",
            "Chg%",
            "Volume",
            "Vol%",
            "Open%",
            "Target",
            "Stop",
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    for row in rows.iter().take(inner.height.saturating_sub(1) as usize) {
        let change_color = if row.change_pct >= Decimal::ZERO {
            Color::Green
        } else {
            Color::Red
        };

        lines.push(Line::from(vec![
            Span::raw(format!("{} ", format::pad_display(&row.name, NAME_COL_WIDTH))),
            Span::raw(format!("{:>10} ", format::grouped_int(row.close))),
            Span::styled(
                format!("{:>8} ", format::signed_pct(row.change_pct)),
                Style::default().fg(change_color),
            ),
            Span::raw(format!("{:>12} ", format::grouped_int(row.volume))),
            Span::raw(format!("{:>8} ", format::opt_pct(row.volume_ratio))),
            Span::raw(format!("{:>8} ", format::opt_pct(row.open_move_pct))),
            Span::styled(
                format!("{:>10} ", format::grouped_int(row.bands.target)),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("{:>10}", format::grouped_int(row.bands.stop)),
                Style::default().fg(Color::Red),
            ),
        ]));
    }

    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No watchlist data",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let para = Paragraph::new(lines);
    frame.render_widget(para, inner);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[Tab]/[1-2] switch tab  [r]efresh  [q]uit";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
