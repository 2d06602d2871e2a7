//! Header line: program name, numbered tab titles, market and session.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;

/// Renders the header.
///
/// Tabs are numbered with their jump key (`1:Silver 2:Ranking`); the active
/// one is highlighted. The right edge shows which market and session the
/// current snapshot describes, once one exists.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let market = app
        .snapshot
        .as_ref()
        .map(|snapshot| format!("{} {}", snapshot.segment.label(), snapshot.session));
    let market_width = market.as_deref().map_or(0, |m| m.len() as u16);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(market_width)])
        .split(area);

    let mut spans = vec![
        Span::styled(
            "sterling",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for (i, tab) in app.tabs.iter().enumerate() {
        let style = if i == app.active_tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}:{}", i + 1, tab.title()), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    if let Some(market) = market {
        let para = Paragraph::new(market)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use ratatui::{Terminal, backend::TestBackend};
    use rust_decimal_macros::dec;

    use super::render;
    use crate::models::{MarketSegment, QuoteSnapshot};
    use crate::snapshot::{DashboardSnapshot, SilverOverview};
    use crate::tui::app::App;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn snapshot() -> DashboardSnapshot {
        let quote = QuoteSnapshot {
            symbol: "SI=F".to_string(),
            last: dec!(32),
            previous_close: dec!(31),
            volume: dec!(100),
            session: date(7),
        };
        DashboardSnapshot {
            silver: SilverOverview {
                quote,
                change_pct: None,
                krw_per_gram: dec!(1337.47),
                fx_rate: dec!(1300),
                closes: vec![],
            },
            segment: MarketSegment::Kosdaq,
            session: date(7),
            prior_session: date(6),
            rows: vec![],
            fetched_at: Utc::now(),
        }
    }

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_numbered_tabs() {
        let app = App::new(5);
        let text = rendered(&app);
        assert!(text.contains("sterling"));
        assert!(text.contains("1:Silver"));
        assert!(text.contains("2:Ranking"));
    }

    #[test]
    fn shows_market_and_session_once_a_snapshot_exists() {
        let mut app = App::new(5);
        assert!(!rendered(&app).contains("KOSDAQ"));

        app.apply_snapshot(snapshot());
        assert!(rendered(&app).contains("KOSDAQ 2025-03-07"));
    }
}
