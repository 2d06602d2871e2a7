//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, RefreshState};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state_color = match app.refresh_state {
        RefreshState::Idle => Color::Green,
        RefreshState::Refreshing => Color::Yellow,
    };

    let age_span = match app.last_updated {
        Some(at) => Span::styled(
            format!(" updated {}s ago ", at.elapsed().as_secs()),
            Style::default().fg(Color::Cyan),
        ),
        None => Span::styled(" no data yet ", Style::default().fg(Color::DarkGray)),
    };

    let error_span = if let Some(ref error) = app.error_message {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let tab_info = format!(" {}/{} ", app.active_tab + 1, app.tabs.len());

    let spans = vec![
        Span::styled(
            format!(" {} ", app.refresh_state.label()),
            Style::default().fg(state_color),
        ),
        Span::raw("│"),
        age_span,
        Span::raw("│"),
        error_span,
        Span::raw(format!(
            "{:>width$}",
            tab_info,
            width = area.width.saturating_sub(35) as usize
        )),
    ];

    let line = Line::from(spans);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
