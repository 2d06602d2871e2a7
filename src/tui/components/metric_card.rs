//! Metric card component: a bordered label/value/delta triple.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

/// A delta line under the value, colored by sign.
pub struct Delta {
    pub text: String,
    pub value: Decimal,
}

impl Delta {
    /// Arrow plus color for the delta's sign.
    fn styling(&self) -> (&'static str, Color) {
        if self.value >= Decimal::ZERO {
            ("▲", Color::Green)
        } else {
            ("▼", Color::Red)
        }
    }
}

/// Renders one metric card.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    delta: Option<Delta>,
    caption: Option<&str>,
) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        value.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(delta) = delta {
        let (arrow, color) = delta.styling();
        lines.push(Line::from(Span::styled(
            format!("{arrow} {}", delta.text),
            Style::default().fg(color),
        )));
    }

    if let Some(caption) = caption {
        lines.push(Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let para = Paragraph::new(lines);
    frame.render_widget(para, inner);
}
