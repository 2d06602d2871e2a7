//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::{App, Tab};
use super::tabs::{ranking, silver};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_tab() {
        Tab::Silver => silver::render(frame, app),
        Tab::Ranking => ranking::render(frame, app),
    }
}
