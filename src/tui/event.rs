//! Event handling and background tasks for the TUI.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::warn;

use crate::snapshot::{DashboardSnapshot, SnapshotService};

use super::app::{App, RefreshState};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// A refresh started.
    Refreshing,
    /// A refresh finished with a fresh snapshot.
    Snapshot(Box<DashboardSnapshot>),
    /// A refresh failed; the previous snapshot stays on screen.
    FetchFailed(String),
    /// Request to quit the application.
    Quit,
}

/// Actions that require external handling.
#[derive(Debug)]
pub enum Action {
    /// Clear the provider caches and refresh immediately.
    ForceRefresh,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Spawns the background refresh loop.
///
/// Rebuilds the snapshot immediately, then on every `interval` tick and on
/// every force-refresh request (which also clears the provider caches).
pub fn spawn_refresh_loop(
    service: Arc<SnapshotService>,
    tx: mpsc::UnboundedSender<Message>,
    mut force_rx: mpsc::UnboundedReceiver<()>,
    interval: Duration,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                forced = force_rx.recv() => {
                    if forced.is_none() {
                        break;
                    }
                    service.clear_caches().await;
                }
            }

            if tx.send(Message::Refreshing).is_err() {
                break;
            }
            let today = Local::now().date_naive();
            let message = match service.build(today).await {
                Ok(snapshot) => Message::Snapshot(Box::new(snapshot)),
                Err(e) => {
                    warn!(error = %e, "snapshot refresh failed");
                    Message::FetchFailed(e.to_string())
                }
            };
            if tx.send(message).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Refreshing => {
            app.refresh_state = RefreshState::Refreshing;
            None
        }
        Message::Snapshot(snapshot) => {
            app.apply_snapshot(*snapshot);
            None
        }
        Message::FetchFailed(message) => {
            app.refresh_state = RefreshState::Idle;
            app.show_error(message);
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.clear_stale_errors();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => {
            app.should_quit = true;
            None
        }

        // Tab navigation
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.previous_tab();
            } else {
                app.next_tab();
            }
            None
        }
        KeyCode::BackTab => {
            app.previous_tab();
            None
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.next_tab();
            None
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.previous_tab();
            None
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.select_tab(c.to_digit(10).unwrap_or(0) as usize);
            None
        }

        // Manual refresh: drop caches and refetch
        KeyCode::Char('r') => Some(Action::ForceRefresh),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Tab;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Message {
        Message::Input(Event::Key(KeyEvent::from(code)))
    }

    #[test]
    fn q_quits() {
        let mut app = App::new(5);
        update(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_through_tabs() {
        let mut app = App::new(5);
        assert_eq!(*app.current_tab(), Tab::Silver);
        update(&mut app, key(KeyCode::Tab));
        assert_eq!(*app.current_tab(), Tab::Ranking);
        update(&mut app, key(KeyCode::Tab));
        assert_eq!(*app.current_tab(), Tab::Silver);
    }

    #[test]
    fn number_keys_jump_to_tab() {
        let mut app = App::new(5);
        update(&mut app, key(KeyCode::Char('2')));
        assert_eq!(*app.current_tab(), Tab::Ranking);
        update(&mut app, key(KeyCode::Char('1')));
        assert_eq!(*app.current_tab(), Tab::Silver);
        // Out-of-range numbers do nothing.
        update(&mut app, key(KeyCode::Char('7')));
        assert_eq!(*app.current_tab(), Tab::Silver);
    }

    #[test]
    fn r_requests_force_refresh() {
        let mut app = App::new(5);
        let action = update(&mut app, key(KeyCode::Char('r')));
        assert!(matches!(action, Some(Action::ForceRefresh)));
    }

    #[test]
    fn fetch_failure_shows_error_and_returns_to_idle() {
        let mut app = App::new(5);
        update(&mut app, Message::Refreshing);
        assert_eq!(app.refresh_state, RefreshState::Refreshing);

        update(&mut app, Message::FetchFailed("http error: timeout".into()));
        assert_eq!(app.refresh_state, RefreshState::Idle);
        assert_eq!(
            app.error_message.as_ref().map(|e| e.message.as_str()),
            Some("http error: timeout")
        );
    }
}
