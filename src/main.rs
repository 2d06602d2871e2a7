use std::sync::Arc;

use tokio::sync::mpsc;

use sterling::Result;
use sterling::config::fetch_config;
use sterling::snapshot::SnapshotService;
use sterling::tui::event::{
    Action, spawn_event_reader, spawn_refresh_loop, spawn_tick_timer, update,
};
use sterling::tui::{App, Message, TerminalGuard, render};

/// UI tick interval for error auto-clear and status-bar age updates.
const TICK_INTERVAL_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; the TUI owns stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = fetch_config()?;
    let service = Arc::new(SnapshotService::new(&config)?);

    // The guard restores the terminal when it drops, on every exit path.
    let mut terminal = TerminalGuard::enter()?;
    run(&mut terminal, service, &config).await
}

/// Runs the message loop until quit.
async fn run(
    terminal: &mut TerminalGuard,
    service: Arc<SnapshotService>,
    config: &sterling::config::AppConfig,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let (force_tx, force_rx) = mpsc::unbounded_channel::<()>();

    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);
    spawn_refresh_loop(service, tx, force_rx, config.refresh_interval);

    let mut app = App::new(config.top_n);

    loop {
        terminal.draw(|frame| render(frame, &app))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(Action::ForceRefresh) = update(&mut app, message) {
            // Refresh loop gone means we are shutting down anyway.
            let _ = force_tx.send(());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
