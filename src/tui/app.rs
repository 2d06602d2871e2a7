//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::snapshot::DashboardSnapshot;

/// How long an error message stays in the status bar.
const ERROR_DISPLAY_SECS: u64 = 8;

/// Central application state container.
pub struct App {
    /// List of available tabs.
    pub tabs: Vec<Tab>,
    /// Index of the currently active tab.
    pub active_tab: usize,

    /// Last successfully built snapshot. Kept on screen when a later
    /// refresh fails.
    pub snapshot: Option<DashboardSnapshot>,
    /// Whether a refresh is currently in flight.
    pub refresh_state: RefreshState,
    /// When the current snapshot arrived.
    pub last_updated: Option<Instant>,
    /// How many ranking cards to show.
    pub top_n: usize,

    /// Error message to display (clears after timeout).
    pub error_message: Option<ErrorDisplay>,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new(top_n: usize) -> Self {
        Self {
            tabs: vec![Tab::Silver, Tab::Ranking],
            active_tab: 0,
            snapshot: None,
            refresh_state: RefreshState::Refreshing,
            last_updated: None,
            top_n,
            error_message: None,
            should_quit: false,
        }
    }

    /// Returns the currently active tab.
    pub fn current_tab(&self) -> &Tab {
        &self.tabs[self.active_tab]
    }

    /// Switches to the next tab.
    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = (self.active_tab + 1) % self.tabs.len();
        }
    }

    /// Switches to the previous tab.
    pub fn previous_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = self
                .active_tab
                .checked_sub(1)
                .unwrap_or(self.tabs.len() - 1);
        }
    }

    /// Jumps to the 1-based tab number shown in the header. Out-of-range
    /// numbers are ignored.
    pub fn select_tab(&mut self, number: usize) {
        if (1..=self.tabs.len()).contains(&number) {
            self.active_tab = number - 1;
        }
    }

    /// Installs a fresh snapshot.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.snapshot = Some(snapshot);
        self.refresh_state = RefreshState::Idle;
        self.last_updated = Some(Instant::now());
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error messages older than the display timeout.
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > Duration::from_secs(ERROR_DISPLAY_SECS)
        {
            self.error_message = None;
        }
    }
}

/// Tab types in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    /// Silver futures overview with the closing-price chart.
    Silver,
    /// KOSDAQ watchlist volume ranking.
    Ranking,
}

impl Tab {
    /// Returns the display title for the tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Silver => "Silver",
            Tab::Ranking => "Ranking",
        }
    }
}

/// Whether a snapshot refresh is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshState {
    #[default]
    Idle,
    Refreshing,
}

impl RefreshState {
    /// Returns a display string for the state.
    pub fn label(&self) -> &'static str {
        match self {
            RefreshState::Idle => "Live",
            RefreshState::Refreshing => "Refreshing...",
        }
    }
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}
