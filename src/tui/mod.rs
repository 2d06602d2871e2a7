//! Terminal User Interface for the sterling dashboard.
//!
//! Ratatui-based rendering of the silver overview and the KOSDAQ volume
//! ranking, driven by a single message pump (terminal input, tick timer,
//! background refresh loop).

pub mod app;
pub mod components;
pub mod event;
pub mod format;
pub mod tabs;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{TerminalGuard, Tui};
pub use ui::render;
