//! Shared UI components.

pub mod header;
pub mod metric_card;
pub mod status_bar;
