//! Tab layouts.

pub mod ranking;
pub mod silver;
