//! Utility modules for the dashboard.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_thousands, format_currency_k, format_plain};
