//! Data models
//!
//! Shared between the ledger and its presentation layer.
//! Timestamps are `i64` Unix millis.

pub mod menu_item;
pub mod reservation;

// Re-exports
pub use menu_item::*;
pub use reservation::*;
