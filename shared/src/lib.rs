//! Shared types for the Front Desk workspace
//!
//! Domain models, the unified error system and time helpers used by the
//! reservation ledger and its console.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{MenuItem, Reservation, ReservationId, ReservationStatus};
