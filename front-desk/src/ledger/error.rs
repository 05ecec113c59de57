use shared::error::{AppError, ErrorCode};
use shared::models::ReservationId;
use thiserror::Error;

/// Ledger errors
///
/// Every variant is raised before any mutation, so a failed operation leaves
/// the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid guest count: {0}")]
    InvalidGuestCount(u32),

    #[error("Reservation with this name already exists: {0}")]
    DuplicateName(String),

    #[error("Not enough seats available: requested {requested}, available {available}")]
    InsufficientSeats { requested: u32, available: u32 },

    #[error("Reservation already checked out: {0}")]
    AlreadyCheckedOut(ReservationId),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),
}

impl LedgerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField(_) => ErrorCode::RequiredField,
            Self::InvalidGuestCount(_) => ErrorCode::ReservationInvalidGuestCount,
            Self::DuplicateName(_) => ErrorCode::ReservationNameExists,
            Self::InsufficientSeats { .. } => ErrorCode::InsufficientSeats,
            Self::AlreadyCheckedOut(_) => ErrorCode::ReservationAlreadyCheckedOut,
            Self::ReservationNotFound(_) => ErrorCode::ReservationNotFound,
            Self::MenuItemNotFound(_) => ErrorCode::MenuItemNotFound,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let code = err.code();
        match err {
            LedgerError::MissingField(field) => AppError::required_field(field),
            LedgerError::InvalidGuestCount(count) => {
                AppError::new(code).with_detail("guest_count", count)
            }
            LedgerError::DuplicateName(name) => AppError::new(code).with_detail("name", name),
            LedgerError::InsufficientSeats {
                requested,
                available,
            } => AppError::new(code)
                .with_detail("requested", requested)
                .with_detail("available", available),
            LedgerError::AlreadyCheckedOut(id) => {
                AppError::with_message(code, format!("Reservation {} is already checked out", id))
                    .with_detail("reservation_id", id.0)
            }
            LedgerError::ReservationNotFound(id) => {
                AppError::with_message(code, format!("Reservation {} not found", id))
                    .with_detail("reservation_id", id.0)
            }
            LedgerError::MenuItemNotFound(id) => {
                AppError::with_message(code, format!("Menu item {} not found", id))
                    .with_detail("menu_item_id", id)
            }
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
