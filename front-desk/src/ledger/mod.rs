//! ReservationLedger - seat bookkeeping, reservations and the pending order
//!
//! The ledger is the single owner of session state. Every operation runs to
//! completion against `&mut self`; failed operations leave state untouched.
//!
//! # Seat invariant
//!
//! ```text
//! seats_left + Σ guest_count(active reservations) == total_seats
//! ```
//!
//! # Reservation lifecycle
//!
//! ```text
//! submit ──> Active ──checkout──> CheckedOut
//!              │                      │
//!              └──────delete──────────┴──> (removed)
//! ```

mod catalog;
mod error;
mod filter;

pub use catalog::MenuCatalog;
pub use error::*;
pub use filter::{SearchQuery, filter_reservations};

use crate::core::Config;
use serde::Serialize;
use shared::models::{MenuItem, Reservation, ReservationId, ReservationStatus};
use shared::util::now_millis;

/// Seat and reservation counters, for the readout and for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub total_seats: u32,
    pub seats_left: u32,
    pub active: usize,
    pub checked_out: usize,
    pub pending_items: usize,
}

/// In-memory reservation ledger for one session
pub struct ReservationLedger {
    /// Session identifier, unique per ledger instance
    session_id: String,
    total_seats: u32,
    seats_left: u32,
    /// Creation order
    reservations: Vec<Reservation>,
    /// Items chosen for the next reservation
    pending_selection: Vec<MenuItem>,
    search: SearchQuery,
    catalog: MenuCatalog,
    next_id: u64,
}

impl std::fmt::Debug for ReservationLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationLedger")
            .field("session_id", &self.session_id)
            .field("total_seats", &self.total_seats)
            .field("seats_left", &self.seats_left)
            .field("reservations", &self.reservations.len())
            .field("pending_selection", &self.pending_selection.len())
            .finish()
    }
}

impl ReservationLedger {
    /// Create a ledger with the house menu
    pub fn new(total_seats: u32) -> Self {
        Self::with_catalog(total_seats, MenuCatalog::seeded())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.total_seats)
    }

    pub fn with_catalog(total_seats: u32, catalog: MenuCatalog) -> Self {
        let session_id = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            session_id = %session_id,
            total_seats,
            menu_items = catalog.len(),
            "Reservation ledger opened"
        );
        Self {
            session_id,
            total_seats,
            seats_left: total_seats,
            reservations: Vec::new(),
            pending_selection: Vec::new(),
            search: SearchQuery::default(),
            catalog,
            next_id: 1,
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Create a reservation for `guest_count` guests
    ///
    /// Checks run in order: required fields, guest count, duplicate name,
    /// capacity. Name and phone are stored exactly as given; the duplicate
    /// check is an exact, case-sensitive comparison. On success the pending
    /// menu selection moves into the new reservation.
    pub fn submit_reservation(
        &mut self,
        name: &str,
        phone: &str,
        guest_count: u32,
    ) -> LedgerResult<&Reservation> {
        if name.is_empty() {
            return Err(LedgerError::MissingField("Name"));
        }
        if phone.is_empty() {
            return Err(LedgerError::MissingField("Phone"));
        }
        if guest_count == 0 {
            return Err(LedgerError::InvalidGuestCount(guest_count));
        }

        if self.reservations.iter().any(|r| r.name == name) {
            tracing::warn!(name = %name, "Rejected reservation: duplicate name");
            return Err(LedgerError::DuplicateName(name.to_string()));
        }

        if guest_count > self.seats_left {
            tracing::warn!(
                name = %name,
                requested = guest_count,
                available = self.seats_left,
                "Rejected reservation: not enough seats"
            );
            return Err(LedgerError::InsufficientSeats {
                requested: guest_count,
                available: self.seats_left,
            });
        }

        let id = ReservationId(self.next_id);
        self.next_id += 1;
        self.seats_left -= guest_count;

        let reservation = Reservation {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            guest_count,
            check_in_time: now_millis(),
            check_out_time: None,
            status: ReservationStatus::Active,
            ordered_items: std::mem::take(&mut self.pending_selection),
        };
        tracing::info!(
            reservation_id = %id,
            name = %reservation.name,
            guests = guest_count,
            items = reservation.ordered_items.len(),
            seats_left = self.seats_left,
            "Reservation created"
        );

        self.reservations.push(reservation);
        Ok(&self.reservations[self.reservations.len() - 1])
    }

    /// Check a reservation out and release its seats
    pub fn checkout(&mut self, id: ReservationId) -> LedgerResult<&Reservation> {
        let index = self.position(id)?;
        let reservation = &mut self.reservations[index];
        if reservation.is_checked_out() {
            tracing::warn!(reservation_id = %id, "Rejected checkout: already checked out");
            return Err(LedgerError::AlreadyCheckedOut(id));
        }

        reservation.status = ReservationStatus::CheckedOut;
        reservation.check_out_time = Some(now_millis());
        self.seats_left += reservation.guest_count;
        debug_assert!(self.seats_left <= self.total_seats);

        tracing::info!(
            reservation_id = %id,
            name = %reservation.name,
            released = reservation.guest_count,
            seats_left = self.seats_left,
            "Reservation checked out"
        );
        Ok(&self.reservations[index])
    }

    /// Remove a reservation
    ///
    /// Seats of an active reservation are returned first. Checked-out
    /// reservations can be removed too (history pruning). The caller is
    /// responsible for confirming with the operator.
    pub fn delete_reservation(&mut self, id: ReservationId) -> LedgerResult<Reservation> {
        let index = self.position(id)?;
        let removed = self.reservations.remove(index);
        if removed.is_active() {
            self.seats_left += removed.guest_count;
            debug_assert!(self.seats_left <= self.total_seats);
        }

        tracing::info!(
            reservation_id = %id,
            name = %removed.name,
            was_active = removed.is_active(),
            seats_left = self.seats_left,
            "Reservation deleted"
        );
        Ok(removed)
    }

    /// Add an item to the pending order; repeats become separate lines
    pub fn select_menu_item(&mut self, item: MenuItem) {
        tracing::debug!(menu_item_id = item.id, name = %item.name, "Menu item selected");
        self.pending_selection.push(item);
    }

    /// Add a catalog item to the pending order by id
    pub fn select_menu_item_by_id(&mut self, menu_item_id: i64) -> LedgerResult<&MenuItem> {
        let item = self
            .catalog
            .get(menu_item_id)
            .cloned()
            .ok_or(LedgerError::MenuItemNotFound(menu_item_id))?;
        self.select_menu_item(item);
        Ok(&self.pending_selection[self.pending_selection.len() - 1])
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search = SearchQuery::new(query);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Reservations matching the current search query, in creation order
    ///
    /// Recomputed on every call; the iterator can be cloned to restart it.
    pub fn filtered_reservations(&self) -> impl Iterator<Item = &Reservation> + Clone + '_ {
        filter_reservations(&self.reservations, &self.search)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    pub fn seats_left(&self) -> u32 {
        self.seats_left
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn pending_selection(&self) -> &[MenuItem] {
        &self.pending_selection
    }

    pub fn search_query(&self) -> &str {
        self.search.as_str()
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        self.catalog.items()
    }

    /// Guests currently holding seats
    pub fn active_guest_count(&self) -> u32 {
        self.reservations
            .iter()
            .filter(|r| r.is_active())
            .map(|r| r.guest_count)
            .sum()
    }

    pub fn summary(&self) -> LedgerSummary {
        let active = self.reservations.iter().filter(|r| r.is_active()).count();
        LedgerSummary {
            total_seats: self.total_seats,
            seats_left: self.seats_left,
            active,
            checked_out: self.reservations.len() - active,
            pending_items: self.pending_selection.len(),
        }
    }

    fn position(&self, id: ReservationId) -> LedgerResult<usize> {
        self.reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or(LedgerError::ReservationNotFound(id))
    }
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_TOTAL_SEATS)
    }
}

#[cfg(test)]
mod tests;
