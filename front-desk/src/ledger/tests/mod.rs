use super::*;

mod test_core;
mod test_flows;

fn create_test_ledger() -> ReservationLedger {
    ReservationLedger::new(20)
}

// ========================================================================
// Helper: create a reservation and return its id
// ========================================================================

fn reserve(ledger: &mut ReservationLedger, name: &str, guests: u32) -> ReservationId {
    let phone = format!("{}-0000", name.len());
    ledger
        .submit_reservation(name, &phone, guests)
        .unwrap_or_else(|e| panic!("Failed to reserve for {}: {}", name, e))
        .id
}

fn burger() -> MenuItem {
    MenuItem::new(1, "Burger", 10)
}

fn pizza() -> MenuItem {
    MenuItem::new(2, "Pizza", 12)
}

/// seats_left + active guests == total_seats
fn assert_seat_invariant(ledger: &ReservationLedger) {
    assert_eq!(
        ledger.seats_left() + ledger.active_guest_count(),
        ledger.total_seats(),
        "seat invariant broken: {:?}",
        ledger.summary()
    );
}
