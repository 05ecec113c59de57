use super::*;

#[test]
fn test_new_ledger() {
    let ledger = create_test_ledger();
    assert_eq!(ledger.total_seats(), 20);
    assert_eq!(ledger.seats_left(), 20);
    assert!(ledger.reservations().is_empty());
    assert!(ledger.pending_selection().is_empty());
    assert_eq!(ledger.search_query(), "");
    assert_eq!(ledger.menu_items().len(), 5);
    assert!(!ledger.session_id().is_empty());
}

#[test]
fn test_session_ids_differ() {
    let a = create_test_ledger();
    let b = create_test_ledger();
    assert_ne!(a.session_id(), b.session_id());
}

#[test]
fn test_from_config() {
    let ledger = ReservationLedger::from_config(&Config {
        total_seats: 8,
        ..Config::default()
    });
    assert_eq!(ledger.total_seats(), 8);
    assert_eq!(ledger.seats_left(), 8);
}

#[test]
fn test_submit_reservation() {
    let mut ledger = create_test_ledger();
    let before = now_millis();

    let reservation = ledger
        .submit_reservation("Alice", "111-1111", 4)
        .unwrap()
        .clone();

    assert_eq!(reservation.name, "Alice");
    assert_eq!(reservation.phone, "111-1111");
    assert_eq!(reservation.guest_count, 4);
    assert_eq!(reservation.status, ReservationStatus::Active);
    assert!(reservation.check_out_time.is_none());
    assert!(reservation.check_in_time >= before);
    assert!(reservation.ordered_items.is_empty());

    assert_eq!(ledger.seats_left(), 16);
    assert_eq!(ledger.reservations().len(), 1);
    assert_seat_invariant(&ledger);
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let mut ledger = create_test_ledger();
    let a = reserve(&mut ledger, "A", 1);
    let b = reserve(&mut ledger, "B", 1);
    ledger.delete_reservation(b).unwrap();
    let c = reserve(&mut ledger, "C", 1);

    assert!(a < b);
    assert!(b < c, "deleted ids must not be reused");
}

#[test]
fn test_submit_stores_inputs_verbatim() {
    let mut ledger = create_test_ledger();
    let id = ledger
        .submit_reservation(" Bob ", " 111 ", 2)
        .unwrap()
        .id;

    let r = ledger.reservation(id).unwrap();
    assert_eq!(r.name, " Bob ");
    assert_eq!(r.phone, " 111 ");

    let err = ledger.submit_reservation(" Bob ", "222", 1).unwrap_err();
    assert_eq!(err, LedgerError::DuplicateName(" Bob ".to_string()));
    assert_seat_invariant(&ledger);
}

#[test]
fn test_duplicate_name_rejected() {
    let mut ledger = create_test_ledger();
    reserve(&mut ledger, "Alice", 4);

    let err = ledger
        .submit_reservation("Alice", "333-3333", 2)
        .unwrap_err();
    assert_eq!(err, LedgerError::DuplicateName("Alice".to_string()));
    assert_eq!(ledger.seats_left(), 16);
    assert_eq!(ledger.reservations().len(), 1);
}

#[test]
fn test_duplicate_check_is_case_sensitive() {
    let mut ledger = create_test_ledger();
    reserve(&mut ledger, "Alice", 2);

    ledger.submit_reservation("alice", "222", 2).unwrap();
    assert_eq!(ledger.reservations().len(), 2);
    assert_eq!(ledger.seats_left(), 16);
}

#[test]
fn test_insufficient_seats_rejected() {
    let mut ledger = create_test_ledger();
    reserve(&mut ledger, "Alice", 4);

    let err = ledger
        .submit_reservation("Bob", "222-2222", 20)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::InsufficientSeats {
            requested: 20,
            available: 16
        }
    );
    assert_eq!(ledger.seats_left(), 16);
    assert_eq!(ledger.reservations().len(), 1);
}

#[test]
fn test_missing_fields_rejected() {
    let mut ledger = create_test_ledger();

    assert_eq!(
        ledger.submit_reservation("", "111", 1).unwrap_err(),
        LedgerError::MissingField("Name")
    );
    assert_eq!(
        ledger.submit_reservation("Alice", "", 1).unwrap_err(),
        LedgerError::MissingField("Phone")
    );
    assert_eq!(
        ledger.submit_reservation("Alice", "111", 0).unwrap_err(),
        LedgerError::InvalidGuestCount(0)
    );

    assert!(ledger.reservations().is_empty());
    assert_eq!(ledger.seats_left(), 20);
}

#[test]
fn test_checkout() {
    let mut ledger = create_test_ledger();
    let id = reserve(&mut ledger, "Alice", 4);
    let checked_in = ledger.reservation(id).unwrap().check_in_time;

    let r = ledger.checkout(id).unwrap();
    assert!(r.is_checked_out());
    assert!(r.check_out_time.unwrap() >= checked_in);

    assert_eq!(ledger.seats_left(), 20);
    assert_eq!(ledger.reservations().len(), 1, "checked out stays listed");
    assert_seat_invariant(&ledger);
}

#[test]
fn test_checkout_twice_rejected() {
    let mut ledger = create_test_ledger();
    let id = reserve(&mut ledger, "Alice", 4);
    reserve(&mut ledger, "Bob", 3);

    ledger.checkout(id).unwrap();
    let first_checkout = ledger.reservation(id).unwrap().check_out_time;
    let seats = ledger.seats_left();

    let err = ledger.checkout(id).unwrap_err();
    assert_eq!(err, LedgerError::AlreadyCheckedOut(id));
    assert_eq!(ledger.seats_left(), seats);
    assert_eq!(ledger.reservation(id).unwrap().check_out_time, first_checkout);
}

#[test]
fn test_checkout_unknown_id() {
    let mut ledger = create_test_ledger();
    let err = ledger.checkout(ReservationId(99)).unwrap_err();
    assert_eq!(err, LedgerError::ReservationNotFound(ReservationId(99)));
}

#[test]
fn test_delete_active_returns_seats() {
    let mut ledger = create_test_ledger();
    let id = reserve(&mut ledger, "Alice", 5);
    assert_eq!(ledger.seats_left(), 15);

    let removed = ledger.delete_reservation(id).unwrap();
    assert_eq!(removed.name, "Alice");
    assert_eq!(ledger.seats_left(), 20);
    assert!(ledger.reservations().is_empty());
    assert!(ledger.reservation(id).is_none());
}

#[test]
fn test_delete_checked_out_keeps_seats() {
    let mut ledger = create_test_ledger();
    let id = reserve(&mut ledger, "Alice", 5);
    reserve(&mut ledger, "Bob", 2);
    ledger.checkout(id).unwrap();
    assert_eq!(ledger.seats_left(), 18);

    ledger.delete_reservation(id).unwrap();
    assert_eq!(ledger.seats_left(), 18);
    assert_eq!(ledger.reservations().len(), 1);
    assert_seat_invariant(&ledger);
}

#[test]
fn test_delete_unknown_id() {
    let mut ledger = create_test_ledger();
    reserve(&mut ledger, "Alice", 1);
    let err = ledger.delete_reservation(ReservationId(42)).unwrap_err();
    assert_eq!(err, LedgerError::ReservationNotFound(ReservationId(42)));
    assert_eq!(ledger.reservations().len(), 1);
}

#[test]
fn test_select_menu_item_allows_repeats() {
    let mut ledger = create_test_ledger();
    ledger.select_menu_item(burger());
    ledger.select_menu_item(burger());
    ledger.select_menu_item(pizza());

    assert_eq!(ledger.pending_selection(), &[burger(), burger(), pizza()]);
}

#[test]
fn test_select_menu_item_by_id() {
    let mut ledger = create_test_ledger();
    let item = ledger.select_menu_item_by_id(3).unwrap().clone();
    assert_eq!(item.name, "Pasta");
    assert_eq!(ledger.pending_selection().len(), 1);

    let err = ledger.select_menu_item_by_id(404).unwrap_err();
    assert_eq!(err, LedgerError::MenuItemNotFound(404));
    assert_eq!(ledger.pending_selection().len(), 1);
}

#[test]
fn test_set_search_query() {
    let mut ledger = create_test_ledger();
    ledger.set_search_query("ali");
    assert_eq!(ledger.search_query(), "ali");
    ledger.set_search_query(String::new());
    assert_eq!(ledger.search_query(), "");
}

#[test]
fn test_summary() {
    let mut ledger = create_test_ledger();
    let a = reserve(&mut ledger, "Alice", 4);
    reserve(&mut ledger, "Bob", 2);
    ledger.checkout(a).unwrap();
    ledger.select_menu_item(burger());

    assert_eq!(
        ledger.summary(),
        LedgerSummary {
            total_seats: 20,
            seats_left: 18,
            active: 1,
            checked_out: 1,
            pending_items: 1,
        }
    );
}

#[test]
fn test_ledger_error_into_app_error() {
    use shared::error::{AppError, ErrorCode};

    let err: AppError = LedgerError::InsufficientSeats {
        requested: 20,
        available: 16,
    }
    .into();
    assert_eq!(err.code, ErrorCode::InsufficientSeats);
    assert_eq!(err.message, "Not enough seats available!");
    assert_eq!(err.detail("requested").unwrap(), 20);
    assert_eq!(err.detail("available").unwrap(), 16);

    let err: AppError = LedgerError::DuplicateName("Alice".into()).into();
    assert_eq!(err.code, ErrorCode::ReservationNameExists);
    assert_eq!(err.message, "Reservation with this name already exists!");

    let err: AppError = LedgerError::AlreadyCheckedOut(ReservationId(3)).into();
    assert_eq!(err.code, ErrorCode::ReservationAlreadyCheckedOut);
    assert_eq!(err.message, "Reservation #3 is already checked out");

    let err: AppError = LedgerError::MissingField("Phone").into();
    assert_eq!(err.code, ErrorCode::RequiredField);
    assert_eq!(err.message, "Phone is required");

    let err: AppError = LedgerError::MenuItemNotFound(9).into();
    assert_eq!(err.code, ErrorCode::MenuItemNotFound);
}
