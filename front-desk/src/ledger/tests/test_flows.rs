use super::*;

#[test]
fn test_front_desk_evening() {
    let mut ledger = create_test_ledger();

    let alice = ledger
        .submit_reservation("Alice", "111-1111", 4)
        .unwrap()
        .id;
    assert_eq!(ledger.seats_left(), 16);

    let err = ledger
        .submit_reservation("Bob", "222-2222", 20)
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientSeats { .. }));
    assert_eq!(ledger.seats_left(), 16);

    let err = ledger
        .submit_reservation("Alice", "333-3333", 2)
        .unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateName(_)));
    assert_eq!(ledger.seats_left(), 16);

    ledger.checkout(alice).unwrap();
    assert_eq!(ledger.seats_left(), 20);
    assert!(ledger.reservations()[0].is_checked_out());
}

#[test]
fn test_pending_selection_moves_into_reservation() {
    let mut ledger = create_test_ledger();
    ledger.select_menu_item(burger());
    ledger.select_menu_item(pizza());

    let id = ledger.submit_reservation("Carl", "444", 2).unwrap().id;

    let carl = ledger.reservations().last().unwrap();
    assert_eq!(carl.id, id);
    assert_eq!(carl.ordered_items, vec![burger(), pizza()]);
    assert!(ledger.pending_selection().is_empty());
}

#[test]
fn test_failed_submission_keeps_pending_selection() {
    let mut ledger = create_test_ledger();
    reserve(&mut ledger, "Alice", 18);
    ledger.select_menu_item(burger());

    ledger.submit_reservation("Bob", "222", 5).unwrap_err();
    ledger.submit_reservation("Alice", "222", 1).unwrap_err();

    assert_eq!(ledger.pending_selection(), &[burger()]);

    let id = reserve(&mut ledger, "Bob", 2);
    assert_eq!(ledger.reservation(id).unwrap().ordered_items, vec![burger()]);
}

#[test]
fn test_ordered_items_are_copies() {
    let mut ledger = create_test_ledger();
    let mut special = MenuItem::new(99, "Special", 30);
    ledger.select_menu_item(special.clone());
    let id = reserve(&mut ledger, "Dora", 2);

    special.name = "Changed".to_string();
    assert_eq!(ledger.reservation(id).unwrap().ordered_items[0].name, "Special");
}

#[test]
fn test_name_freed_after_delete() {
    let mut ledger = create_test_ledger();
    let id = reserve(&mut ledger, "Alice", 2);
    ledger.delete_reservation(id).unwrap();

    reserve(&mut ledger, "Alice", 3);
    assert_eq!(ledger.seats_left(), 17);
}

#[test]
fn test_checked_out_name_still_taken() {
    let mut ledger = create_test_ledger();
    let id = reserve(&mut ledger, "Alice", 2);
    ledger.checkout(id).unwrap();

    let err = ledger.submit_reservation("Alice", "111", 2).unwrap_err();
    assert_eq!(err, LedgerError::DuplicateName("Alice".into()));
}

#[test]
fn test_delete_keeps_other_ids_addressable() {
    let mut ledger = create_test_ledger();
    let a = reserve(&mut ledger, "A", 1);
    let b = reserve(&mut ledger, "B", 2);
    let c = reserve(&mut ledger, "C", 3);

    ledger.delete_reservation(a).unwrap();

    // c moved from index 2 to 1, its id still finds it
    let r = ledger.checkout(c).unwrap();
    assert_eq!(r.name, "C");
    assert!(ledger.reservation(b).unwrap().is_active());
    assert_eq!(ledger.seats_left(), 18);
    assert_seat_invariant(&ledger);
}

#[test]
fn test_filtered_view_follows_state() {
    let mut ledger = create_test_ledger();
    reserve(&mut ledger, "Alice", 2);
    let bob = ledger.submit_reservation("Bob", "555-ALIx", 2).unwrap().id;
    reserve(&mut ledger, "Carl", 2);

    ledger.set_search_query("ALI");
    let names: Vec<&str> = ledger.filtered_reservations().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);

    ledger.set_search_query("ali");
    let names: Vec<&str> = ledger.filtered_reservations().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Alice"], "phone matching is case-sensitive");

    ledger.checkout(bob).unwrap();
    ledger.set_search_query("");
    assert_eq!(ledger.filtered_reservations().count(), 3);

    ledger.set_search_query("nobody");
    assert_eq!(ledger.filtered_reservations().count(), 0);
}

#[test]
fn test_fill_to_capacity_then_release() {
    let mut ledger = create_test_ledger();
    let ids: Vec<ReservationId> = (0..5)
        .map(|i| reserve(&mut ledger, &format!("Party {}", i), 4))
        .collect();
    assert_eq!(ledger.seats_left(), 0);

    let err = ledger.submit_reservation("Late", "000", 1).unwrap_err();
    assert_eq!(
        err,
        LedgerError::InsufficientSeats {
            requested: 1,
            available: 0
        }
    );

    ledger.checkout(ids[1]).unwrap();
    ledger.delete_reservation(ids[3]).unwrap();
    assert_eq!(ledger.seats_left(), 8);
    assert_seat_invariant(&ledger);

    reserve(&mut ledger, "Late", 8);
    assert_eq!(ledger.seats_left(), 0);
}
