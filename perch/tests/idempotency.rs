//! Idempotency tests for book and cancel.
//!
//! Repeated operations in the same seat state must keep failing as
//! no-ops without corrupting the chart.

mod common;

use common::{occupant, registry_with_bookings};
use perch::SeatRegistry;

#[test]
fn double_booking_fails_and_preserves_first() {
    let mut registry = SeatRegistry::new(25).unwrap();
    registry.book_seat(1, occupant("S001", "Alice")).unwrap();

    for _ in 0..3 {
        let err = registry.book_seat(1, occupant("S002", "Bob")).unwrap_err();
        assert!(err.is_state_conflict());
    }

    assert_eq!(registry.list_seats()[0].status_text(), "S001 - Alice");
    assert_eq!(registry.booked_count(), 1);
}

#[test]
fn double_cancel_fails_and_stays_free() {
    let mut registry = registry_with_bookings(25, &[(5, "S001", "Alice")]);

    assert!(registry.cancel_seat(5).is_ok());
    for _ in 0..3 {
        let err = registry.cancel_seat(5).unwrap_err();
        assert!(err.is_state_conflict());
    }

    assert_eq!(registry.list_seats()[4].status_text(), "available");
    assert_eq!(registry.booked_count(), 0);
}

#[test]
fn cancel_on_fresh_registry_fails_everywhere() {
    let mut registry = SeatRegistry::new(10).unwrap();

    for seat in 1..=10 {
        assert!(registry.cancel_seat(seat).unwrap_err().is_state_conflict());
    }

    assert_eq!(registry.booked_count(), 0);
}

#[test]
fn book_cancel_cycles_are_stable() {
    let mut registry = SeatRegistry::new(5).unwrap();

    for round in 0..10 {
        let id = format!("S{round:03}");
        registry.book_seat(3, occupant(&id, "Cycler")).unwrap();
        let released = registry.cancel_seat(3).unwrap();
        assert_eq!(released.student_id(), id);
    }

    assert_eq!(registry, SeatRegistry::new(5).unwrap());
}
