//! Property-based tests for the seat registry.
//!
//! These tests verify the registry's invariants over arbitrary
//! capacities, seat numbers, and occupant identities.

use proptest::prelude::*;

use super::SeatRegistry;
use crate::seat::Occupant;

fn occupant_strategy() -> impl Strategy<Value = Occupant> {
    ("[A-Za-z0-9]{1,8}", "[A-Za-z]{1,12}")
        .prop_map(|(id, name)| Occupant::new(id, name).unwrap())
}

proptest! {
    // PROPERTY: construction yields exactly `capacity` free seats
    // numbered 1..=capacity with no gaps or duplicates.
    #[test]
    fn prop_fresh_registry_numbering(capacity in 1u32..200) {
        let registry = SeatRegistry::new(capacity).unwrap();
        let records = registry.list_seats();

        prop_assert_eq!(records.len() as u32, capacity);
        for (index, record) in records.iter().enumerate() {
            prop_assert_eq!(record.number.value() as usize, index + 1);
            prop_assert!(record.is_available());
        }
    }

    // PROPERTY: out-of-range operations are observational no-ops.
    #[test]
    fn prop_out_of_range_never_mutates(
        capacity in 1u32..100,
        offset in 1u32..100,
        occupant in occupant_strategy(),
    ) {
        let mut registry = SeatRegistry::new(capacity).unwrap();
        let before = registry.clone();

        let beyond = capacity + offset;
        prop_assert!(registry.book_seat(0, occupant.clone()).unwrap_err().is_out_of_range());
        prop_assert!(registry.book_seat(beyond, occupant).unwrap_err().is_out_of_range());
        prop_assert!(registry.cancel_seat(0).unwrap_err().is_out_of_range());
        prop_assert!(registry.cancel_seat(beyond).unwrap_err().is_out_of_range());

        prop_assert_eq!(registry, before);
    }

    // PROPERTY: booking one seat changes that seat only; capacity and
    // every other seat are untouched.
    #[test]
    fn prop_booking_is_local(
        capacity in 1u32..100,
        seat_index in 0u32..100,
        occupant in occupant_strategy(),
    ) {
        let seat = seat_index % capacity + 1;
        let mut registry = SeatRegistry::new(capacity).unwrap();
        let before = registry.list_seats();

        registry.book_seat(seat, occupant).unwrap();

        prop_assert_eq!(registry.capacity(), capacity);
        let after = registry.list_seats();
        for (old, new) in before.iter().zip(after.iter()) {
            if new.number.value() == seat {
                prop_assert!(!new.is_available());
            } else {
                prop_assert_eq!(old, new);
            }
        }
    }

    // PROPERTY: cancel is the inverse of book.
    #[test]
    fn prop_book_then_cancel_restores(
        capacity in 1u32..100,
        seat_index in 0u32..100,
        occupant in occupant_strategy(),
    ) {
        let seat = seat_index % capacity + 1;
        let mut registry = SeatRegistry::new(capacity).unwrap();
        let before = registry.clone();

        registry.book_seat(seat, occupant.clone()).unwrap();
        let released = registry.cancel_seat(seat).unwrap();

        prop_assert_eq!(released, occupant);
        prop_assert_eq!(registry, before);
    }

    // PROPERTY: the first booking wins; a second booking fails and
    // leaves the occupant unchanged.
    #[test]
    fn prop_first_booking_wins(
        capacity in 1u32..100,
        seat_index in 0u32..100,
        first in occupant_strategy(),
        second in occupant_strategy(),
    ) {
        let seat = seat_index % capacity + 1;
        let mut registry = SeatRegistry::new(capacity).unwrap();

        registry.book_seat(seat, first.clone()).unwrap();
        let err = registry.book_seat(seat, second).unwrap_err();

        prop_assert!(err.is_state_conflict());
        prop_assert_eq!(registry.seat(seat).unwrap().occupant(), Some(&first));
    }

    // PROPERTY: repeated cancels in the same state keep failing without
    // corrupting the chart.
    #[test]
    fn prop_cancel_is_idempotent_safe(
        capacity in 1u32..100,
        seat_index in 0u32..100,
        occupant in occupant_strategy(),
    ) {
        let seat = seat_index % capacity + 1;
        let mut registry = SeatRegistry::new(capacity).unwrap();

        registry.book_seat(seat, occupant).unwrap();
        registry.cancel_seat(seat).unwrap();

        let snapshot = registry.clone();
        for _ in 0..3 {
            prop_assert!(registry.cancel_seat(seat).unwrap_err().is_state_conflict());
        }
        prop_assert_eq!(registry, snapshot);
    }
}
