//! Common test utilities for library integration tests.

use perch::{Occupant, SeatRegistry};

/// Builds an occupant, panicking on invalid test data.
pub fn occupant(id: &str, name: &str) -> Occupant {
    Occupant::new(id, name).expect("test occupant should be valid")
}

/// Builds a registry with the given bookings already in place.
#[allow(dead_code)]
pub fn registry_with_bookings(capacity: u32, bookings: &[(u32, &str, &str)]) -> SeatRegistry {
    let mut registry = SeatRegistry::new(capacity).expect("test capacity should be valid");
    for (seat, id, name) in bookings {
        registry
            .book_seat(*seat, occupant(id, name))
            .expect("test booking should succeed");
    }
    registry
}
