//! # Storage Layer
//!
//! This module defines the storage abstraction for flightres. The [`DataStore`]
//! trait lets the coordination layer work against any backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - Both tables live in a single `reservations.json` document
//!   - Every logical operation opens a session, and only mutations commit
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!
//! Both delegate the table semantics (id assignment, ordering, required
//! fields, not-found handling) to [`tables::Tables`], so the two backends
//! cannot drift apart.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── reservations.json   # Reservation and Destination tables + id sequences
//! └── config.json         # Application configuration
//! ```

use crate::error::Result;
use crate::model::{Destination, Reservation, ReservationFields, ReservationId};

pub mod fs;
pub mod memory;
pub mod tables;

/// Display names of the reservation columns, in record field order.
pub const COLUMN_LABELS: [&str; 7] = [
    "Reservation Id",
    "Name",
    "Gender",
    "Passport #",
    "Destination",
    "Departure Date/Time",
    "Arrival Date/Time",
];

/// Abstract interface for the reservation and destination tables.
pub trait DataStore {
    /// All reservations, newest (highest id) first
    fn list_reservations(&self) -> Result<Vec<Reservation>>;

    /// Get a reservation by id
    fn get_reservation(&self, id: ReservationId) -> Result<Reservation>;

    /// Insert a reservation, assigning it the next id
    fn create_reservation(&mut self, fields: ReservationFields) -> Result<Reservation>;

    /// Replace every field of an existing reservation
    fn update_reservation(
        &mut self,
        id: ReservationId,
        fields: ReservationFields,
    ) -> Result<Reservation>;

    /// Remove a reservation, returning the removed record
    fn delete_reservation(&mut self, id: ReservationId) -> Result<Reservation>;

    /// All destinations, alphabetical by city
    fn list_destinations(&self) -> Result<Vec<Destination>>;

    /// Insert a destination (used when seeding the table)
    fn add_destination(&mut self, city: &str, country: Option<&str>) -> Result<Destination>;
}
