use super::tables::Tables;
use super::DataStore;
use crate::error::Result;
use crate::model::{Destination, Reservation, ReservationFields, ReservationId};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Tables,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn list_reservations(&self) -> Result<Vec<Reservation>> {
        Ok(self.tables.reservations_newest_first())
    }

    fn get_reservation(&self, id: ReservationId) -> Result<Reservation> {
        self.tables.get(id)
    }

    fn create_reservation(&mut self, fields: ReservationFields) -> Result<Reservation> {
        self.tables.insert(fields)
    }

    fn update_reservation(
        &mut self,
        id: ReservationId,
        fields: ReservationFields,
    ) -> Result<Reservation> {
        self.tables.update(id, fields)
    }

    fn delete_reservation(&mut self, id: ReservationId) -> Result<Reservation> {
        self.tables.remove(id)
    }

    fn list_destinations(&self) -> Result<Vec<Destination>> {
        Ok(self.tables.destinations_by_city())
    }

    fn add_destination(&mut self, city: &str, country: Option<&str>) -> Result<Destination> {
        self.tables.add_destination(city, country)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{parse_datetime, Gender};

    /// A complete, storable set of fields for the given traveler.
    pub fn sample_fields(name: &str, destination: &str) -> ReservationFields {
        ReservationFields {
            name: Some(name.to_string()),
            gender: Some(Gender::Male),
            passport_number: Some("M897645".to_string()),
            destination: Some(destination.to_string()),
            departure: parse_datetime("2022-10-20 21:07:54"),
            arrival: parse_datetime("2022-10-21 21:07:57"),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_destinations(mut self, cities: &[&str]) -> Self {
            for city in cities {
                self.store.add_destination(city, None).unwrap();
            }
            self
        }

        pub fn with_reservation(mut self, name: &str, destination: &str) -> Self {
            self.store
                .create_reservation(sample_fields(name, destination))
                .unwrap();
            self
        }
    }
}
