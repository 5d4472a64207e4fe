use crate::error::{ReservationError, Result};
use crate::model::{
    Destination, DestinationId, Reservation, ReservationFields, ReservationId,
};
use serde::{Deserialize, Serialize};

fn first_id() -> u64 {
    1
}

/// The persisted table pair plus their id sequences.
///
/// Ids are never reused: the sequences only move forward, even after the
/// newest record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default = "first_id")]
    pub next_reservation_id: ReservationId,
    #[serde(default = "first_id")]
    pub next_destination_id: DestinationId,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            next_reservation_id: first_id(),
            next_destination_id: first_id(),
            reservations: Vec::new(),
            destinations: Vec::new(),
        }
    }
}

impl Tables {
    pub fn reservations_newest_first(&self) -> Vec<Reservation> {
        let mut list = self.reservations.clone();
        list.sort_by(|a, b| b.id.cmp(&a.id));
        list
    }

    pub fn destinations_by_city(&self) -> Vec<Destination> {
        let mut list = self.destinations.clone();
        list.sort_by(|a, b| a.city.cmp(&b.city).then(a.id.cmp(&b.id)));
        list
    }

    pub fn get(&self, id: ReservationId) -> Result<Reservation> {
        self.reservations
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ReservationError::NotFound(id))
    }

    pub fn insert(&mut self, fields: ReservationFields) -> Result<Reservation> {
        let reservation = fields.into_reservation(self.next_reservation_id)?;
        self.next_reservation_id += 1;
        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    pub fn update(&mut self, id: ReservationId, fields: ReservationFields) -> Result<Reservation> {
        let slot = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReservationError::NotFound(id))?;
        let updated = fields.into_reservation(id)?;
        *slot = updated.clone();
        Ok(updated)
    }

    pub fn remove(&mut self, id: ReservationId) -> Result<Reservation> {
        let pos = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReservationError::NotFound(id))?;
        Ok(self.reservations.remove(pos))
    }

    pub fn add_destination(&mut self, city: &str, country: Option<&str>) -> Result<Destination> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ReservationError::MissingField("city".into()));
        }
        let destination = Destination {
            id: self.next_destination_id,
            city: city.to_string(),
            country: country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        };
        self.next_destination_id += 1;
        self.destinations.push(destination.clone());
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_datetime, Gender};

    fn fields(name: &str, destination: &str) -> ReservationFields {
        ReservationFields {
            name: Some(name.into()),
            gender: Some(Gender::Female),
            passport_number: Some("X1".into()),
            destination: Some(destination.into()),
            departure: parse_datetime("2022-10-20 21:07:54"),
            arrival: parse_datetime("2022-10-21 21:07:57"),
        }
    }

    #[test]
    fn ids_are_never_reused() {
        let mut tables = Tables::default();
        tables.insert(fields("A", "Paris")).unwrap();
        let b = tables.insert(fields("B", "Paris")).unwrap();
        tables.remove(b.id).unwrap();
        let c = tables.insert(fields("C", "Paris")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn update_checks_existence_before_fields() {
        let mut tables = Tables::default();
        let err = tables.update(9, ReservationFields::default()).unwrap_err();
        assert!(matches!(err, ReservationError::NotFound(9)));
    }

    #[test]
    fn destinations_sort_by_city_and_trim() {
        let mut tables = Tables::default();
        tables.add_destination("Tokyo", None).unwrap();
        tables.add_destination("     Sanaa", Some(" ")).unwrap();
        tables.add_destination("Havana", Some("Cuba")).unwrap();
        let cities: Vec<_> = tables
            .destinations_by_city()
            .into_iter()
            .map(|d| (d.city, d.country))
            .collect();
        assert_eq!(
            cities,
            vec![
                ("Havana".to_string(), Some("Cuba".to_string())),
                ("Sanaa".to_string(), None),
                ("Tokyo".to_string(), None),
            ]
        );
        assert!(tables.add_destination("  ", None).is_err());
    }
}
