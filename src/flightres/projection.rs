//! Display projection of the reservation table.
//!
//! The projection is recomputed from storage on every read and after every
//! mutation; it is never persisted. Rows are numbered from 1 in listing
//! order, so row 1 is always the newest reservation.

use crate::model::{
    format_datetime, Gender, Reservation, ReservationFields, ReservationId,
};
use chrono::NaiveDateTime;
use serde::Serialize;

/// A reservation flattened into the column order of the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: ReservationId,
    pub name: String,
    pub gender: Gender,
    pub passport_number: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}

impl DisplayRow {
    pub fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.gender.to_string(),
            self.passport_number.clone(),
            self.destination.clone(),
            format_datetime(&self.departure),
            format_datetime(&self.arrival),
        ]
    }

    pub fn to_fields(&self) -> ReservationFields {
        ReservationFields {
            name: Some(self.name.clone()),
            gender: Some(self.gender),
            passport_number: Some(self.passport_number.clone()),
            destination: Some(self.destination.clone()),
            departure: Some(self.departure),
            arrival: Some(self.arrival),
        }
    }
}

impl From<Reservation> for DisplayRow {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            name: r.name,
            gender: r.gender,
            passport_number: r.passport_number,
            destination: r.destination,
            departure: r.departure,
            arrival: r.arrival,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub key: String,
    pub number: usize,
    pub row: DisplayRow,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeData {
    rows: Vec<TreeRow>,
}

impl TreeData {
    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&TreeRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn by_number(&self, number: usize) -> Option<&TreeRow> {
        self.rows.iter().find(|r| r.number == number)
    }

    pub fn by_id(&self, id: ReservationId) -> Option<&TreeRow> {
        self.rows.iter().find(|r| r.row.id == id)
    }
}

pub fn row_key(number: usize) -> String {
    format!("-row_{}-", number)
}

/// Projects reservations, in the order given, into numbered tree rows.
pub fn project(reservations: Vec<Reservation>) -> TreeData {
    let rows = reservations
        .into_iter()
        .enumerate()
        .map(|(i, r)| TreeRow {
            key: row_key(i + 1),
            number: i + 1,
            row: DisplayRow::from(r),
        })
        .collect();
    TreeData { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_fields;

    fn reservation(id: ReservationId, name: &str) -> Reservation {
        sample_fields(name, "Tokyo").into_reservation(id).unwrap()
    }

    #[test]
    fn numbers_rows_in_given_order() {
        let tree = project(vec![reservation(5, "Newest"), reservation(2, "Older")]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.rows()[0].key, "-row_1-");
        assert_eq!(tree.by_number(2).unwrap().row.name, "Older");
        assert_eq!(tree.get("-row_1-").unwrap().row.id, 5);
        assert_eq!(tree.by_id(2).unwrap().number, 2);
        assert!(tree.by_number(3).is_none());
    }

    #[test]
    fn values_follow_column_order() {
        let tree = project(vec![reservation(1, "Robert Warren")]);
        assert_eq!(
            tree.rows()[0].row.values(),
            vec![
                "1",
                "Robert Warren",
                "Male",
                "M897645",
                "Tokyo",
                "2022-10-20 21:07:54",
                "2022-10-21 21:07:57",
            ]
        );
    }
}
