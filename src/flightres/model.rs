use crate::error::{ReservationError, Result};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type ReservationId = u64;
pub type DestinationId = u64;

/// Textual form of every timestamp shown to or typed by the user.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("Invalid gender: {} (expected male or female)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub name: String,
    pub gender: Gender,
    pub passport_number: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub city: String,
    pub country: Option<String>,
}

/// The writable fields of a reservation, as submitted by a form.
///
/// Every field is optional here because the storage layer is the one that
/// rejects absent values, mirroring a `NOT NULL` column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFields {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub passport_number: Option<String>,
    pub destination: Option<String>,
    pub departure: Option<NaiveDateTime>,
    pub arrival: Option<NaiveDateTime>,
}

impl ReservationFields {
    pub fn from_reservation(reservation: &Reservation) -> Self {
        Self {
            name: Some(reservation.name.clone()),
            gender: Some(reservation.gender),
            passport_number: Some(reservation.passport_number.clone()),
            destination: Some(reservation.destination.clone()),
            departure: Some(reservation.departure),
            arrival: Some(reservation.arrival),
        }
    }

    /// Builds the stored record, failing on the first absent required field.
    pub fn into_reservation(self, id: ReservationId) -> Result<Reservation> {
        Ok(Reservation {
            id,
            name: required_text(self.name, "name")?,
            gender: self
                .gender
                .ok_or_else(|| ReservationError::MissingField("gender".into()))?,
            passport_number: required_text(self.passport_number, "passport_number")?,
            destination: required_text(self.destination, "destination")?,
            departure: self
                .departure
                .ok_or_else(|| ReservationError::MissingField("departure_dt".into()))?,
            arrival: self
                .arrival
                .ok_or_else(|| ReservationError::MissingField("arrival_dt".into()))?,
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ReservationError::MissingField(field.to_string())),
    }
}

pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT).ok()
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Current local wall-clock time, the reference point for temporal checks.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
