//! The submission predicate shared by the create and edit screens.
//!
//! Required fields are checked first; the date/time checks only run for
//! inputs that are present and parse. Which direction the recency checks
//! point is decided by [`TemporalRules`]. Under `AsWritten` a date *after*
//! now is rejected and an arrival *after* departure is rejected, with
//! messages that talk about "before". `Forward` turns each comparison
//! around. Equal instants never fail.

use super::form::FormValues;
use crate::config::TemporalRules;
use crate::model::parse_datetime;
use chrono::NaiveDateTime;

pub const DEPARTURE_BEFORE_NOW: &str = "Departure Date comes before today's date!!!";
pub const ARRIVAL_BEFORE_NOW: &str = "Arrival Date comes before today's date!!!";
pub const ARRIVAL_BEFORE_DEPARTURE: &str = "Arrival Date comes before Departure Date!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub missing: Vec<&'static str>,
    pub temporal: Vec<String>,
    pub message: String,
}

fn out_of_order(rules: TemporalRules, value: NaiveDateTime, reference: NaiveDateTime) -> bool {
    match rules {
        TemporalRules::AsWritten => value > reference,
        TemporalRules::Forward => value < reference,
    }
}

fn parsed(
    raw: &str,
    label: &str,
    temporal: &mut Vec<String>,
) -> Option<NaiveDateTime> {
    if raw.trim().is_empty() {
        return None;
    }
    let dt = parse_datetime(raw);
    if dt.is_none() {
        temporal.push(format!(
            "{} is not a valid date/time (expected YYYY-MM-DD HH:MM:SS)",
            label
        ));
    }
    dt
}

pub fn validate(values: &FormValues, now: NaiveDateTime, rules: TemporalRules) -> Validation {
    let mut missing = Vec::new();
    let mut temporal = Vec::new();

    if values.name.trim().is_empty() {
        missing.push("Name");
    }
    if values.passport_number.trim().is_empty() {
        missing.push("Passport Number");
    }
    if values.gender.is_none() {
        missing.push("Gender");
    }
    if values.departure.trim().is_empty() {
        missing.push("Departure Date");
    }
    let departure = parsed(&values.departure, "Departure Date", &mut temporal);
    if let Some(dep) = departure {
        if out_of_order(rules, dep, now) {
            temporal.push(DEPARTURE_BEFORE_NOW.to_string());
        }
    }

    if values.arrival.trim().is_empty() {
        missing.push("Arrival Date");
    }
    let arrival = parsed(&values.arrival, "Arrival Date", &mut temporal);
    if let Some(arr) = arrival {
        if out_of_order(rules, arr, now) {
            temporal.push(ARRIVAL_BEFORE_NOW.to_string());
        }
    }

    if let (Some(dep), Some(arr)) = (departure, arrival) {
        if out_of_order(rules, arr, dep) {
            temporal.push(ARRIVAL_BEFORE_DEPARTURE.to_string());
        }
    }

    if values.destination.is_none() {
        missing.push("Destination");
    }

    let message = format!(
        "Missing data for the following fields: \n{}\n\nDate/Time Errors:\n{}",
        missing.join(",\n"),
        temporal.join("\n")
    );

    Validation {
        is_valid: missing.is_empty() && temporal.is_empty(),
        missing,
        temporal,
        message,
    }
}
