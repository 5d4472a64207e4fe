use crate::model::{format_datetime, parse_datetime, Gender, ReservationFields};
use crate::projection::DisplayRow;

/// Raw values as typed into the reservation form.
///
/// Text inputs are kept verbatim (including unparseable dates) so that a
/// rejected submission leaves the form exactly as the user left it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub passport_number: String,
    pub gender: Option<Gender>,
    pub departure: String,
    pub arrival: String,
    pub destination: Option<String>,
}

impl FormValues {
    pub fn to_fields(&self) -> ReservationFields {
        ReservationFields {
            name: non_empty(&self.name),
            gender: self.gender,
            passport_number: non_empty(&self.passport_number),
            destination: self.destination.clone(),
            departure: parse_datetime(&self.departure),
            arrival: parse_datetime(&self.arrival),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// One edit to a single form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Name(String),
    PassportNumber(String),
    Gender(Gender),
    Departure(String),
    Arrival(String),
    Destination(String),
    ClearDestination,
}

/// The field set shared by the create and edit screens: the current values
/// plus the destination list they select from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    destinations: Vec<String>,
    values: FormValues,
}

impl FormFields {
    pub fn build(destinations: Vec<String>) -> Self {
        Self {
            destinations,
            values: FormValues::default(),
        }
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values = FormValues::default();
    }

    /// Selects the list entry matching `label` (case-insensitively).
    /// Returns false, leaving the selection unchanged, if no entry matches.
    pub fn select_destination(&mut self, label: &str) -> bool {
        let wanted = label.trim().to_lowercase();
        match self
            .destinations
            .iter()
            .find(|d| d.to_lowercase() == wanted)
        {
            Some(found) => {
                self.values.destination = Some(found.clone());
                true
            }
            None => false,
        }
    }

    /// Applies one input; false means a destination that is not in the list.
    pub fn apply(&mut self, input: FormInput) -> bool {
        match input {
            FormInput::Name(v) => self.values.name = v,
            FormInput::PassportNumber(v) => self.values.passport_number = v,
            FormInput::Gender(g) => self.values.gender = Some(g),
            FormInput::Departure(v) => self.values.departure = v,
            FormInput::Arrival(v) => self.values.arrival = v,
            FormInput::Destination(label) => return self.select_destination(&label),
            FormInput::ClearDestination => self.values.destination = None,
        }
        true
    }

    /// Fills every input from a cached display row.
    ///
    /// A destination that is no longer offered leaves the selection empty,
    /// which validation then reports as missing.
    pub fn populate(&mut self, row: &DisplayRow) {
        self.values = FormValues {
            name: row.name.clone(),
            passport_number: row.passport_number.clone(),
            gender: Some(row.gender),
            departure: format_datetime(&row.departure),
            arrival: format_datetime(&row.arrival),
            destination: None,
        };
        self.select_destination(&row.destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_fields;

    fn fields() -> FormFields {
        FormFields::build(vec!["London".into(), "Paris".into(), "Tokyo".into()])
    }

    #[test]
    fn destination_must_match_an_entry() {
        let mut form = fields();
        assert!(form.apply(FormInput::Destination("tokyo".into())));
        assert_eq!(form.values().destination.as_deref(), Some("Tokyo"));
        assert!(!form.apply(FormInput::Destination("Atlantis".into())));
        assert_eq!(form.values().destination.as_deref(), Some("Tokyo"));
    }

    #[test]
    fn populate_then_convert_round_trips_row() {
        let row: DisplayRow = sample_fields("Robert Warren", "Tokyo")
            .into_reservation(3)
            .unwrap()
            .into();
        let mut form = fields();
        form.populate(&row);
        assert_eq!(form.values().departure, "2022-10-20 21:07:54");
        assert_eq!(form.values().to_fields(), row.to_fields());
    }

    #[test]
    fn populate_with_retired_destination_leaves_selection_empty() {
        let row: DisplayRow = sample_fields("A", "Moscow")
            .into_reservation(1)
            .unwrap()
            .into();
        let mut form = fields();
        form.populate(&row);
        assert!(form.values().destination.is_none());
    }

    #[test]
    fn clear_resets_values_but_keeps_list() {
        let mut form = fields();
        form.apply(FormInput::Name("X".into()));
        form.clear();
        assert_eq!(form.values(), &FormValues::default());
        assert_eq!(form.destinations().len(), 3);
    }
}
