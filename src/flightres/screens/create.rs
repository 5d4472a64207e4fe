use super::form::{FormFields, FormValues};
use super::list::ListScreen;
use super::validation::validate;
use super::{apply_input, FormEvent, FormView, Frontend, ScreenSettings};
use crate::api::ReservationsApi;
use crate::error::Result;
use crate::store::DataStore;
use tracing::warn;

pub const CREATE_TITLE: &str = "Flight Reservations System";
const CREATE_ACTIONS: [&str; 3] = ["Reserve Ticket", "See Reservations", "Exit"];

pub struct CreateScreen {
    fields: FormFields,
    settings: ScreenSettings,
}

impl CreateScreen {
    pub fn open<S: DataStore>(api: &ReservationsApi<S>, settings: ScreenSettings) -> Result<Self> {
        Ok(Self {
            fields: FormFields::build(api.retrieve_destinations()?),
            settings,
        })
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn run<S: DataStore, F: Frontend>(
        &mut self,
        api: &mut ReservationsApi<S>,
        ui: &mut F,
    ) -> Result<()> {
        loop {
            let view = FormView {
                title: CREATE_TITLE,
                id: None,
                fields: &self.fields,
                actions: &CREATE_ACTIONS,
            };
            match ui.next_form_event(&view)? {
                FormEvent::Exit => break,
                FormEvent::Input(input) => apply_input(&mut self.fields, input, ui),
                FormEvent::Submit => {
                    self.submit(api, ui)?;
                }
                FormEvent::OpenList => {
                    let mut list = ListScreen::open(api, self.settings)?;
                    list.run(api, ui)?;
                }
            }
        }
        Ok(())
    }

    /// Validates and creates. Returns whether a reservation was saved.
    pub fn submit<S: DataStore, F: Frontend>(
        &mut self,
        api: &mut ReservationsApi<S>,
        ui: &mut F,
    ) -> Result<bool> {
        let validation = validate(
            self.fields.values(),
            (self.settings.clock)(),
            self.settings.rules,
        );
        if !validation.is_valid {
            warn!(missing = ?validation.missing, "reservation rejected");
            ui.notify("Error", &validation.message);
            return Ok(false);
        }

        match api.create_reservation(self.fields.values().to_fields(), None) {
            Ok(_) => {
                ui.notify("Ticket Reserved", &reservation_summary(self.fields.values()));
                self.fields.clear();
                Ok(true)
            }
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "reservation not saved");
                ui.notify("Error", &e.to_string());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

pub fn reservation_summary(values: &FormValues) -> String {
    format!(
        "Reservation for\nName: {}\nGender: {}\nPassport #: {}\nDestination: {}\nDeparture: {}\nArrival: {}\nsaved.",
        values.name,
        values.gender.map(|g| g.to_string()).unwrap_or_default(),
        values.passport_number,
        values.destination.as_deref().unwrap_or_default(),
        values.departure,
        values.arrival,
    )
}
