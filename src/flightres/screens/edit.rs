use super::form::FormFields;
use super::validation::validate;
use super::{apply_input, FormEvent, FormView, Frontend, ScreenSettings};
use crate::api::{DisplaySurface, ReservationsApi};
use crate::error::Result;
use crate::model::ReservationId;
use crate::projection::DisplayRow;
use crate::store::DataStore;
use tracing::warn;

pub const EDIT_TITLE: &str = "Edit Reservation";
const EDIT_ACTIONS: [&str; 2] = ["Save Reservation", "Exit"];

pub struct EditScreen {
    id: ReservationId,
    fields: FormFields,
    settings: ScreenSettings,
}

impl EditScreen {
    /// Builds the same form as the create screen and fills it from the
    /// row as it was cached by the list, without going back to storage.
    pub fn open<S: DataStore>(
        api: &ReservationsApi<S>,
        row: &DisplayRow,
        settings: ScreenSettings,
    ) -> Result<Self> {
        let mut fields = FormFields::build(api.retrieve_destinations()?);
        fields.populate(row);
        Ok(Self {
            id: row.id,
            fields,
            settings,
        })
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn run<S: DataStore, F: Frontend>(
        &mut self,
        api: &mut ReservationsApi<S>,
        ui: &mut F,
        observer: &mut dyn DisplaySurface,
    ) -> Result<()> {
        loop {
            let view = FormView {
                title: EDIT_TITLE,
                id: Some(self.id),
                fields: &self.fields,
                actions: &EDIT_ACTIONS,
            };
            match ui.next_form_event(&view)? {
                FormEvent::Exit => break,
                FormEvent::Input(input) => apply_input(&mut self.fields, input, ui),
                FormEvent::Submit => {
                    self.save(api, ui, &mut *observer)?;
                }
                // Not offered on this screen.
                FormEvent::OpenList => {}
            }
        }
        Ok(())
    }

    /// Validates and updates. Returns whether the record was saved.
    ///
    /// A record that vanished or a field the store refuses is reported with
    /// the raw error text; storage failures propagate.
    pub fn save<S: DataStore, F: Frontend>(
        &mut self,
        api: &mut ReservationsApi<S>,
        ui: &mut F,
        observer: &mut dyn DisplaySurface,
    ) -> Result<bool> {
        let validation = validate(
            self.fields.values(),
            (self.settings.clock)(),
            self.settings.rules,
        );
        if !validation.is_valid {
            ui.notify("Error", &validation.message);
            return Ok(false);
        }

        match api.update_reservation(self.id, self.fields.values().to_fields(), Some(observer)) {
            Ok(_) => {
                ui.notify("Success", "Edit Saved");
                Ok(true)
            }
            Err(e) if e.is_recoverable() => {
                warn!(id = self.id, error = %e, "edit not saved");
                ui.notify("Error", &e.to_string());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
