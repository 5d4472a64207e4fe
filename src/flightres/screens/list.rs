use super::edit::EditScreen;
use super::{Frontend, ListEvent, ListView, ScreenSettings};
use crate::api::{DisplaySurface, ReservationsApi};
use crate::error::Result;
use crate::model::ReservationId;
use crate::projection::{TreeData, TreeRow};
use crate::store::DataStore;
use tracing::{debug, warn};

pub const LIST_TITLE: &str = "Reservations";

/// The browsable reservation tree.
///
/// Holds its own cached projection; the coordination layer replaces it
/// through [`DisplaySurface`] after every mutation made from this screen or
/// from an edit screen opened on top of it.
pub struct ListScreen {
    columns: Vec<&'static str>,
    tree: TreeData,
    selected: Option<ReservationId>,
    refreshes: usize,
    settings: ScreenSettings,
}

impl ListScreen {
    pub fn open<S: DataStore>(api: &ReservationsApi<S>, settings: ScreenSettings) -> Result<Self> {
        Ok(Self {
            columns: api.retrieve_column_names(),
            tree: api.retrieve_reservations()?,
            selected: None,
            refreshes: 0,
            settings,
        })
    }

    pub fn tree(&self) -> &TreeData {
        &self.tree
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.selected.and_then(|id| self.tree.by_id(id))
    }

    /// Delete and Edit are only offered while a row is selected.
    pub fn actions_enabled(&self) -> bool {
        self.selected_row().is_some()
    }

    pub fn run<S: DataStore, F: Frontend>(
        &mut self,
        api: &mut ReservationsApi<S>,
        ui: &mut F,
    ) -> Result<()> {
        loop {
            let view = ListView {
                title: LIST_TITLE,
                columns: &self.columns,
                tree: &self.tree,
                selected: self.selected_row().map(|r| r.number),
                actions_enabled: self.actions_enabled(),
            };
            match ui.next_list_event(&view)? {
                ListEvent::Exit => break,
                ListEvent::Select(number) => {
                    // Stale row numbers (e.g. right after a refresh) are ignored.
                    if let Some(row) = self.tree.by_number(number) {
                        self.selected = Some(row.row.id);
                    }
                }
                ListEvent::Delete => self.delete_selected(api, ui)?,
                ListEvent::Edit => {
                    let Some(row) = self.selected_row().map(|r| r.row.clone()) else {
                        continue;
                    };
                    let mut edit = EditScreen::open(api, &row, self.settings)?;
                    edit.run(api, ui, self)?;
                }
            }
        }
        Ok(())
    }

    fn delete_selected<S: DataStore, F: Frontend>(
        &mut self,
        api: &mut ReservationsApi<S>,
        ui: &mut F,
    ) -> Result<()> {
        let Some(id) = self.selected_row().map(|r| r.row.id) else {
            return Ok(());
        };
        match api.delete_reservation(id, Some(&mut *self as &mut dyn DisplaySurface)) {
            Ok(_) => {}
            Err(e) if e.is_recoverable() => {
                warn!(id, error = %e, "delete failed");
                ui.notify("Error", &e.to_string());
                self.update_projection(api.retrieve_reservations()?);
                self.refresh();
            }
            Err(e) => return Err(e),
        }
        self.selected = None;
        Ok(())
    }
}

impl DisplaySurface for ListScreen {
    fn update_projection(&mut self, tree: TreeData) {
        self.tree = tree;
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
        if self.selected_row().is_none() {
            self.selected = None;
        }
        debug!(rows = self.tree.len(), "reservation list refreshed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AppPaths;
    use crate::config::TemporalRules;
    use crate::model::{local_now, Gender};
    use crate::screens::form::FormInput;
    use crate::screens::testing::{Scripted, ScriptedFrontend};
    use crate::screens::FormEvent;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn settings() -> ScreenSettings {
        ScreenSettings {
            rules: TemporalRules::AsWritten,
            clock: local_now,
        }
    }

    fn api() -> ReservationsApi<InMemoryStore> {
        ReservationsApi::new(
            StoreFixture::new()
                .with_destinations(&["Paris", "Tokyo"])
                .with_reservation("Alice", "Paris")
                .with_reservation("Bob", "Tokyo")
                .store,
            AppPaths {
                data_dir: PathBuf::from("unused"),
            },
        )
    }

    #[test]
    fn actions_need_a_selection() {
        let mut api = api();
        let mut ui = ScriptedFrontend::new(vec![
            Scripted::List(ListEvent::Delete),
            Scripted::List(ListEvent::Edit),
            Scripted::List(ListEvent::Select(9)),
        ]);
        let mut screen = ListScreen::open(&api, settings()).unwrap();
        screen.run(&mut api, &mut ui).unwrap();

        assert_eq!(api.retrieve_reservations().unwrap().len(), 2);
        assert!(ui.form_titles.is_empty());
        assert!(!screen.actions_enabled());
    }

    #[test]
    fn delete_removes_row_refreshes_and_disables_actions() {
        let mut api = api();
        let mut ui = ScriptedFrontend::new(vec![
            Scripted::List(ListEvent::Select(1)),
            Scripted::List(ListEvent::Delete),
        ]);
        let mut screen = ListScreen::open(&api, settings()).unwrap();
        screen.run(&mut api, &mut ui).unwrap();

        assert_eq!(screen.refreshes(), 1);
        assert_eq!(screen.tree().len(), 1);
        assert_eq!(screen.tree().rows()[0].row.name, "Alice");
        assert!(!screen.actions_enabled());
        assert_eq!(ui.list_sizes, vec![2, 2, 1]);
    }

    #[test]
    fn delete_of_vanished_record_reports_not_found() {
        let mut api = api();
        let mut screen = ListScreen::open(&api, settings()).unwrap();
        // Someone else removed Bob after the list was rendered.
        api.delete_reservation(2, None).unwrap();

        let mut ui = ScriptedFrontend::new(vec![
            Scripted::List(ListEvent::Select(1)),
            Scripted::List(ListEvent::Delete),
        ]);
        screen.run(&mut api, &mut ui).unwrap();

        assert_eq!(ui.titles(), vec!["Error"]);
        assert_eq!(ui.notifications[0].1, "Reservation not found: 2");
        assert_eq!(screen.tree().len(), 1);
    }

    #[test]
    fn edit_saves_and_refreshes_this_list() {
        let mut api = api();
        let mut ui = ScriptedFrontend::new(vec![
            Scripted::List(ListEvent::Select(2)),
            Scripted::List(ListEvent::Edit),
            Scripted::Form(FormEvent::Input(FormInput::Destination("Tokyo".into()))),
            // the fixture dates are in the past with arrival after departure
            Scripted::Form(FormEvent::Input(FormInput::Arrival(
                "2022-10-20 21:07:54".into(),
            ))),
            Scripted::Form(FormEvent::Input(FormInput::Gender(Gender::Female))),
            Scripted::Form(FormEvent::Submit),
            Scripted::Form(FormEvent::Exit),
            Scripted::List(ListEvent::Exit),
        ]);
        let mut screen = ListScreen::open(&api, settings()).unwrap();
        screen.run(&mut api, &mut ui).unwrap();

        assert_eq!(ui.titles(), vec!["Success"]);
        assert_eq!(screen.refreshes(), 1);
        let alice = &screen.selected_row().unwrap().row;
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.destination, "Tokyo");
        assert_eq!(alice.gender, Gender::Female);
        assert_eq!(api.reservation(1).unwrap().destination, "Tokyo");
    }
}
