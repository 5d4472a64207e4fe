//! # API Facade (coordination layer)
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every reservation operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Adapts** storage records into the display projection ([`TreeData`])
//! - **Propagates** mutation results to an optional [`DisplaySurface`]
//!
//! ## Refresh Propagation
//!
//! Each mutating call takes `Option<&mut dyn DisplaySurface>`. When one is
//! given and the storage operation succeeds, the full projection is
//! recomputed, handed to the surface, and the surface's no-argument
//! [`DisplaySurface::refresh`] is invoked exactly once. Nothing is registered
//! or remembered between calls. A failed mutation leaves the surface alone.
//!
//! ## Generic Over DataStore
//!
//! `ReservationsApi<S: DataStore>`:
//! - Production: `ReservationsApi<FileStore>`
//! - Testing: `ReservationsApi<InMemoryStore>`

use crate::commands;
use crate::config::AppConfig;
use crate::error::Result;
use crate::model::{Reservation, ReservationFields, ReservationId};
use crate::projection::TreeData;
use crate::store::DataStore;

/// A surface currently showing reservation data.
///
/// Implemented by whatever presents the projection; the coordination layer
/// only knows this capability, never the concrete screen type.
pub trait DisplaySurface {
    /// Replace the surface's cached projection.
    fn update_projection(&mut self, tree: TreeData);

    /// Re-render from the cached projection.
    fn refresh(&mut self);
}

pub struct ReservationsApi<S: DataStore> {
    store: S,
    paths: commands::AppPaths,
}

impl<S: DataStore> ReservationsApi<S> {
    pub fn new(store: S, paths: commands::AppPaths) -> Self {
        Self { store, paths }
    }

    pub fn retrieve_reservations(&self) -> Result<TreeData> {
        commands::list::tree(&self.store)
    }

    pub fn retrieve_destinations(&self) -> Result<Vec<String>> {
        commands::destinations::labels(&self.store)
    }

    pub fn retrieve_column_names(&self) -> Vec<&'static str> {
        commands::list::columns()
    }

    pub fn list_reservations(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn list_destinations(&self) -> Result<commands::CmdResult> {
        commands::destinations::run(&self.store)
    }

    pub fn reservation(&self, id: ReservationId) -> Result<Reservation> {
        self.store.get_reservation(id)
    }

    pub fn create_reservation(
        &mut self,
        fields: ReservationFields,
        observer: Option<&mut dyn DisplaySurface>,
    ) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.store, fields)?;
        self.notify(observer)?;
        Ok(result)
    }

    pub fn update_reservation(
        &mut self,
        id: ReservationId,
        fields: ReservationFields,
        observer: Option<&mut dyn DisplaySurface>,
    ) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.store, id, fields)?;
        self.notify(observer)?;
        Ok(result)
    }

    pub fn delete_reservation(
        &mut self,
        id: ReservationId,
        observer: Option<&mut dyn DisplaySurface>,
    ) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.notify(observer)?;
        Ok(result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths)
    }

    /// Seeds destinations on first use without creating any other state.
    pub fn ensure_destinations(&mut self, config: &AppConfig) -> Result<usize> {
        commands::init::seed_destinations(&mut self.store, config)
    }

    pub fn paths(&self) -> &commands::AppPaths {
        &self.paths
    }

    fn notify(&self, observer: Option<&mut dyn DisplaySurface>) -> Result<()> {
        if let Some(surface) = observer {
            let tree = commands::list::tree(&self.store)?;
            surface.update_projection(tree);
            surface.refresh();
        }
        Ok(())
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{AppPaths, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReservationError;
    use crate::store::memory::fixtures::{sample_fields, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingSurface {
        tree: TreeData,
        refreshes: usize,
    }

    impl DisplaySurface for RecordingSurface {
        fn update_projection(&mut self, tree: TreeData) {
            self.tree = tree;
        }

        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    fn api_with(store: InMemoryStore) -> ReservationsApi<InMemoryStore> {
        ReservationsApi::new(
            store,
            AppPaths {
                data_dir: PathBuf::from("unused"),
            },
        )
    }

    #[test]
    fn create_refreshes_observer_with_new_projection() {
        let mut api = api_with(InMemoryStore::new());
        let mut surface = RecordingSurface::default();
        api.create_reservation(sample_fields("Robert Warren", "Tokyo"), Some(&mut surface))
            .unwrap();

        assert_eq!(surface.refreshes, 1);
        assert_eq!(surface.tree.len(), 1);
        assert_eq!(surface.tree.rows()[0].row.destination, "Tokyo");
    }

    #[test]
    fn mutation_without_observer_still_applies() {
        let mut api = api_with(StoreFixture::new().with_reservation("A", "Paris").store);
        api.delete_reservation(1, None).unwrap();
        assert!(api.retrieve_reservations().unwrap().is_empty());
    }

    #[test]
    fn failed_mutation_does_not_refresh() {
        let mut api = api_with(InMemoryStore::new());
        let mut surface = RecordingSurface::default();
        let err = api
            .update_reservation(5, sample_fields("A", "Paris"), Some(&mut surface))
            .unwrap_err();
        assert!(matches!(err, ReservationError::NotFound(5)));
        assert_eq!(surface.refreshes, 0);
    }

    #[test]
    fn delete_refresh_drops_row() {
        let store = StoreFixture::new()
            .with_reservation("A", "Paris")
            .with_reservation("B", "Tokyo")
            .store;
        let mut api = api_with(store);
        let mut surface = RecordingSurface {
            tree: api.retrieve_reservations().unwrap(),
            refreshes: 0,
        };
        api.delete_reservation(2, Some(&mut surface)).unwrap();
        assert_eq!(surface.refreshes, 1);
        assert_eq!(surface.tree.len(), 1);
        assert_eq!(surface.tree.rows()[0].row.name, "A");
    }

    #[test]
    fn retrieves_destinations_and_columns() {
        let api = api_with(
            StoreFixture::new()
                .with_destinations(&["Tokyo", "Havana"])
                .store,
        );
        assert_eq!(api.retrieve_destinations().unwrap(), vec!["Havana", "Tokyo"]);
        assert_eq!(api.retrieve_column_names()[1], "Name");
    }
}
