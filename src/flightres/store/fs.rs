use super::tables::Tables;
use super::DataStore;
use crate::error::{ReservationError, Result};
use crate::model::{Destination, Reservation, ReservationFields, ReservationId};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const DATA_FILENAME: &str = "reservations.json";

/// File-backed store. Holds only the location of its data file; the tables
/// are loaded per operation through a [`Session`].
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    /// Opens a session over the current contents of the data file.
    ///
    /// A missing file reads as empty tables; an unreadable or corrupt one is
    /// a storage failure.
    pub fn open(&self) -> Result<Session> {
        let path = self.data_file();
        let tables = if path.exists() {
            let content = fs::read_to_string(&path).map_err(ReservationError::Io)?;
            serde_json::from_str(&content).map_err(|e| {
                ReservationError::Store(format!("corrupt data file {}: {}", path.display(), e))
            })?
        } else {
            Tables::default()
        };
        debug!(path = %path.display(), "opened store session");
        Ok(Session { path, tables })
    }

    fn mutate<T>(&mut self, op: impl FnOnce(&mut Tables) -> Result<T>) -> Result<T> {
        let mut session = self.open()?;
        let value = op(session.tables_mut())?;
        session.commit()?;
        Ok(value)
    }
}

/// One logical operation against the data file. Dropping a session without
/// calling [`Session::commit`] discards any changes.
pub struct Session {
    path: PathBuf,
    tables: Tables,
}

impl Session {
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut Tables {
        &mut self.tables
    }

    /// Writes the tables back. The file is replaced through a rename so a
    /// failed write never leaves a truncated document behind.
    pub fn commit(self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(ReservationError::Io)?;
            }
        }
        let content =
            serde_json::to_string_pretty(&self.tables).map_err(ReservationError::Serialization)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(ReservationError::Io)?;
        fs::rename(&tmp, &self.path).map_err(ReservationError::Io)?;
        debug!(path = %self.path.display(), "committed store session");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn list_reservations(&self) -> Result<Vec<Reservation>> {
        Ok(self.open()?.tables().reservations_newest_first())
    }

    fn get_reservation(&self, id: ReservationId) -> Result<Reservation> {
        self.open()?.tables().get(id)
    }

    fn create_reservation(&mut self, fields: ReservationFields) -> Result<Reservation> {
        self.mutate(|t| t.insert(fields))
    }

    fn update_reservation(
        &mut self,
        id: ReservationId,
        fields: ReservationFields,
    ) -> Result<Reservation> {
        self.mutate(|t| t.update(id, fields))
    }

    fn delete_reservation(&mut self, id: ReservationId) -> Result<Reservation> {
        self.mutate(|t| t.remove(id))
    }

    fn list_destinations(&self) -> Result<Vec<Destination>> {
        Ok(self.open()?.tables().destinations_by_city())
    }

    fn add_destination(&mut self, city: &str, country: Option<&str>) -> Result<Destination> {
        self.mutate(|t| t.add_destination(city, country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_fields;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.list_reservations().unwrap().is_empty());
        assert!(store.list_destinations().unwrap().is_empty());
        assert!(!store.data_file().exists());
    }

    #[test]
    fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.add_destination("Tokyo", Some("Japan")).unwrap();
        let created = store
            .create_reservation(sample_fields("Robert Warren", "Tokyo"))
            .unwrap();

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(reopened.get_reservation(created.id).unwrap(), created);
        assert_eq!(reopened.list_destinations().unwrap()[0].city, "Tokyo");
    }

    #[test]
    fn failed_mutation_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store
            .create_reservation(sample_fields("Kept", "Paris"))
            .unwrap();
        let before = fs::read_to_string(store.data_file()).unwrap();

        assert!(store.delete_reservation(99).is_err());
        assert_eq!(fs::read_to_string(store.data_file()).unwrap(), before);
    }

    #[test]
    fn corrupt_file_is_a_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(store.data_file(), "{ not json").unwrap();
        let err = store.list_reservations().unwrap_err();
        assert!(matches!(err, ReservationError::Store(_)));
        assert!(err.to_string().contains("reservations.json"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn uncommitted_session_discards_changes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        let mut session = store.open().unwrap();
        session
            .tables_mut()
            .insert(sample_fields("Ghost", "Paris"))
            .unwrap();
        drop(session);
        assert!(store.list_reservations().unwrap().is_empty());
    }
}
