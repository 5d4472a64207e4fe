use crate::commands::{AppPaths, CmdMessage, CmdResult};
use crate::config::AppConfig;
use crate::error::{ReservationError, Result};
use crate::store::DataStore;
use std::fs;

/// Creates the data directory and seeds the destination table from config.
///
/// Seeding only happens while the table is empty, so running this again is
/// harmless.
pub fn run<S: DataStore>(store: &mut S, paths: &AppPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir).map_err(ReservationError::Io)?;
    let config = AppConfig::load(&paths.data_dir)?;

    let mut result = CmdResult::default();
    let added = seed_destinations(store, &config)?;
    if added > 0 {
        result.add_message(CmdMessage::success(format!(
            "Added {} destinations",
            added
        )));
    } else {
        result.add_message(CmdMessage::info("Destinations already present"));
    }
    result.add_message(CmdMessage::success(format!(
        "Initialized reservations store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}

pub fn seed_destinations<S: DataStore>(store: &mut S, config: &AppConfig) -> Result<usize> {
    if !store.list_destinations()?.is_empty() {
        return Ok(0);
    }
    for seed in &config.destinations {
        store.add_destination(&seed.city, seed.country.as_deref())?;
    }
    Ok(config.destinations.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::destinations;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths {
            data_dir: dir.path().join("data"),
        };
        let mut store = InMemoryStore::new();

        let first = run(&mut store, &paths).unwrap();
        assert_eq!(first.messages[0].content, "Added 11 destinations");
        run(&mut store, &paths).unwrap();

        let labels = destinations::labels(&store).unwrap();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[0], "Beijing");
        assert!(paths.data_dir.exists());
    }
}
