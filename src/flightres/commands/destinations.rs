use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Destination labels (city names) in alphabetical order.
pub fn labels<S: DataStore>(store: &S) -> Result<Vec<String>> {
    Ok(store
        .list_destinations()?
        .into_iter()
        .map(|d| d.city)
        .collect())
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_destinations(labels(store)?))
}
