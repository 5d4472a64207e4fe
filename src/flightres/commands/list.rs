use crate::commands::CmdResult;
use crate::error::Result;
use crate::projection::{project, TreeData};
use crate::store::{DataStore, COLUMN_LABELS};

pub fn tree<S: DataStore>(store: &S) -> Result<TreeData> {
    Ok(project(store.list_reservations()?))
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_tree(tree(store)?))
}

pub fn columns() -> Vec<&'static str> {
    COLUMN_LABELS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_all_reservations_newest_first() {
        let store = StoreFixture::new()
            .with_reservation("A", "Paris")
            .with_reservation("B", "Tokyo")
            .store;
        let result = run(&store).unwrap();
        let ids: Vec<_> = result.tree.rows().iter().map(|r| r.row.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn empty_store_gives_empty_tree() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().tree.is_empty());
    }

    #[test]
    fn columns_match_field_order() {
        let cols = columns();
        assert_eq!(cols.len(), 7);
        assert_eq!(cols[0], "Reservation Id");
        assert_eq!(cols[3], "Passport #");
        assert_eq!(cols[6], "Arrival Date/Time");
    }
}
