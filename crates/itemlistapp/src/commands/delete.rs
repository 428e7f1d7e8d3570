use crate::error::{ItemsError, Result};
use crate::store::ItemStore;

/// Remove the item with `id`. Nothing is written when no item matches.
pub fn run<S: ItemStore>(store: &mut S, id: u64) -> Result<()> {
    let mut items = store.read_items()?;
    let before = items.len();
    items.retain(|item| item.id != id);

    if items.len() == before {
        return Err(ItemsError::ItemNotFound(id));
    }

    store.write_items(&items)?;
    tracing::debug!(id, "Item deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::model::Item;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_matching_item_and_keeps_order() {
        let mut store = StoreFixture::new().with_items(3).store;
        run(&mut store, 2).unwrap();

        let listed = list::run(&store).unwrap();
        assert_eq!(listed, vec![Item::new(1, "Item 1"), Item::new(3, "Item 3")]);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = StoreFixture::new().with_items(2).store;

        let result = run(&mut store, 99);
        match result {
            Err(ItemsError::ItemNotFound(id)) => assert_eq!(id, 99),
            other => panic!("Expected ItemNotFound, got {:?}", other),
        }
    }

    #[test]
    fn missing_id_leaves_store_unwritten() {
        let mut store = StoreFixture::new().with_items(2).store;
        let _ = run(&mut store, 42);

        assert_eq!(store.write_count(), 0);
        assert_eq!(list::run(&store).unwrap().len(), 2);
    }

    #[test]
    fn delete_twice_fails_second_time() {
        let mut store = StoreFixture::new().with_items(1).store;
        run(&mut store, 1).unwrap();
        assert!(matches!(run(&mut store, 1), Err(ItemsError::ItemNotFound(1))));
        assert!(list::run(&store).unwrap().is_empty());
    }

    #[test]
    fn removes_every_entry_with_the_id() {
        // Hand-edited files can carry duplicates; delete clears them all.
        let mut store = StoreFixture::new()
            .with_item(1, "first")
            .with_item(1, "copy")
            .with_item(2, "other")
            .store;
        run(&mut store, 1).unwrap();
        assert_eq!(list::run(&store).unwrap(), vec![Item::new(2, "other")]);
    }
}
