use crate::error::Result;
use crate::model::Item;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &S) -> Result<Vec<Item>> {
    store.read_items()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().is_empty());
    }

    #[test]
    fn lists_in_stored_order() {
        let fixture = StoreFixture::new()
            .with_item(7, "seven")
            .with_item(2, "two")
            .with_item(5, "five");

        let ids: Vec<u64> = run(&fixture.store).unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 2, 5]);
    }

    #[test]
    fn listing_does_not_write() {
        let fixture = StoreFixture::new().with_items(3);
        run(&fixture.store).unwrap();
        assert_eq!(fixture.store.write_count(), 0);
    }
}
