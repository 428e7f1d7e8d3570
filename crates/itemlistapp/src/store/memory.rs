use super::ItemStore;
use crate::error::{ItemsError, Result};
use crate::model::Item;

/// In-memory store for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    simulate_write_error: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful `write_items` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ItemStore for InMemoryStore {
    fn read_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn write_items(&mut self, items: &[Item]) -> Result<()> {
        if self.simulate_write_error {
            return Err(ItemsError::Store("Simulated write error".to_string()));
        }
        self.items = items.to_vec();
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed `count` items with ids 1..=count.
        pub fn with_items(mut self, count: u64) -> Self {
            for id in 1..=count {
                self.store.items.push(Item::new(id, format!("Item {}", id)));
            }
            self
        }

        pub fn with_item(mut self, id: u64, text: &str) -> Self {
            self.store.items.push(Item::new(id, text));
            self
        }
    }
}
