//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all itemlist operations, whichever front-end is driving them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the store
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<Item>`, `Result<Vec<Item>>`)
//!
//! Business logic belongs in `commands/*.rs`; HTTP concerns belong in the server.
//!
//! ## Generic Over ItemStore
//!
//! `ItemsApi<S: ItemStore>` is generic over the storage backend:
//! - Production: `ItemsApi<FileStore>`
//! - Testing: `ItemsApi<InMemoryStore>`
//!
//! ## Sharing
//!
//! Mutating methods take `&mut self`. A multi-threaded caller wraps the facade in a
//! mutex, which makes each read-modify-write cycle exclusive and rules out lost
//! updates between concurrent creates and deletes.

use crate::commands;
use crate::error::Result;
use crate::model::{Item, NewItem};
use crate::store::ItemStore;

/// The main API facade for itemlist operations.
pub struct ItemsApi<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> ItemsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_items(&self) -> Result<Vec<Item>> {
        commands::list::run(&self.store)
    }

    pub fn create_item(&mut self, new_item: NewItem) -> Result<Item> {
        commands::create::run(&mut self.store, new_item)
    }

    pub fn delete_item(&mut self, id: u64) -> Result<()> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemsError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn create_dispatches_and_returns_item() {
        let mut api = ItemsApi::new(InMemoryStore::new());
        let item = api.create_item(NewItem::new("a")).unwrap();
        assert_eq!(item, Item::new(1, "a"));
        assert_eq!(api.store().write_count(), 1);
    }

    #[test]
    fn list_dispatches() {
        let mut api = ItemsApi::new(InMemoryStore::new());
        api.create_item(NewItem::new("a")).unwrap();
        assert_eq!(api.list_items().unwrap(), vec![Item::new(1, "a")]);
    }

    #[test]
    fn delete_dispatches() {
        let mut api = ItemsApi::new(InMemoryStore::new());
        api.create_item(NewItem::new("a")).unwrap();
        api.delete_item(1).unwrap();
        assert!(matches!(
            api.delete_item(1),
            Err(ItemsError::ItemNotFound(1))
        ));
    }
}
