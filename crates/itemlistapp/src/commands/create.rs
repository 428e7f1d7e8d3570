use crate::error::{ItemsError, Result};
use crate::model::{Item, NewItem};
use crate::store::ItemStore;

/// Next id for a collection: one past the largest id present, 1 when empty.
///
/// Ids freed by deleting the largest item are handed out again. Fails when the
/// largest id is already `u64::MAX`.
pub fn next_id(items: &[Item]) -> Result<u64> {
    items
        .iter()
        .map(|item| item.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| ItemsError::Store("id space exhausted".to_string()))
}

pub fn run<S: ItemStore>(store: &mut S, new_item: NewItem) -> Result<Item> {
    let mut items = store.read_items()?;

    let item = Item::new(next_id(&items)?, new_item.text);
    items.push(item.clone());
    store.write_items(&items)?;

    tracing::debug!(id = item.id, "Item created");
    Ok(item)
}
