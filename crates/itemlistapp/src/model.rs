use serde::{Deserialize, Serialize};

/// A single entry in the list.
///
/// The serialized form is exactly `{"id": <int>, "text": <string>}`, both in the
/// backing file and over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub text: String,
}

impl Item {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Payload for creating an item. The id is always assigned by the store side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub text: String,
}

impl NewItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
