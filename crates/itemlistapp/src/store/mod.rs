//! # Storage Layer
//!
//! This module defines the storage abstraction for itemlist. The [`ItemStore`] trait
//! lets the command layer run against different backends.
//!
//! ## Whole-Collection Model
//!
//! The store holds exactly one thing: the ordered list of items. There are no
//! per-item operations at this level.
//!
//! - **Read**: load every item, in stored order.
//! - **Write**: replace every item, in the given order.
//!
//! Id assignment, lookup and removal all happen in memory in `commands/`.
//!
//! ## Recovery
//!
//! - A missing backing file is an empty list.
//! - A backing file that does not parse as a list of items is also treated as an
//!   empty list. The discard is logged (`warn`), never surfaced to the caller, and
//!   the file is left untouched until the next successful write replaces it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file on disk, replaced atomically on every write.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! data.json        # [{"id": 1, "text": "..."}, ...], pretty-printed UTF-8
//! ```

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract interface for item storage.
pub trait ItemStore {
    /// Load the full collection, in stored order.
    fn read_items(&self) -> Result<Vec<Item>>;

    /// Replace the full collection.
    fn write_items(&mut self, items: &[Item]) -> Result<()>;
}
