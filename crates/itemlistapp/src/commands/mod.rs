//! # Command Layer
//!
//! This module contains the **core business logic** of itemlist. Each command lives
//! in its own submodule as a plain function over an [`ItemStore`](crate::store::ItemStore).
//!
//! ## Read-Modify-Write
//!
//! Every command follows the same straight line:
//!
//! 1. Read the full collection from the store
//! 2. Inspect or change it in memory
//! 3. Write the full collection back (mutating commands only)
//!
//! A command that fails before step 3 writes nothing, so the stored collection is
//! either fully updated or untouched.
//!
//! ## What Commands Do NOT Do
//!
//! - **HTTP**: No status codes, no request types. Not-found is an `ItemsError`,
//!   the HTTP layer picks the status.
//! - **Locking**: Commands assume exclusive access to the store for their duration.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch, including the
//! "nothing written" guarantees.
//!
//! ## Command Modules
//!
//! - [`list`]: Return the whole collection
//! - [`create`]: Append an item with the next free id
//! - [`delete`]: Remove an item by id

pub mod create;
pub mod delete;
pub mod list;
