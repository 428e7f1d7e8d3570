//! # Itemlist Architecture
//!
//! Itemlist is a **UI-agnostic list library**. The HTTP server in `crates/itemlist`
//! is one client of it; nothing in here knows about requests, status codes or sockets.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (crates/itemlist)                               │
//! │  - Routing, JSON extraction, status codes, static files     │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store                                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Read the whole list, change it, write the whole list     │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ItemStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read-Modify-Write
//!
//! There is no cache. Every operation loads the full collection from the store,
//! and every mutating operation writes the full collection back. Callers that
//! share one store between threads must serialize access to the [`api::ItemsApi`]
//! themselves; the server does this with a single mutex.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//! 2. **Store** (`tests/`): `FileStore` against a temp directory.
//! 3. **HTTP**: router tests live with the server crate.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for list, create and delete
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `NewItem`)
//! - [`config`]: Layered server configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
