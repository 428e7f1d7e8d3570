//! # Itemlist Server
//!
//! HTTP front for the [`itemlistapp`] library. Everything HTTP-shaped lives here:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  cli/        flags over config, logging, start the server   │
//! │  server.rs   router, shared state, graceful shutdown        │
//! │  handlers.rs extract → ItemsApi → status code + JSON        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  itemlistapp::api::ItemsApi
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/` | 200 front-end HTML | 500 if `index.html` is missing |
//! | GET | `/items` | 200 JSON array | |
//! | POST | `/items` | 201 created item | 4xx on a malformed body |
//! | DELETE | `/items/:id` | 204 | 404 if no such id |
//! | GET | `/static/*` | static file | 404 |
//!
//! Error bodies are `{"detail": "..."}`.

pub mod cli;
pub mod handlers;
pub mod logging;
pub mod server;
