//! # Snipz Architecture
//!
//! Snipz is a **UI-agnostic snippet library**. The terminal client in `crates/snipz`
//! is one consumer of it; a browser or desktop front end could drive the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (crates/snipz)                                      │
//! │  - Parses arguments, renders results, asks the user         │
//! │  - Owns the persisted Selection between invocations         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Carries the configured default folder                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Folder/snippet rules, migration, import/export           │
//! │  - load → validate → mutate → save, nothing written on error│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore: the whole Store as one serialized blob        │
//! │  - StorageBackend: flat key-value medium (fs or memory)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr, never exits the process
//! and never talks to a terminal. Questions for the user go through the
//! [`interaction::Interaction`] trait; notifications travel back as leveled
//! [`commands::CmdMessage`]s.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Persistence adapter and storage backends
//! - [`model`]: `Store`, `Folder`, `Selection`
//! - [`collation`]: Folder ordering for listings
//! - [`interaction`]: Confirm/prompt capability injected by the client
//! - [`session`]: Persisting the selection between runs
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collation;
pub mod commands;
pub mod config;
pub mod error;
pub mod interaction;
pub mod model;
pub mod session;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
