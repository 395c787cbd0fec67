//! # Cinelog Architecture
//!
//! Cinelog is a **UI-agnostic movie catalog library**. The interactive menu is
//! just one client of it; the library itself never touches a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Renders the menu, reads prompts, formats output          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure catalog logic: list, add, stats, search, ...        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract MovieStore trait                                │
//! │  - FileStore (JSON), SqliteStore, InMemoryStore (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The one deliberate exception is [`omdb`], which performs a blocking HTTP
//! request; it still reports failures as values, never to the terminal.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//!    This is where the lion's share of testing lives.
//! 2. **Stores**: `FileStore` against temp dirs, `SqliteStore` in memory.
//! 3. **CLI**: end-to-end menu sequences piped through the binary's stdin
//!    (`tests/`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Catalog logic for each menu action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data type ([`model::Movie`])
//! - [`omdb`]: Metadata lookup against an OMDb-shaped HTTP API
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod omdb;
pub mod store;
