//! # Trove Architecture
//!
//! Trove is a **UI-agnostic record-keeping library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
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
//! │  - Business logic and the input-validation boundary         │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repo.rs) over Storage (store/)                 │
//! │  - Repository owns the in-memory collection                 │
//! │  - Abstract StoreAdapter trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, repository, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a desktop app, or any
//! other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Repository** (`repo.rs`): thorough unit tests of the collection
//!    invariants against `InMemoryStore`. This is where the lion's share of
//!    testing lives.
//! 2. **Commands** (`commands/*.rs`): per-operation tests, including the
//!    validation boundary.
//! 3. **CLI** (`main.rs` + `tests/`): end-to-end tests through the binary
//!    with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`repo`]: The repository owning the record collection
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `Draft`)
//! - [`config`]: Configuration management
//! - [`init`]: Data-directory discovery and context construction
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod repo;
pub mod store;
