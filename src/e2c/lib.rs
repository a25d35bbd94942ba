//! # e2c Architecture
//!
//! e2c is a small translation lookup: string keys map to string values, kept in
//! one JSON file per *intent* under a data directory. The binary exposes two
//! verbs, `get` and `put`, both against the default intent.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints values, maps errors             │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) → Command Layer (commands/*.rs)         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dictionary (dict.rs)                                       │
//! │  - Lowercases keys, falls back to the default intent        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - JsonStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Diagnostics go through `tracing`.
//!
//! ## Concurrency
//!
//! None. Each invocation does one read or one read-modify-write of a single
//! file. Two processes writing the same intent race, and the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `get` and `put`
//! - [`dict`]: Intent fallback and key normalization
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Intent`, `Entries`
//! - [`config`]: Data directory and default intent
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dict;
pub mod error;
pub mod model;
pub mod store;
