//! # Gatherings Architecture
//!
//! Gatherings is a **UI-agnostic event directory library**. This is not a CLI
//! application that happens to have some library code — it's a library that
//! happens to ship a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders cards, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade (api.rs — EventDirectory)                           │
//! │  - submit / set criteria / pick tab / read derived views    │
//! │  - Notifies observers after every mutation                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logic (filter.rs, tabs.rs, validate.rs)                    │
//! │  - Pure functions over the event sequence                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (model.rs, store.rs, seed.rs)                         │
//! │  - Immutable Event records, ordered in-memory store         │
//! │  - submit-and-prepend is the only mutation                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never assumes a terminal.
//! The same core could back a web UI or a REST endpoint unchanged.
//!
//! ## Execution Model
//!
//! Single-threaded and synchronous: every operation runs to completion
//! before the next interaction is processed, and the store mutates only
//! through [`api::EventDirectory::submit_event`]. No persistence — the
//! directory lives and dies with the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The [`api::EventDirectory`] facade — entry point for all operations
//! - [`filter`]: Filter engine and unique-college extraction
//! - [`tabs`]: The five-view tab partitioner and active-tab policy
//! - [`validate`]: Submission validation rules
//! - [`store`]: The ordered in-memory event store
//! - [`model`]: Core data types ([`model::Event`], [`model::EventType`], [`model::EventInput`])
//! - [`seed`]: The built-in launch catalog
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod filter;
pub mod model;
pub mod seed;
pub mod store;
pub mod tabs;
pub mod validate;
