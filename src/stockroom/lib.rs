//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory engine**. The library owns the
//! catalog and its invariants; the CLI binary is just one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (inventory.rs)                                 │
//! │  - CRUD over the sorted, duplicate-free item collection     │
//! │  - Composes sort + search to keep the invariant after every │
//! │    mutation                                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Leaves (item.rs, sort.rs, search.rs, codec.rs)      │
//! │  - Validated record type, merge sort, binary search, and    │
//! │    the delimited line format                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything below the CLI takes regular Rust arguments, returns
//! `Result`, never touches stdout/stderr, and never exits the process.
//! Failures are values; the binary decides how to render them.
//!
//! ## The Sortedness Invariant
//!
//! The collection held by [`inventory::Inventory`] is always sorted
//! ascending by item id with no duplicate ids. Mutations re-establish the
//! invariant before returning (via the merge sort in [`sort`]), which is
//! what lets every lookup go through the binary search in [`search`].
//!
//! ## Module Overview
//!
//! - [`item`]: the validated, sanitized inventory record
//! - [`sort`]: explicit stable merge sort, ascending by id
//! - [`search`]: binary search over an id-sorted slice
//! - [`inventory`]: the store and its CRUD operations
//! - [`codec`]: the comma-delimited persistence format
//! - [`config`]: persisted CLI configuration
//! - [`error`]: error types

pub mod codec;
pub mod config;
pub mod error;
pub mod inventory;
pub mod item;
pub mod search;
pub mod sort;
