//! # critter-memory
//!
//! Persistent preference storage for Critter (SQLite-backed).

pub mod store;

pub use store::Store;
