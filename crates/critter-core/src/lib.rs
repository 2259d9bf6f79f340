//! # critter-core
//!
//! Core types, traits, configuration, and error handling for Critter.

pub mod config;
pub mod context;
pub mod error;
pub mod lang;
pub mod manifest;
pub mod page;
pub mod traits;

pub use config::shellexpand;
