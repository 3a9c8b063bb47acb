//! Core types for the eventfinder service.
//!
//! This crate is shared by the HTTP server and the CLI:
//! - `Event`, `NewEvent` and `Category` for community events
//! - `geo` for distance filtering and nearest-first ordering
//! - `intake` for validating and normalizing new event submissions
//! - `store` for the persistent SQLite event store

pub mod config;
pub mod error;
pub mod event;
pub mod geo;
pub mod intake;
pub mod store;

// Re-export the event types at crate root for convenience
pub use event::*;
