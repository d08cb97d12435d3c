//! Structured event stream for observers (presentation, telemetry).
//!
//! ## Key Types
//!
//! - `GameEvent`: one thing that happened on the table
//! - `Observer`: receives events in causal order; cannot touch state
//! - `EventLog`: observer that records everything

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, Observer};
