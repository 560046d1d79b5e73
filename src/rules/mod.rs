//! Reducer trait for event-sourced game variants.
//!
//! Games implement `EventReducer` to define:
//! - The empty per-player state
//! - How one event modifies state
//! - The ordering key of the log
//!
//! The trait supplies ordering, folding, resumption and history on top.

pub mod engine;

pub use engine::EventReducer;
