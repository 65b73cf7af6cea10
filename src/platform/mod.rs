//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (mouse and touch collapse into one pointer stream)

pub mod input;

pub use input::PointerEvent;
