//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return a `UiEvent`. They perform
//! I/O and never touch state; the runtime spawns them and forwards the
//! result to the inbox.

pub mod api;
pub mod media;

pub use api::*;
pub use media::*;
