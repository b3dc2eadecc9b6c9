//! # Kestrel Engine Core
//!
//! Platform-agnostic foundation for the Kestrel engine: the event model,
//! the event dispatcher, and input codes. Nothing in this crate depends on
//! a windowing or graphics API; platform crates translate native input into
//! these types.

pub mod events;
pub mod input;

pub use events::{Event, EventCategory, EventData, EventDispatcher, EventType};
pub use input::{KeyCode, MouseButton};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version on startup.
pub fn init() {
    log::info!("Kestrel Core v{} initialized", VERSION);
}
