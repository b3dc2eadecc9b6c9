//! Event model and dispatch.
//!
//! This module provides the platform-agnostic event pipeline:
//!
//! - [`Event`] - A single event instance with a monotonic handled flag
//! - [`EventData`] - Closed set of event kinds with their payloads
//! - [`EventType`] - Unit tag per kind, used for exact-match dispatch
//! - [`EventCategory`] - Coarse classification bitmask for filtering
//! - [`EventDispatcher`] - Binds one event to type-specific handlers
//!
//! Platform layers construct events from native input; the application
//! runtime routes them through a dispatcher and then through its layer
//! stack. Events are transient: they live for one routing pass and are
//! never persisted.

mod dispatcher;
mod event;

pub use dispatcher::EventDispatcher;
pub use event::{Event, EventCategory, EventData, EventType};
