//! # Kestrel Graphics
//!
//! Graphics-API-agnostic abstractions for the Kestrel engine.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`BufferLayout`] - Memory shape of a vertex record with derived offsets and stride
//! - [`VertexBuffer`] / [`IndexBuffer`] - Abstract buffer handle contracts
//! - [`Shader`] - Abstract shader handle created from a source pair
//! - [`RenderBackend`] - Trait concrete backends implement; resource factory plus clear/draw
//! - [`DummyBackend`] - Recording backend for tests and headless runs
//!
//! Concrete GPU backends live outside this crate and implement
//! [`RenderBackend`]; the layout model here defines the attribute-binding
//! contract they must honor.
//!
//! ## Example
//!
//! ```
//! use kestrel_graphics::{BufferElement, BufferLayout, ShaderDataType};
//!
//! let layout = BufferLayout::new(vec![
//!     BufferElement::new(ShaderDataType::Float3, "a_position"),
//!     BufferElement::new(ShaderDataType::Float4, "a_color"),
//! ]);
//! assert_eq!(layout.stride(), 28);
//! ```

pub mod backend;
pub mod buffer;
pub mod error;
pub mod shader;

// Re-export main types for convenience
pub use backend::{create_backend, BackendType, DummyBackend, RecordedOp, RenderBackend};
pub use buffer::{BufferElement, BufferLayout, IndexBuffer, ShaderDataType, VertexBuffer};
pub use error::GraphicsError;
pub use shader::{Shader, ShaderDescriptor};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// This should be called before using any graphics functionality.
pub fn init() {
    log::info!("Kestrel Graphics v{} initialized", VERSION);
}
