//! Buffer layout model and abstract buffer contracts.
//!
//! This module provides the graphics-API-independent buffer surface:
//!
//! - [`ShaderDataType`] - Closed set of attribute types with size/component tables
//! - [`BufferElement`] / [`BufferLayout`] - Vertex record description with derived offsets and stride
//! - [`VertexBuffer`] / [`IndexBuffer`] - Handle contracts concrete backends implement
//!
//! Buffers are created through a
//! [`RenderBackend`](crate::backend::RenderBackend); this module only defines
//! what any backend must honor.

mod layout;

pub use layout::{BufferElement, BufferLayout, ShaderDataType};

/// Contract for a backend vertex buffer.
///
/// Holds exactly one [`BufferLayout`] describing its records. The layout
/// starts empty and is usually set right after creation, before the buffer
/// is first bound for drawing.
pub trait VertexBuffer {
    /// Make this buffer the active vertex source.
    fn bind(&self);

    /// Release this buffer from the active slot.
    fn unbind(&self);

    /// Layout of the records in this buffer.
    fn layout(&self) -> &BufferLayout;

    /// Replace the record layout.
    fn set_layout(&mut self, layout: BufferLayout);
}

/// Contract for a backend index buffer.
///
/// The index count is fixed when the backend creates the buffer and never
/// changes over the handle's lifetime.
pub trait IndexBuffer {
    /// Make this buffer the active index source.
    fn bind(&self);

    /// Release this buffer from the active slot.
    fn unbind(&self);

    /// Number of indices in the buffer.
    fn count(&self) -> u32;
}
