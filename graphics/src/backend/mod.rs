//! Render backend abstraction layer.
//!
//! This module provides a trait-based abstraction over concrete graphics
//! APIs. The application runtime and host layers talk to a
//! [`RenderBackend`]; which API actually services the calls is decided once,
//! at configuration time, through [`create_backend`].
//!
//! # Available Backends
//!
//! - [`DummyBackend`] - Records operations instead of touching a GPU; used
//!   for tests, CI, and headless runs
//!
//! Real GPU backends (OpenGL, Vulkan, ...) live in their own crates and
//! implement [`RenderBackend`] against the buffer and shader contracts
//! defined here.

pub mod dummy;

use std::sync::Arc;

use crate::buffer::{IndexBuffer, VertexBuffer};
use crate::error::GraphicsError;
use crate::shader::{Shader, ShaderDescriptor};

pub use dummy::{DummyBackend, RecordedOp};

/// Which backend [`create_backend`] should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendType {
    /// Pick the best backend available in this build.
    #[default]
    Auto,
    /// The recording no-op backend.
    Dummy,
}

/// Contract a concrete render backend implements.
///
/// Resource creation is fallible and reported through [`GraphicsError`];
/// state-setting calls (`clear`, `draw_indexed`) are fire-and-forget, any
/// device loss surfaces on the next resource operation.
pub trait RenderBackend: Send + Sync + 'static {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Create a vertex buffer from raw vertex floats.
    ///
    /// The byte size of the allocation is `vertices.len() * 4`. The returned
    /// handle starts with an empty layout.
    fn create_vertex_buffer(&self, vertices: &[f32])
        -> Result<Box<dyn VertexBuffer>, GraphicsError>;

    /// Create an index buffer. Its count is fixed to `indices.len()`.
    fn create_index_buffer(&self, indices: &[u32]) -> Result<Box<dyn IndexBuffer>, GraphicsError>;

    /// Compile a shader program from a vertex/fragment source pair.
    fn create_shader(&self, descriptor: &ShaderDescriptor)
        -> Result<Box<dyn Shader>, GraphicsError>;

    /// Clear the frame buffer to an RGBA color.
    fn clear(&self, color: [f32; 4]);

    /// Draw `index_count` indices from the currently bound buffers.
    fn draw_indexed(&self, index_count: u32);
}

/// Selects and creates the appropriate backend.
///
/// In this workspace every selection resolves to the dummy backend; GPU
/// backends register through their own crates and construct their types
/// directly.
pub fn create_backend(backend_type: BackendType) -> Result<Arc<dyn RenderBackend>, GraphicsError> {
    match backend_type {
        BackendType::Dummy => log::info!("Using dummy backend"),
        BackendType::Auto => log::info!("No GPU backend in this build, using dummy backend"),
    }
    Ok(Arc::new(DummyBackend::new()))
}
