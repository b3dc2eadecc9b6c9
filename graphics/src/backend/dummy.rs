//! Dummy render backend for testing and headless runs.
//!
//! This backend doesn't perform actual GPU operations but provides a valid
//! implementation of the resource and draw contracts without requiring GPU
//! hardware. Every call is recorded in submission order, so tests can
//! assert exactly what a frame asked the backend to do.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::buffer::{BufferLayout, IndexBuffer, VertexBuffer};
use crate::error::GraphicsError;
use crate::shader::{Shader, ShaderDescriptor};

use super::RenderBackend;

/// One recorded backend operation, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    CreateVertexBuffer { bytes: usize },
    CreateIndexBuffer { count: u32 },
    CreateShader { name: String },
    Clear { color: [f32; 4] },
    DrawIndexed { index_count: u32 },
}

/// Render backend that records operations instead of executing them.
#[derive(Debug, Default)]
pub struct DummyBackend {
    ops: Arc<Mutex<Vec<RecordedOp>>>,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the operations recorded so far, in submission order.
    pub fn recorded_ops(&self) -> Vec<RecordedOp> {
        self.ops.lock().clone()
    }

    /// Forget all recorded operations.
    pub fn clear_recording(&self) {
        self.ops.lock().clear();
    }

    fn record(&self, op: RecordedOp) {
        self.ops.lock().push(op);
    }
}

impl RenderBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn create_vertex_buffer(
        &self,
        vertices: &[f32],
    ) -> Result<Box<dyn VertexBuffer>, GraphicsError> {
        if vertices.is_empty() {
            return Err(GraphicsError::InvalidParameter(
                "vertex data is empty".to_string(),
            ));
        }
        let bytes = std::mem::size_of_val(vertices);
        log::trace!("DummyBackend: creating vertex buffer ({bytes} bytes)");
        self.record(RecordedOp::CreateVertexBuffer { bytes });
        Ok(Box::new(DummyVertexBuffer {
            vertices: vertices.to_vec(),
            layout: BufferLayout::default(),
            bound: AtomicBool::new(false),
        }))
    }

    fn create_index_buffer(&self, indices: &[u32]) -> Result<Box<dyn IndexBuffer>, GraphicsError> {
        if indices.is_empty() {
            return Err(GraphicsError::InvalidParameter(
                "index data is empty".to_string(),
            ));
        }
        let count = indices.len() as u32;
        log::trace!("DummyBackend: creating index buffer ({count} indices)");
        self.record(RecordedOp::CreateIndexBuffer { count });
        Ok(Box::new(DummyIndexBuffer {
            indices: indices.to_vec(),
            bound: AtomicBool::new(false),
        }))
    }

    fn create_shader(
        &self,
        descriptor: &ShaderDescriptor,
    ) -> Result<Box<dyn Shader>, GraphicsError> {
        if descriptor.vertex_source.is_empty() || descriptor.fragment_source.is_empty() {
            return Err(GraphicsError::ResourceCreationFailed(format!(
                "shader '{}' is missing a stage source",
                descriptor.name
            )));
        }
        log::trace!("DummyBackend: creating shader '{}'", descriptor.name);
        self.record(RecordedOp::CreateShader {
            name: descriptor.name.clone(),
        });
        Ok(Box::new(DummyShader {
            bound: AtomicBool::new(false),
        }))
    }

    fn clear(&self, color: [f32; 4]) {
        log::trace!("DummyBackend: clear {color:?}");
        self.record(RecordedOp::Clear { color });
    }

    fn draw_indexed(&self, index_count: u32) {
        log::trace!("DummyBackend: draw {index_count} indices");
        self.record(RecordedOp::DrawIndexed { index_count });
    }
}

/// Vertex buffer handle produced by [`DummyBackend`].
#[derive(Debug)]
pub struct DummyVertexBuffer {
    vertices: Vec<f32>,
    layout: BufferLayout,
    bound: AtomicBool,
}

impl DummyVertexBuffer {
    /// The vertex floats this buffer was created from.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Byte view of the contents, as a GPU upload would see them.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Whether the buffer is currently bound.
    pub fn is_bound(&self) -> bool {
        self.bound.load(Ordering::Relaxed)
    }
}

impl VertexBuffer for DummyVertexBuffer {
    fn bind(&self) {
        log::trace!("DummyBackend: bind vertex buffer");
        self.bound.store(true, Ordering::Relaxed);
    }

    fn unbind(&self) {
        log::trace!("DummyBackend: unbind vertex buffer");
        self.bound.store(false, Ordering::Relaxed);
    }

    fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    fn set_layout(&mut self, layout: BufferLayout) {
        self.layout = layout;
    }
}

/// Index buffer handle produced by [`DummyBackend`].
#[derive(Debug)]
pub struct DummyIndexBuffer {
    indices: Vec<u32>,
    bound: AtomicBool,
}

impl DummyIndexBuffer {
    /// The indices this buffer was created from.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Whether the buffer is currently bound.
    pub fn is_bound(&self) -> bool {
        self.bound.load(Ordering::Relaxed)
    }
}

impl IndexBuffer for DummyIndexBuffer {
    fn bind(&self) {
        log::trace!("DummyBackend: bind index buffer");
        self.bound.store(true, Ordering::Relaxed);
    }

    fn unbind(&self) {
        log::trace!("DummyBackend: unbind index buffer");
        self.bound.store(false, Ordering::Relaxed);
    }

    fn count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Shader handle produced by [`DummyBackend`].
#[derive(Debug)]
pub struct DummyShader {
    bound: AtomicBool,
}

impl Shader for DummyShader {
    fn bind(&self) {
        self.bound.store(true, Ordering::Relaxed);
    }

    fn unbind(&self) {
        self.bound.store(false, Ordering::Relaxed);
    }
}

static_assertions::assert_impl_all!(DummyBackend: Send, Sync);
static_assertions::assert_impl_all!(DummyVertexBuffer: Send, Sync);
static_assertions::assert_impl_all!(DummyIndexBuffer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{BufferElement, ShaderDataType};

    #[test]
    fn test_vertex_buffer_creation_records_byte_size() {
        let backend = DummyBackend::new();
        let buffer = backend.create_vertex_buffer(&[0.0, 1.0, 2.0]).unwrap();

        assert!(buffer.layout().is_empty());
        assert_eq!(
            backend.recorded_ops(),
            vec![RecordedOp::CreateVertexBuffer { bytes: 12 }]
        );
    }

    #[test]
    fn test_empty_vertex_data_is_rejected() {
        let backend = DummyBackend::new();
        let result = backend.create_vertex_buffer(&[]);
        assert!(matches!(result, Err(GraphicsError::InvalidParameter(_))));
        assert!(backend.recorded_ops().is_empty());
    }

    #[test]
    fn test_index_buffer_count_is_fixed() {
        let backend = DummyBackend::new();
        let buffer = backend.create_index_buffer(&[0, 1, 2, 2, 3, 0]).unwrap();
        assert_eq!(buffer.count(), 6);
    }

    #[test]
    fn test_vertex_buffer_layout_swap() {
        let backend = DummyBackend::new();
        let mut buffer = backend.create_vertex_buffer(&[0.0; 7]).unwrap();

        buffer.set_layout(BufferLayout::new(vec![
            BufferElement::new(ShaderDataType::Float3, "a_position"),
            BufferElement::new(ShaderDataType::Float4, "a_color"),
        ]));

        assert_eq!(buffer.layout().stride(), 28);
        assert_eq!(buffer.layout().len(), 2);
    }

    #[test]
    fn test_bind_state_tracking() {
        let buffer = DummyVertexBuffer {
            vertices: vec![1.0],
            layout: BufferLayout::default(),
            bound: AtomicBool::new(false),
        };
        assert!(!buffer.is_bound());
        buffer.bind();
        assert!(buffer.is_bound());
        buffer.unbind();
        assert!(!buffer.is_bound());
    }

    #[test]
    fn test_frame_operations_record_in_submission_order() {
        let backend = DummyBackend::new();
        backend.clear([0.1, 0.1, 0.1, 1.0]);
        backend.draw_indexed(3);
        backend.clear([0.0, 0.0, 0.0, 1.0]);

        assert_eq!(
            backend.recorded_ops(),
            vec![
                RecordedOp::Clear {
                    color: [0.1, 0.1, 0.1, 1.0]
                },
                RecordedOp::DrawIndexed { index_count: 3 },
                RecordedOp::Clear {
                    color: [0.0, 0.0, 0.0, 1.0]
                },
            ]
        );

        backend.clear_recording();
        assert!(backend.recorded_ops().is_empty());
    }

    #[test]
    fn test_shader_requires_both_stages() {
        let backend = DummyBackend::new();
        let descriptor = ShaderDescriptor::new("broken", "void main() {}", "");
        assert!(backend.create_shader(&descriptor).is_err());
    }

    #[test]
    fn test_vertex_bytes_view() {
        let buffer = DummyVertexBuffer {
            vertices: vec![1.0, 2.0],
            layout: BufferLayout::default(),
            bound: AtomicBool::new(false),
        };
        assert_eq!(buffer.bytes().len(), 8);
        assert_eq!(buffer.vertices(), &[1.0, 2.0]);
    }
}
