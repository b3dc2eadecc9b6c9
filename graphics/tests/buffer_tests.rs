//! Buffer and backend integration tests.
//!
//! These exercise the public API end to end: the shader data type tables,
//! layout construction, resource creation through the backend factory, and
//! the dummy backend's recording of what a frame submitted.

use std::sync::Arc;

use rstest::rstest;

use kestrel_graphics::{
    create_backend, BackendType, BufferElement, BufferLayout, DummyBackend, GraphicsError,
    RecordedOp, RenderBackend, ShaderDataType, ShaderDescriptor,
};

// ============================================================================
// Type tables
// ============================================================================

#[rstest]
#[case::bool(ShaderDataType::Bool, 1, 1)]
#[case::float(ShaderDataType::Float, 4, 1)]
#[case::float2(ShaderDataType::Float2, 8, 2)]
#[case::float3(ShaderDataType::Float3, 12, 3)]
#[case::float4(ShaderDataType::Float4, 16, 4)]
#[case::int(ShaderDataType::Int, 4, 1)]
#[case::int2(ShaderDataType::Int2, 8, 2)]
#[case::int3(ShaderDataType::Int3, 12, 3)]
#[case::int4(ShaderDataType::Int4, 16, 4)]
#[case::mat3(ShaderDataType::Mat3, 36, 9)]
#[case::mat4(ShaderDataType::Mat4, 64, 16)]
fn test_shader_data_type_table(
    #[case] data_type: ShaderDataType,
    #[case] size: u32,
    #[case] components: u32,
) {
    assert_eq!(data_type.size(), size);
    assert_eq!(data_type.component_count(), components);
}

// ============================================================================
// Resource creation through the backend
// ============================================================================

/// A triangle's worth of position+color vertices, laid out and bound the way
/// a host application would before its first draw.
#[test]
fn test_triangle_resources_through_backend() {
    // Logging for test output; trace level shows the dummy backend calls.
    let _ = env_logger::builder().is_test(true).try_init();

    let backend = create_backend(BackendType::Auto).unwrap();

    #[rustfmt::skip]
    let vertices: [f32; 21] = [
        -0.5, -0.5, 0.0,    1.0, 0.0, 0.0, 1.0,
         0.5, -0.5, 0.0,    0.0, 1.0, 0.0, 1.0,
         0.0,  0.5, 0.0,    0.0, 0.0, 1.0, 1.0,
    ];

    let mut vertex_buffer = backend.create_vertex_buffer(&vertices).unwrap();
    vertex_buffer.set_layout(BufferLayout::new(vec![
        BufferElement::new(ShaderDataType::Float3, "a_position"),
        BufferElement::new(ShaderDataType::Float4, "a_color"),
    ]));

    // Three records of stride bytes each account for the whole upload.
    assert_eq!(
        vertex_buffer.layout().stride() as usize * 3,
        std::mem::size_of_val(&vertices)
    );

    let index_buffer = backend.create_index_buffer(&[0, 1, 2]).unwrap();
    assert_eq!(index_buffer.count(), 3);

    vertex_buffer.bind();
    index_buffer.bind();
    backend.clear([0.1, 0.1, 0.1, 1.0]);
    backend.draw_indexed(index_buffer.count());
}

#[test]
fn test_empty_vertex_data_is_an_error() {
    let backend = create_backend(BackendType::Dummy).unwrap();
    match backend.create_vertex_buffer(&[]) {
        Err(GraphicsError::InvalidParameter(msg)) => assert!(msg.contains("empty")),
        Err(other) => panic!("expected InvalidParameter, got {other:?}"),
        Ok(_) => panic!("expected InvalidParameter, got a buffer"),
    }
}

// ============================================================================
// Recording
// ============================================================================

#[test]
fn test_frame_operations_are_recorded_in_order() {
    let dummy = Arc::new(DummyBackend::new());
    let backend: Arc<dyn RenderBackend> = dummy.clone();

    let shader = backend
        .create_shader(&ShaderDescriptor::new(
            "flat_color",
            "void main() {}",
            "void main() {}",
        ))
        .unwrap();
    shader.bind();
    backend.clear([0.0, 0.0, 0.0, 1.0]);
    backend.draw_indexed(3);

    assert_eq!(
        dummy.recorded_ops(),
        vec![
            RecordedOp::CreateShader {
                name: "flat_color".to_string()
            },
            RecordedOp::Clear {
                color: [0.0, 0.0, 0.0, 1.0]
            },
            RecordedOp::DrawIndexed { index_count: 3 },
        ]
    );
}
