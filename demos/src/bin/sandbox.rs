//! # Sandbox
//!
//! Minimal playground for the Kestrel runtime: a gameplay layer that owns a
//! colored triangle and moves it with WASD, plus a stats overlay that
//! reports frame timing and swallows mouse presses before they reach the
//! gameplay layer.
//!
//! ```bash
//! # Run windowed
//! cargo run --bin sandbox
//!
//! # Smoke-test without a display or GPU
//! cargo run --bin sandbox -- --headless --backend dummy --max-frames 60
//! ```

use std::sync::Arc;

use clap::Parser;

use kestrel_app::{Application, ApplicationConfig, FrameContext, Layer};
use kestrel_core::{Event, EventDispatcher, EventType, KeyCode};
use kestrel_graphics::{
    BackendType, BufferElement, BufferLayout, IndexBuffer, RenderBackend, Shader,
    ShaderDataType, ShaderDescriptor, VertexBuffer,
};

const TRIANGLE_SHADER_VERT: &str = r#"
#version 330 core
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec4 a_color;

uniform vec2 u_offset;

out vec4 v_color;

void main() {
    v_color = a_color;
    gl_Position = vec4(a_position.xy + u_offset, a_position.z, 1.0);
}
"#;

const TRIANGLE_SHADER_FRAG: &str = r#"
#version 330 core
in vec4 v_color;
out vec4 o_color;

void main() {
    o_color = v_color;
}
"#;

/// Render backend selection for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum CliBackend {
    /// Automatically select the best available backend.
    #[default]
    Auto,
    /// Recording no-op backend for running without a GPU.
    Dummy,
}

impl From<CliBackend> for BackendType {
    fn from(cli: CliBackend) -> Self {
        match cli {
            CliBackend::Auto => BackendType::Auto,
            CliBackend::Dummy => BackendType::Dummy,
        }
    }
}

/// Kestrel Engine sandbox.
#[derive(Parser, Debug)]
#[command(name = "sandbox", about = "Kestrel Engine sandbox", version)]
struct SandboxArgs {
    /// Render backend to use.
    #[arg(long, default_value = "auto", value_enum)]
    backend: CliBackend,

    /// Run without a native window (for CI and automated smoke tests).
    #[arg(long)]
    headless: bool,

    /// Initial window width in pixels.
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value = "720")]
    height: u32,

    /// Exit after rendering N frames (useful for testing).
    #[arg(long)]
    max_frames: Option<u64>,
}

/// Gameplay layer: a triangle steered with WASD.
struct TriangleLayer {
    backend: Arc<dyn RenderBackend>,
    vertex_buffer: Option<Box<dyn VertexBuffer>>,
    index_buffer: Option<Box<dyn IndexBuffer>>,
    shader: Option<Box<dyn Shader>>,
    offset: (f32, f32),
    speed: f32,
}

impl TriangleLayer {
    fn new(backend: Arc<dyn RenderBackend>) -> Self {
        Self {
            backend,
            vertex_buffer: None,
            index_buffer: None,
            shader: None,
            offset: (0.0, 0.0),
            speed: 0.8,
        }
    }
}

impl Layer for TriangleLayer {
    fn name(&self) -> &str {
        "triangle"
    }

    fn on_attach(&mut self) {
        #[rustfmt::skip]
        let vertices: [f32; 21] = [
            // position          // color
            -0.5, -0.5, 0.0,     0.9, 0.2, 0.3, 1.0,
             0.5, -0.5, 0.0,     0.2, 0.9, 0.3, 1.0,
             0.0,  0.5, 0.0,     0.2, 0.3, 0.9, 1.0,
        ];

        let mut vertex_buffer = self
            .backend
            .create_vertex_buffer(&vertices)
            .expect("Failed to create vertex buffer");
        vertex_buffer.set_layout(BufferLayout::new(vec![
            BufferElement::new(ShaderDataType::Float3, "a_position"),
            BufferElement::new(ShaderDataType::Float4, "a_color"),
        ]));

        let index_buffer = self
            .backend
            .create_index_buffer(&[0, 1, 2])
            .expect("Failed to create index buffer");

        let shader = self
            .backend
            .create_shader(&ShaderDescriptor::new(
                "triangle",
                TRIANGLE_SHADER_VERT,
                TRIANGLE_SHADER_FRAG,
            ))
            .expect("Failed to create shader");

        self.vertex_buffer = Some(vertex_buffer);
        self.index_buffer = Some(index_buffer);
        self.shader = Some(shader);
        log::info!("Triangle resources created");
    }

    fn on_update(&mut self, ctx: &FrameContext) {
        let step = self.speed * ctx.delta_time();
        let input = ctx.input();
        if input.is_key_pressed(KeyCode::W) {
            self.offset.1 += step;
        }
        if input.is_key_pressed(KeyCode::S) {
            self.offset.1 -= step;
        }
        if input.is_key_pressed(KeyCode::A) {
            self.offset.0 -= step;
        }
        if input.is_key_pressed(KeyCode::D) {
            self.offset.0 += step;
        }

        if let (Some(shader), Some(vertex_buffer), Some(index_buffer)) =
            (&self.shader, &self.vertex_buffer, &self.index_buffer)
        {
            shader.bind();
            vertex_buffer.bind();
            index_buffer.bind();
            self.backend.draw_indexed(index_buffer.count());
        }
    }

    fn on_event(&mut self, event: &mut Event) {
        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch(EventType::KeyPressed, |data| {
            log::debug!("Triangle layer saw {}", data);
            false
        });
    }
}

/// Overlay that reports frame stats and consumes mouse presses.
struct StatsOverlay {
    frames: u64,
    accumulated: f32,
}

impl StatsOverlay {
    fn new() -> Self {
        Self {
            frames: 0,
            accumulated: 0.0,
        }
    }
}

impl Layer for StatsOverlay {
    fn name(&self) -> &str {
        "stats"
    }

    fn on_update(&mut self, ctx: &FrameContext) {
        self.frames += 1;
        self.accumulated += ctx.delta_time();
        if self.accumulated >= 1.0 {
            log::info!(
                "{} frames in {:.2}s ({:.0} fps), window {}x{}",
                self.frames,
                self.accumulated,
                self.frames as f32 / self.accumulated,
                ctx.width(),
                ctx.height()
            );
            self.frames = 0;
            self.accumulated = 0.0;
        }
    }

    fn on_event(&mut self, event: &mut Event) {
        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch(EventType::MouseButtonPressed, |data| {
            log::info!("Stats overlay captured {}", data);
            true
        });
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    kestrel_core::init();
    kestrel_graphics::init();
    kestrel_app::init();

    let args = SandboxArgs::parse();

    let mut config = ApplicationConfig::new("Kestrel Sandbox")
        .with_size(args.width, args.height)
        .with_backend(args.backend.into())
        .with_headless(args.headless)
        .with_clear_color([0.08, 0.08, 0.1, 1.0]);
    if let Some(max_frames) = args.max_frames {
        config = config.with_max_frames(max_frames);
    }

    let mut app = Application::new(config);
    let backend = app.backend().clone();
    app.push_layer(Box::new(TriangleLayer::new(backend)));
    app.push_overlay(Box::new(StatsOverlay::new()));
    app.run();
}
