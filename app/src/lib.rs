//! # Kestrel App
//!
//! Application framework for creating windowed applications with Kestrel graphics.
//!
//! This crate provides the [`Application`] runtime that owns the platform
//! window, drives the frame loop, and routes window events through an ordered
//! stack of [`Layer`]s. Games and tools are written as layers pushed onto the
//! application; the runtime calls them every frame and offers them every event.
//!
//! ## Overview
//!
//! - [`Application`] - Runtime that owns the window, layer stack and frame loop
//! - [`ApplicationConfig`] - Startup options (title, size, backend, headless)
//! - [`Layer`] / [`LayerStack`] - Units of game logic with ordered update/event hooks
//! - [`FrameContext`] - Per-frame timing, window size and input snapshot
//! - [`Window`] / [`WindowProps`] - Platform window abstraction and its settings
//! - [`UiController`] - Frame bracket for an immediate-mode UI pass
//!
//! ## Example
//!
//! ```
//! use kestrel_app::{Application, ApplicationConfig, FrameContext, Layer};
//!
//! struct GameLayer;
//!
//! impl Layer for GameLayer {
//!     fn name(&self) -> &str {
//!         "game"
//!     }
//!
//!     fn on_update(&mut self, ctx: &FrameContext) {
//!         let _ = ctx.delta_time();
//!     }
//! }
//!
//! let config = ApplicationConfig::new("demo").with_headless(true).with_max_frames(2);
//! let mut app = Application::new(config);
//! app.push_layer(Box::new(GameLayer));
//! app.run();
//! ```

mod application;
mod input;
mod layer;
mod stack;
mod ui;
mod window;

pub mod platform;

pub use application::{Application, ApplicationConfig};
pub use input::InputState;
pub use layer::{FrameContext, Layer};
pub use stack::LayerStack;
pub use ui::{DummyUiController, UiController};
pub use window::{EventCallback, Window, WindowProps};

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
///
/// This should be called before using any app functionality.
pub fn init() {
    log::info!("Kestrel App v{} initialized", VERSION);
}
