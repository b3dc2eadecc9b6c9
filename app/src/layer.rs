//! Layer trait and per-frame context.

use kestrel_core::Event;

use crate::input::InputState;

/// Per-frame data passed to [`Layer::on_update`].
///
/// A fresh context is built at the top of every frame and shared read-only
/// with each layer. It carries frame timing, the current window size and a
/// snapshot of input state.
pub struct FrameContext<'a> {
    /// Delta time since last frame in seconds.
    pub(crate) delta_time: f32,
    /// Time since application start in seconds.
    pub(crate) elapsed_time: f32,
    /// Current frame number.
    pub(crate) frame_number: u64,
    /// Current window width in pixels.
    pub(crate) width: u32,
    /// Current window height in pixels.
    pub(crate) height: u32,
    /// Input state as of the start of this frame.
    pub(crate) input: &'a InputState,
}

impl<'a> FrameContext<'a> {
    /// Get the delta time since last frame in seconds.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the elapsed time since application start in seconds.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Get the current frame number.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Get the current window width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the current window height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the window aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Get the input state snapshot for this frame.
    pub fn input(&self) -> &InputState {
        self.input
    }
}

/// Trait for a unit of application logic on the layer stack.
///
/// Implement this trait to add game logic, debug tooling or UI overlays to
/// an [`Application`](crate::Application).
///
/// # Lifecycle
///
/// 1. `on_attach` - Called once when the layer is pushed onto the stack
/// 2. `on_update` - Called every frame, bottom of the stack first
/// 3. `on_ui_render` - Called every frame inside the UI begin/end bracket
/// 4. `on_event` - Called for each window event, top of the stack first
/// 5. `on_detach` - Called when the layer leaves the stack
///
/// # Example
///
/// ```
/// use kestrel_app::{FrameContext, Layer};
/// use kestrel_core::{Event, EventDispatcher, EventType};
///
/// struct GameLayer {
///     paused: bool,
/// }
///
/// impl Layer for GameLayer {
///     fn name(&self) -> &str {
///         "game"
///     }
///
///     fn on_update(&mut self, ctx: &FrameContext) {
///         if !self.paused {
///             let _ = ctx.delta_time();
///         }
///     }
///
///     fn on_event(&mut self, event: &mut Event) {
///         let mut dispatcher = EventDispatcher::new(event);
///         dispatcher.dispatch(EventType::KeyPressed, |_| true);
///     }
/// }
/// ```
pub trait Layer {
    /// Debug name of the layer.
    ///
    /// Also used to address the layer in
    /// [`Application::pop_layer`](crate::Application::pop_layer).
    fn name(&self) -> &str;

    /// Called once when the layer is pushed onto the stack.
    ///
    /// Use this to create resources and register state.
    fn on_attach(&mut self) {}

    /// Called when the layer leaves the stack.
    ///
    /// Use this to release resources.
    fn on_detach(&mut self) {}

    /// Called every frame.
    ///
    /// Layers lower on the stack are updated before layers above them.
    fn on_update(&mut self, _ctx: &FrameContext) {}

    /// Called for each window event, top of the stack first.
    ///
    /// Mark the event handled via
    /// [`EventDispatcher`](kestrel_core::EventDispatcher) or
    /// [`Event::set_handled`](kestrel_core::Event::set_handled) to stop it
    /// from reaching layers below.
    fn on_event(&mut self, _event: &mut Event) {}

    /// Called every frame between the UI controller's begin and end calls.
    ///
    /// Use this to emit immediate-mode UI for the layer.
    fn on_ui_render(&mut self) {}
}
