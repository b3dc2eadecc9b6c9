//! Platform window abstraction.

use kestrel_core::Event;

/// Callback a window invokes for every event it translates.
///
/// Registered via [`Window::set_event_callback`]; the window calls it once
/// per event during [`Window::on_update`].
pub type EventCallback = Box<dyn FnMut(Event)>;

/// Settings used when creating a window.
#[derive(Debug, Clone)]
pub struct WindowProps {
    /// Window title.
    pub title: String,
    /// Initial width in pixels.
    pub width: u32,
    /// Initial height in pixels.
    pub height: u32,
}

impl WindowProps {
    /// Create window settings with the default size.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the initial window size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for WindowProps {
    fn default() -> Self {
        Self {
            title: "Kestrel Engine".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// A platform window that produces events and presents frames.
///
/// Implementations translate native window events into core [`Event`]s and
/// hand them to the registered callback from [`on_update`](Self::on_update).
/// The application polls the window exactly once per frame.
pub trait Window {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Register the callback that receives translated events.
    ///
    /// Replaces any previously registered callback.
    fn set_event_callback(&mut self, callback: EventCallback);

    /// Poll the platform for pending events and present the frame.
    ///
    /// Invokes the registered callback once per translated event, in the
    /// order the platform reported them.
    fn on_update(&mut self);
}
