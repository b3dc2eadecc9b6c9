//! Application runtime: window, layer stack and the frame loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use kestrel_core::{Event, EventDispatcher, EventType};
use kestrel_graphics::{BackendType, RenderBackend, create_backend};

use crate::input::InputState;
use crate::layer::{FrameContext, Layer};
use crate::platform::{WindowBackend, create_window};
use crate::stack::LayerStack;
use crate::ui::{DummyUiController, UiController};
use crate::window::{Window, WindowProps};

/// Set while an [`Application`] is alive. Guards the one-instance rule.
static APPLICATION_EXISTS: AtomicBool = AtomicBool::new(false);

/// Startup options for an [`Application`].
///
/// # Example
///
/// ```
/// use kestrel_app::ApplicationConfig;
/// use kestrel_graphics::BackendType;
///
/// let config = ApplicationConfig::new("sandbox")
///     .with_size(1600, 900)
///     .with_backend(BackendType::Dummy)
///     .with_max_frames(120);
/// ```
#[derive(Debug, Clone)]
pub struct ApplicationConfig {
    title: String,
    width: u32,
    height: u32,
    backend: BackendType,
    window_backend: WindowBackend,
    clear_color: [f32; 4],
    max_frames: Option<u64>,
}

impl ApplicationConfig {
    /// Create a configuration with the given window title and defaults for
    /// everything else.
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

    /// Select the render backend.
    pub fn with_backend(mut self, backend: BackendType) -> Self {
        self.backend = backend;
        self
    }

    /// Run without OS windowing; events come from an
    /// [`EventInjector`](crate::platform::EventInjector).
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.window_backend = if headless {
            WindowBackend::Headless
        } else {
            WindowBackend::Auto
        };
        self
    }

    /// Set the color the frame buffer is cleared to each frame.
    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    /// Stop after the given number of frames. Useful for automated runs.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            title: "Kestrel Application".to_string(),
            width: 1280,
            height: 720,
            backend: BackendType::default(),
            window_backend: WindowBackend::default(),
            clear_color: [0.1, 0.1, 0.1, 1.0],
            max_frames: None,
        }
    }
}

/// The engine runtime.
///
/// Owns the platform window, the render backend, a [`LayerStack`] and the
/// frame loop. Each frame clears the frame buffer, updates every layer from
/// the bottom of the stack up, runs the UI pass inside the controller's
/// begin/end bracket, then polls the window and routes the events it
/// produced. A WindowClose event stops the loop after the current iteration
/// completes.
///
/// Layer callbacks never receive access to the stack, so a layer cannot
/// mutate the stack being iterated; structural changes go through
/// [`push_layer`](Self::push_layer) and friends between frames.
///
/// Exactly one `Application` may be alive per process; constructing a second
/// one panics. The slot is released when the application is dropped.
///
/// # Example
///
/// ```no_run
/// use kestrel_app::{Application, ApplicationConfig};
///
/// let config = ApplicationConfig::new("demo").with_max_frames(600);
/// let mut app = Application::new(config);
/// app.run();
/// assert_eq!(app.frame_number(), 600);
/// ```
pub struct Application {
    window: Box<dyn Window>,
    backend: Arc<dyn RenderBackend>,
    ui: Box<dyn UiController>,
    layers: LayerStack,
    input: InputState,
    event_queue: Rc<RefCell<VecDeque<Event>>>,
    clear_color: [f32; 4],
    max_frames: Option<u64>,
    running: bool,
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl Application {
    /// Create an application, acquiring a window and render backend from the
    /// configuration.
    ///
    /// # Panics
    ///
    /// Panics if another `Application` is alive or the render backend cannot
    /// be created.
    pub fn new(config: ApplicationConfig) -> Self {
        let props = WindowProps::new(config.title.clone()).with_size(config.width, config.height);
        let window = create_window(&props, config.window_backend);
        Self::with_window(config, window)
    }

    /// Create an application around an existing window.
    ///
    /// The configuration's window settings are ignored; the render backend
    /// is still created from it. Used by tests and custom platform hosts.
    ///
    /// # Panics
    ///
    /// Panics if another `Application` is alive or the render backend cannot
    /// be created.
    pub fn with_window(config: ApplicationConfig, window: Box<dyn Window>) -> Self {
        let backend = create_backend(config.backend).expect("Failed to create render backend");
        Self::with_window_and_backend(config, window, backend)
    }

    /// Create an application around an existing window and backend.
    ///
    /// The full injection point: nothing is acquired from the platform.
    ///
    /// # Panics
    ///
    /// Panics if another `Application` is alive.
    pub fn with_window_and_backend(
        config: ApplicationConfig,
        mut window: Box<dyn Window>,
        backend: Arc<dyn RenderBackend>,
    ) -> Self {
        assert!(
            !APPLICATION_EXISTS.swap(true, Ordering::SeqCst),
            "only one Application may exist at a time"
        );

        let event_queue: Rc<RefCell<VecDeque<Event>>> = Rc::new(RefCell::new(VecDeque::new()));
        let sink = event_queue.clone();
        window.set_event_callback(Box::new(move |event| {
            sink.borrow_mut().push_back(event);
        }));

        log::info!(
            "Application '{}' created ({} backend, {}x{})",
            config.title,
            backend.name(),
            window.width(),
            window.height()
        );

        let now = Instant::now();
        Self {
            window,
            backend,
            ui: Box::new(DummyUiController::new()),
            layers: LayerStack::new(),
            input: InputState::default(),
            event_queue,
            clear_color: config.clear_color,
            max_frames: config.max_frames,
            running: true,
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    /// Push a layer onto the stack, below all overlays. Attaches it.
    pub fn push_layer(&mut self, layer: Box<dyn Layer>) {
        log::debug!("Pushing layer '{}'", layer.name());
        self.layers.push_layer(layer);
    }

    /// Push an overlay above everything on the stack. Attaches it.
    pub fn push_overlay(&mut self, overlay: Box<dyn Layer>) {
        log::debug!("Pushing overlay '{}'", overlay.name());
        self.layers.push_overlay(overlay);
    }

    /// Remove and return the first layer with the given name.
    ///
    /// The layer is not detached; ownership passes back to the caller.
    /// Returns `None` (and changes nothing) if no layer matches.
    pub fn pop_layer(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        self.layers.pop_layer(name)
    }

    /// Remove and return the first overlay with the given name.
    ///
    /// The overlay is not detached; ownership passes back to the caller.
    /// Returns `None` (and changes nothing) if no overlay matches.
    pub fn pop_overlay(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        self.layers.pop_overlay(name)
    }

    /// Replace the UI controller whose begin/end bracket wraps the UI pass.
    pub fn set_ui_controller(&mut self, ui: Box<dyn UiController>) {
        self.ui = ui;
    }

    /// Get the render backend handle for creating buffers and shaders.
    pub fn backend(&self) -> &Arc<dyn RenderBackend> {
        &self.backend
    }

    /// Get the window.
    pub fn window(&self) -> &dyn Window {
        self.window.as_ref()
    }

    /// Get the current input state snapshot.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Check whether the frame loop will keep running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of completed frames.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Request shutdown. The loop exits after the current frame completes.
    pub fn close(&mut self) {
        log::info!("Application close requested");
        self.running = false;
    }

    /// Run the frame loop until a WindowClose event is handled or the frame
    /// limit is reached.
    pub fn run(&mut self) {
        log::info!("Application starting");
        self.start_time = Instant::now();
        self.last_frame_time = self.start_time;

        while self.running {
            self.run_frame();
        }

        log::info!("Application stopped after {} frames", self.frame_number);
    }

    /// Execute exactly one frame.
    ///
    /// Exposed for hosts that drive the loop themselves (editors, tests).
    pub fn run_frame(&mut self) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        let elapsed_time = now.duration_since(self.start_time).as_secs_f32();

        self.backend.clear(self.clear_color);

        let ctx = FrameContext {
            delta_time,
            elapsed_time,
            frame_number: self.frame_number,
            width: self.window.width(),
            height: self.window.height(),
            input: &self.input,
        };
        for layer in self.layers.iter_mut() {
            layer.on_update(&ctx);
        }

        self.ui.begin_frame();
        for layer in self.layers.iter_mut() {
            layer.on_ui_render();
        }
        self.ui.end_frame();

        self.input.clear_deltas();
        self.window.on_update();
        self.process_events();

        self.frame_number += 1;
        if let Some(max_frames) = self.max_frames
            && self.frame_number >= max_frames
        {
            log::info!("Reached max frames limit ({}), exiting", max_frames);
            self.running = false;
        }
    }

    /// Drain the event queue the window filled during its update.
    fn process_events(&mut self) {
        loop {
            let next = self.event_queue.borrow_mut().pop_front();
            let Some(mut event) = next else { break };
            self.route_event(&mut event);
        }
    }

    /// Route one event: WindowClose has fixed priority, then the stack is
    /// offered the event top-down until someone handles it.
    fn route_event(&mut self, event: &mut Event) {
        log::trace!("Routing event: {}", event);

        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch(EventType::WindowClose, |_| {
            log::info!("Window close event, stopping");
            self.running = false;
            true
        });

        if !event.handled() {
            for layer in self.layers.iter_mut().rev() {
                layer.on_event(event);
                if event.handled() {
                    break;
                }
            }
        }

        // State tracking sees every event. A layer consuming a key press
        // does not make the key physically unpressed.
        self.input.apply(event);
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        self.layers.clear();
        APPLICATION_EXISTS.store(false, Ordering::SeqCst);
        log::debug!("Application destroyed");
    }
}
