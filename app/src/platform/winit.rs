//! Native window driven by winit.

use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::error::EventLoopError;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

use kestrel_core::EventData;

use crate::input::{map_winit_key, map_winit_mouse_button};
use crate::window::{EventCallback, Window, WindowProps};

/// Native OS window.
///
/// Owns the winit event loop and pumps it once per
/// [`on_update`](Window::on_update) call, translating winit window events
/// into core events for the registered callback. The OS window itself is
/// created lazily on the first pump, when winit resumes the application.
pub struct WinitWindow {
    event_loop: EventLoop<()>,
    state: PumpState,
}

impl WinitWindow {
    /// Create the event loop for a native window.
    ///
    /// Fails when the platform has no display connection; callers fall back
    /// to a headless window in that case.
    pub fn new(props: &WindowProps) -> Result<Self, EventLoopError> {
        let event_loop = EventLoop::new()?;
        Ok(Self {
            event_loop,
            state: PumpState {
                title: props.title.clone(),
                width: props.width,
                height: props.height,
                window: None,
                callback: None,
            },
        })
    }
}

impl Window for WinitWindow {
    fn width(&self) -> u32 {
        self.state.width
    }

    fn height(&self) -> u32 {
        self.state.height
    }

    fn set_event_callback(&mut self, callback: EventCallback) {
        self.state.callback = Some(callback);
    }

    fn on_update(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);
        if let PumpStatus::Exit(code) = status {
            log::debug!("Event loop exited with code {}", code);
        }
    }
}

/// Winit-side state: the OS window plus the event translation sink.
struct PumpState {
    title: String,
    width: u32,
    height: u32,
    window: Option<winit::window::Window>,
    callback: Option<EventCallback>,
}

impl PumpState {
    fn emit(&mut self, data: EventData) {
        if let Some(callback) = &mut self.callback {
            callback(kestrel_core::Event::new(data));
        }
    }
}

impl ApplicationHandler for PumpState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = winit::window::Window::default_attributes()
                .with_title(self.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height));

            match event_loop.create_window(attributes) {
                Ok(window) => {
                    log::info!("Window created: '{}' {}x{}", self.title, self.width, self.height);
                    self.window = Some(window);
                }
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    // Without a window the application cannot continue; ask
                    // it to shut down through the normal close path.
                    self.emit(EventData::WindowClose);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.emit(EventData::WindowClose);
            }

            WindowEvent::Resized(size) => {
                self.width = size.width;
                self.height = size.height;
                self.emit(EventData::WindowResize {
                    width: size.width,
                    height: size.height,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key
                    && let Some(key) = map_winit_key(code)
                {
                    match event.state {
                        ElementState::Pressed => self.emit(EventData::KeyPressed {
                            key,
                            repeat: event.repeat,
                        }),
                        ElementState::Released => self.emit(EventData::KeyReleased { key }),
                    }
                }

                if event.state == ElementState::Pressed
                    && let Some(text) = &event.text
                {
                    for character in text.chars() {
                        self.emit(EventData::KeyTyped { character });
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.emit(EventData::MouseMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_winit_mouse_button(button);
                match state {
                    ElementState::Pressed => self.emit(EventData::MouseButtonPressed { button }),
                    ElementState::Released => self.emit(EventData::MouseButtonReleased { button }),
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (x_offset, y_offset) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x, y),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };
                self.emit(EventData::MouseScrolled { x_offset, y_offset });
            }

            _ => {}
        }
    }
}
