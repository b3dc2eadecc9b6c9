//! Platform window implementations.
//!
//! Provides the concrete [`Window`](crate::Window) implementations and a
//! factory for picking between them:
//!
//! - [`WinitWindow`] - Native OS window driven by winit
//! - [`HeadlessWindow`] - No OS resources; events come from an [`EventInjector`]

pub mod headless;
pub mod winit;

pub use headless::{EventInjector, HeadlessWindow};
pub use self::winit::WinitWindow;

use crate::window::{Window, WindowProps};

/// Window implementation selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowBackend {
    /// Prefer a native window, fall back to headless when no display is
    /// available.
    #[default]
    Auto,
    /// Never touch OS windowing; events are script-injected.
    Headless,
}

/// Create a window of the given kind.
///
/// With [`WindowBackend::Auto`], a native window is attempted first; if the
/// platform refuses (no display server, CI machine), a headless window is
/// created instead so the application can still run.
pub fn create_window(props: &WindowProps, backend: WindowBackend) -> Box<dyn Window> {
    match backend {
        WindowBackend::Headless => {
            log::info!("Using headless window");
            Box::new(HeadlessWindow::new(props))
        }
        WindowBackend::Auto => match WinitWindow::new(props) {
            Ok(window) => Box::new(window),
            Err(e) => {
                log::warn!("No display available ({}), using headless window", e);
                Box::new(HeadlessWindow::new(props))
            }
        },
    }
}
