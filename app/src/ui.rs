//! UI controller bracket around the layer UI pass.

/// Frame bracket for an immediate-mode UI pass.
///
/// The application calls [`begin_frame`](Self::begin_frame), then every
/// layer's `on_ui_render` in update order, then [`end_frame`](Self::end_frame).
/// Real UI integrations (an immediate-mode toolkit binding) implement this
/// trait; the default [`DummyUiController`] keeps the bracket shape without
/// drawing anything.
pub trait UiController {
    /// Start a UI frame. Called once per application frame, before any
    /// layer's `on_ui_render`.
    fn begin_frame(&mut self);

    /// Finish the UI frame and submit its output. Called after the last
    /// layer's `on_ui_render`.
    fn end_frame(&mut self);
}

/// UI controller that does nothing.
///
/// Used when no UI integration is configured, so layers can rely on the
/// begin/end bracket being present in every build.
#[derive(Debug, Default)]
pub struct DummyUiController;

impl DummyUiController {
    /// Create a new no-op UI controller.
    pub fn new() -> Self {
        Self
    }
}

impl UiController for DummyUiController {
    fn begin_frame(&mut self) {
        log::trace!("DummyUiController: begin frame");
    }

    fn end_frame(&mut self) {
        log::trace!("DummyUiController: end frame");
    }
}
