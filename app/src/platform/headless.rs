//! Headless window for tests, tools and display-less machines.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use kestrel_core::{Event, EventData};

use crate::window::{EventCallback, Window, WindowProps};

/// Handle for scripting events into a [`HeadlessWindow`].
///
/// Cheap to clone; all clones feed the same window. Injected events are
/// delivered to the window's callback on its next
/// [`on_update`](Window::on_update).
#[derive(Clone)]
pub struct EventInjector {
    queue: Rc<RefCell<VecDeque<Event>>>,
}

impl EventInjector {
    /// Queue an event for delivery on the next window update.
    pub fn push(&self, data: EventData) {
        self.queue.borrow_mut().push_back(Event::new(data));
    }
}

/// Window implementation with no OS resources.
///
/// Reports the size it was created with (updated by injected resize events)
/// and delivers only events queued through an [`EventInjector`]. Used by
/// integration tests and as the fallback when no display server is present.
pub struct HeadlessWindow {
    width: u32,
    height: u32,
    callback: Option<EventCallback>,
    queue: Rc<RefCell<VecDeque<Event>>>,
}

impl HeadlessWindow {
    /// Create a headless window with the given settings.
    pub fn new(props: &WindowProps) -> Self {
        log::debug!(
            "Created headless window '{}' ({}x{})",
            props.title,
            props.width,
            props.height
        );
        Self {
            width: props.width,
            height: props.height,
            callback: None,
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Get an injector handle for scripting events into this window.
    pub fn injector(&self) -> EventInjector {
        EventInjector {
            queue: self.queue.clone(),
        }
    }
}

impl Window for HeadlessWindow {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_event_callback(&mut self, callback: EventCallback) {
        self.callback = Some(callback);
    }

    fn on_update(&mut self) {
        // Pop one event at a time so a callback may inject follow-up events
        // mid-drain; those are delivered in the same update.
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else { break };

            if let EventData::WindowResize { width, height } = *event.data() {
                self.width = width;
                self.height = height;
            }

            if let Some(callback) = &mut self.callback {
                callback(event);
            }
        }
    }
}
