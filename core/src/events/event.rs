//! Core event types.

use std::fmt;

use bitflags::bitflags;

use crate::input::{KeyCode, MouseButton};

bitflags! {
    /// Coarse classification flags for events.
    ///
    /// A kind may belong to several categories at once; mouse movement is
    /// both `MOUSE` and `INPUT`, for example. Use [`Event::is_in_category`]
    /// to filter without matching on the concrete kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventCategory: u32 {
        const APPLICATION  = 1 << 0;
        const INPUT        = 1 << 1;
        const KEYBOARD     = 1 << 2;
        const MOUSE        = 1 << 3;
        const MOUSE_BUTTON = 1 << 4;
    }
}

/// Unique tag for each event kind.
///
/// [`EventDispatcher`](super::EventDispatcher) compares these tags for
/// exact-match dispatch instead of downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    WindowClose,
    WindowResize,
    AppTick,
    AppUpdate,
    AppRender,
    KeyPressed,
    KeyReleased,
    KeyTyped,
    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
    MouseScrolled,
}

impl EventType {
    /// Category bitmask for this kind.
    pub fn category(self) -> EventCategory {
        match self {
            Self::WindowClose
            | Self::WindowResize
            | Self::AppTick
            | Self::AppUpdate
            | Self::AppRender => EventCategory::APPLICATION,
            Self::KeyPressed | Self::KeyReleased | Self::KeyTyped => {
                EventCategory::KEYBOARD | EventCategory::INPUT
            }
            Self::MouseButtonPressed | Self::MouseButtonReleased => {
                EventCategory::MOUSE_BUTTON | EventCategory::MOUSE | EventCategory::INPUT
            }
            Self::MouseMoved | Self::MouseScrolled => EventCategory::MOUSE | EventCategory::INPUT,
        }
    }
}

/// Event kind together with its mandatory payload.
///
/// The set is closed: adding a kind means adding a variant here, and the
/// compiler then points at every match that must learn about it. No kind
/// can be constructed without the data its consumers need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventData {
    WindowClose,
    WindowResize { width: u32, height: u32 },
    AppTick,
    AppUpdate,
    AppRender,
    KeyPressed { key: KeyCode, repeat: bool },
    KeyReleased { key: KeyCode },
    KeyTyped { character: char },
    MouseButtonPressed { button: MouseButton },
    MouseButtonReleased { button: MouseButton },
    MouseMoved { x: f32, y: f32 },
    MouseScrolled { x_offset: f32, y_offset: f32 },
}

impl EventData {
    /// Type tag for this payload.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::WindowClose => EventType::WindowClose,
            Self::WindowResize { .. } => EventType::WindowResize,
            Self::AppTick => EventType::AppTick,
            Self::AppUpdate => EventType::AppUpdate,
            Self::AppRender => EventType::AppRender,
            Self::KeyPressed { .. } => EventType::KeyPressed,
            Self::KeyReleased { .. } => EventType::KeyReleased,
            Self::KeyTyped { .. } => EventType::KeyTyped,
            Self::MouseButtonPressed { .. } => EventType::MouseButtonPressed,
            Self::MouseButtonReleased { .. } => EventType::MouseButtonReleased,
            Self::MouseMoved { .. } => EventType::MouseMoved,
            Self::MouseScrolled { .. } => EventType::MouseScrolled,
        }
    }
}

impl fmt::Display for EventData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowClose => write!(f, "window close"),
            Self::WindowResize { width, height } => {
                write!(f, "window resize to {width}x{height}")
            }
            Self::AppTick => write!(f, "app tick"),
            Self::AppUpdate => write!(f, "app update"),
            Self::AppRender => write!(f, "app render"),
            Self::KeyPressed { key, repeat: true } => write!(f, "key pressed: {key:?} (repeat)"),
            Self::KeyPressed { key, repeat: false } => write!(f, "key pressed: {key:?}"),
            Self::KeyReleased { key } => write!(f, "key released: {key:?}"),
            Self::KeyTyped { character } => write!(f, "key typed: {character:?}"),
            Self::MouseButtonPressed { button } => write!(f, "mouse button pressed: {button:?}"),
            Self::MouseButtonReleased { button } => write!(f, "mouse button released: {button:?}"),
            Self::MouseMoved { x, y } => write!(f, "mouse moved to {x}, {y}"),
            Self::MouseScrolled { x_offset, y_offset } => {
                write!(f, "mouse scrolled by {x_offset}, {y_offset}")
            }
        }
    }
}

/// A single event instance flowing through the dispatch chain.
///
/// Created at the point of platform translation, passed by mutable
/// reference through the dispatcher and the layer stack, and dropped when
/// routing completes. The handled flag is monotonic: [`Event::set_handled`]
/// switches it to true and nothing switches it back, so a consumed event
/// stays consumed for the rest of the chain.
#[derive(Debug, Clone)]
pub struct Event {
    data: EventData,
    handled: bool,
}

impl Event {
    /// Wrap a payload into an unhandled event.
    pub fn new(data: EventData) -> Self {
        Self {
            data,
            handled: false,
        }
    }

    /// The kind-specific payload.
    pub fn data(&self) -> &EventData {
        &self.data
    }

    /// Type tag of the payload.
    pub fn event_type(&self) -> EventType {
        self.data.event_type()
    }

    /// Category bitmask of the payload.
    pub fn category(&self) -> EventCategory {
        self.event_type().category()
    }

    /// True if this event belongs to any of the given categories.
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.category().intersects(category)
    }

    /// True once some consumer has fully processed this event.
    pub fn handled(&self) -> bool {
        self.handled
    }

    /// Mark the event as handled. Irreversible.
    pub fn set_handled(&mut self) {
        self.handled = true;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}
