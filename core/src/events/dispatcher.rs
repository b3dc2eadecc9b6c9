//! Exact-match event dispatch.

use super::event::{Event, EventData, EventType};

/// Routes one event to kind-specific handlers.
///
/// A dispatcher is transient: it borrows exactly one event and is dropped
/// when routing completes. [`EventDispatcher::dispatch`] may be called any
/// number of times against the same dispatcher with distinct kinds; a
/// handler runs only when the bound event's tag matches exactly.
///
/// # Example
///
/// ```
/// use kestrel_core::events::{Event, EventData, EventDispatcher, EventType};
///
/// let mut event = Event::new(EventData::WindowClose);
/// let mut dispatcher = EventDispatcher::new(&mut event);
///
/// let fired = dispatcher.dispatch(EventType::WindowClose, |_data| true);
/// assert!(fired);
/// assert!(event.handled());
/// ```
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
}

impl<'a> EventDispatcher<'a> {
    /// Bind a dispatcher to one event for the duration of a routing pass.
    pub fn new(event: &'a mut Event) -> Self {
        Self { event }
    }

    /// Invoke `handler` if the bound event's tag equals `kind`.
    ///
    /// The handler's boolean return is OR'd into the event's handled flag:
    /// returning true marks the event handled, returning false leaves the
    /// flag as it was. Once handled, an event stays handled. The return
    /// value reports whether the handler ran at all, not whether the event
    /// was consumed.
    pub fn dispatch<F>(&mut self, kind: EventType, handler: F) -> bool
    where
        F: FnOnce(&EventData) -> bool,
    {
        if self.event.event_type() != kind {
            return false;
        }
        if handler(self.event.data()) {
            self.event.set_handled();
        }
        true
    }
}
