//! Strategies for handing a cycle's events to the application.
//!
//! A window uses exactly one strategy, picked by its type parameter: the
//! polled [`EventList`] or the handler table [`Callbacks`].

use std::fmt;

use casement_core::Size;

use crate::event::{Event, EventKind, EventList};
use crate::window::WindowState;

/// Receives the events detected by one update cycle.
pub trait EventDelivery {
    /// Called once per cycle, right before the first event of that cycle.
    fn begin_cycle(&mut self);

    /// Deliver one event. `state` already reflects the cycle's new size.
    ///
    /// Fullscreen changes made through `state` are applied by the next update.
    fn deliver(&mut self, state: &mut WindowState, event: Event);
}

impl EventDelivery for EventList {
    fn begin_cycle(&mut self) {
        self.purge();
    }

    fn deliver(&mut self, _state: &mut WindowState, event: Event) {
        self.push(event);
    }
}

type CloseHandler<'a> = Box<dyn FnMut(&mut WindowState) + 'a>;
type ResizeHandler<'a> = Box<dyn FnMut(&mut WindowState, Size<u32>) + 'a>;

/// One handler slot per event kind, invoked synchronously during `update`.
///
/// Registering a handler for a kind that already has one replaces it.
/// Handlers may request fullscreen through the [`WindowState`] they receive.
/// Handlers may borrow context that lives for `'a`, which must outlive the
/// window that owns the table.
#[derive(Default)]
pub struct Callbacks<'a> {
    close: Option<CloseHandler<'a>>,
    resize: Option<ResizeHandler<'a>>,
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self {
            close: None,
            resize: None,
        }
    }

    pub fn on_close<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&mut WindowState) + 'a,
    {
        self.close = Some(Box::new(handler));
        self
    }

    pub fn on_resize<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&mut WindowState, Size<u32>) + 'a,
    {
        self.resize = Some(Box::new(handler));
        self
    }

    /// Removes the handler for `kind`, if any.
    pub fn remove(&mut self, kind: EventKind) -> &mut Self {
        match kind {
            EventKind::Close => self.close = None,
            EventKind::Resize => self.resize = None,
        }
        self
    }

    pub fn is_registered(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Close => self.close.is_some(),
            EventKind::Resize => self.resize.is_some(),
        }
    }
}

impl EventDelivery for Callbacks<'_> {
    fn begin_cycle(&mut self) {}

    fn deliver(&mut self, state: &mut WindowState, event: Event) {
        match event {
            Event::Close => {
                if let Some(handler) = self.close.as_mut() {
                    handler(state);
                }
            }
            Event::Resize(size) => {
                if let Some(handler) = self.resize.as_mut() {
                    handler(state, size);
                }
            }
        }
    }
}

impl fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("close", &self.close.is_some())
            .field("resize", &self.resize.is_some())
            .finish()
    }
}
