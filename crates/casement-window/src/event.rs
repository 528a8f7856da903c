use casement_core::Size;

use crate::error::{WindowError, WindowResult};

/// Something that happened to a window during one update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user asked for the window to be closed.
    Close,
    /// The window now has this logical size.
    Resize(Size<u32>),
}

/// Discriminant of an [`Event`], used to key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Close,
    Resize,
}

impl Event {
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Close => EventKind::Close,
            Event::Resize(_) => EventKind::Resize,
        }
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// The events emitted by the most recent update cycle, in emission order.
///
/// The list is emptied (and its storage released) at the start of every
/// cycle's emission step, so it never accumulates across cycles.
#[derive(Debug, Default, Clone)]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the event at `index`, or [`WindowError::OutOfRange`].
    pub fn get(&self, index: usize) -> WindowResult<&Event> {
        self.events.get(index).ok_or(WindowError::OutOfRange {
            index,
            len: self.events.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.events.iter().any(|event| event.kind() == kind)
    }

    /// Offer every event to `handler`, dropping the ones it consumes.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&Event) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub(crate) fn purge(&mut self) {
        self.events = Vec::new();
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(events: &[Event]) -> EventList {
        let mut list = EventList::new();
        for event in events {
            list.push(*event);
        }
        list
    }

    #[test]
    fn test_get_in_range() {
        let list = list(&[Event::Close, Event::Resize(Size::new(1024, 768))]);
        assert_eq!(list.get(0), Ok(&Event::Close));
        assert_eq!(list.get(1), Ok(&Event::Resize(Size::new(1024, 768))));
    }

    #[test]
    fn test_get_out_of_range() {
        let list = list(&[Event::Close]);
        assert_eq!(list.get(1), Err(WindowError::OutOfRange { index: 1, len: 1 }));
        assert!(EventList::new().get(0).is_err());
    }

    #[test]
    fn test_purge_releases_storage() {
        let mut list = list(&[Event::Close, Event::Close, Event::Close]);
        assert!(list.capacity() >= 3);
        list.purge();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 0);
    }

    #[test]
    fn test_dispatch_removes_consumed() {
        let mut list = list(&[Event::Close, Event::Resize(Size::new(1, 1))]);
        list.dispatch(|event| match event {
            Event::Close => HandleStatus::consumed(),
            Event::Resize(_) => HandleStatus::handled(),
        });
        assert_eq!(list.len(), 1);
        assert!(list.contains(EventKind::Resize));
        assert!(!list.contains(EventKind::Close));
    }

    #[test]
    fn test_handle_status_flags() {
        assert!(HandleStatus::consumed().is_handled());
        assert!(HandleStatus::consumed().is_consumed());
        assert!(!HandleStatus::handled().is_consumed());
        assert!(!HandleStatus::ignored().is_handled());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Event::Close.kind(), EventKind::Close);
        assert_eq!(Event::Resize(Size::new(2, 2)).kind(), EventKind::Resize);
    }
}
