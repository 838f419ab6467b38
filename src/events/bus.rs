//! Listener registry.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use equation_cards::events::{EventBus, GameEvent};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut bus = EventBus::new();
//! let id = bus.add_listener(move |event| sink.borrow_mut().push(event.kind()));
//! bus.emit(&GameEvent::GamePaused);
//! assert!(bus.remove_listener(id));
//! bus.emit(&GameEvent::GameResumed);
//!
//! assert_eq!(seen.borrow().len(), 1);
//! ```

use super::event::GameEvent;

/// Handle returned on registration, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(&GameEvent)>;

/// Ordered set of event listeners.
///
/// Listeners are called synchronously, in registration order.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u32,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn add_listener(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener.
    pub fn emit(&mut self, event: &GameEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_order_and_remove() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let a = Rc::clone(&order);
        let first = bus.add_listener(move |_| a.borrow_mut().push(1));
        let b = Rc::clone(&order);
        bus.add_listener(move |_| b.borrow_mut().push(2));

        bus.emit(&GameEvent::GamePaused);
        assert_eq!(*order.borrow(), vec![1, 2]);

        assert!(bus.remove_listener(first));
        assert!(!bus.remove_listener(first));
        bus.emit(&GameEvent::GameResumed);
        assert_eq!(*order.borrow(), vec![1, 2, 2]);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn test_ids_not_reused() {
        let count = Rc::new(Cell::new(0));
        let mut bus = EventBus::new();
        let c = Rc::clone(&count);
        let a = bus.add_listener(move |_| c.set(c.get() + 1));
        bus.remove_listener(a);
        let b = bus.add_listener(|_| {});
        assert_ne!(a, b);
    }
}
