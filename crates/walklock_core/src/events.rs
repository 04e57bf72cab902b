//! Controller event dispatch
//!
//! The controller exposes an explicit subscribe/unsubscribe interface
//! instead of inheriting from a shared event-emitter base. Handlers are
//! stored behind generational keys so unsubscribing a stale key is a no-op
//! rather than a panic.

use slotmap::{new_key_type, SlotMap};

use crate::anchor::Position;

new_key_type! {
    /// Key returned by [`EventBus::subscribe`], used to unsubscribe
    pub struct HandlerKey;
}

/// The signals a controller emits to its consumers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Throttled position update while locked and stepping
    Moved,
    /// Fired once per unlock transition with the final position
    Unlocked,
}

type Handler = Box<dyn FnMut(&Position)>;

/// Keyed handler registry for controller signals
///
/// All dispatch happens on the host's single logical thread; handlers are
/// plain `FnMut` closures invoked synchronously during `emit`.
#[derive(Default)]
pub struct EventBus {
    handlers: SlotMap<HandlerKey, (ControllerEvent, Handler)>,
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind
    pub fn subscribe<F>(&mut self, event: ControllerEvent, handler: F) -> HandlerKey
    where
        F: FnMut(&Position) + 'static,
    {
        self.handlers.insert((event, Box::new(handler)))
    }

    /// Remove a handler; returns false if the key was already gone
    pub fn unsubscribe(&mut self, key: HandlerKey) -> bool {
        self.handlers.remove(key).is_some()
    }

    /// Invoke every handler registered for `event`
    pub fn emit(&mut self, event: ControllerEvent, payload: &Position) {
        for (kind, handler) in self.handlers.values_mut() {
            if *kind == event {
                handler(payload);
            }
        }
    }

    /// Drop all handlers (disposal)
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Number of registered handlers across all event kinds
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
