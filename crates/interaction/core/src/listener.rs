//! Listeners attached to interaction events.
//!
//! A [`ListenerChain`] is the list of extra reactions run after a target's own
//! [`Targetable::interact`] hook: play a sound, toggle an object, log, etc.

use crate::target::Targetable;

/// Reaction to a fired interaction.
pub trait InteractionListener {
    fn on_interact(&mut self, target: &dyn Targetable);
}

/// Blanket implementation so closures can be attached directly.
impl<F> InteractionListener for F
where
    F: FnMut(&dyn Targetable),
{
    #[inline]
    fn on_interact(&mut self, target: &dyn Targetable) {
        self(target)
    }
}

/// Ordered list of listeners. Listeners run in registration order.
#[derive(Default)]
pub struct ListenerChain {
    listeners: Vec<Box<dyn InteractionListener>>,
}

impl ListenerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: impl InteractionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Runs the target's own hook, then every listener.
    pub fn fire(&mut self, target: &dyn Targetable) {
        target.interact();
        for listener in &mut self.listeners {
            listener.on_interact(target);
        }
    }
}

impl std::fmt::Debug for ListenerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerChain")
            .field("len", &self.listeners.len())
            .finish()
    }
}
