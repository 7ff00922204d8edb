//! Shared "show UX insights" flag.
//!
//! One store exists per page. The navbar switch is the only writer; every
//! mounted annotation reads it. Subscribers are notified synchronously, in the
//! order they subscribed, after each change.

use std::fmt;

/// Identifier returned by [`VisibilityStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(bool)>;

/// Boolean visibility flag with change listeners.
pub struct VisibilityStore {
    visible: bool,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl VisibilityStore {
    /// Annotations start hidden.
    pub fn new() -> Self {
        Self {
            visible: false,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Invert the flag and return the new value.
    ///
    /// The inversion reads the value at the time the call is applied, so two
    /// queued toggles always cancel out.
    pub fn toggle(&mut self) -> bool {
        let next = !self.visible;
        self.set(next);
        next
    }

    /// Set the flag. Listeners only fire when the value actually changes.
    pub fn set(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        tracing::debug!(visible, listeners = self.listeners.len(), "Insights visibility changed");
        for (_, listener) in &self.listeners {
            listener(visible);
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(bool) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for VisibilityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VisibilityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityStore")
            .field("visible", &self.visible)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_starts_hidden() {
        assert!(!VisibilityStore::new().is_visible());
    }

    #[test]
    fn test_toggle_involution() {
        let mut store = VisibilityStore::new();
        for initial in [false, true] {
            store.set(initial);
            store.toggle();
            store.toggle();
            assert_eq!(store.is_visible(), initial);
        }
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut store = VisibilityStore::new();
        assert!(store.toggle());
        assert!(!store.toggle());
    }

    #[test]
    fn test_listeners_notified_in_order() {
        let mut store = VisibilityStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["navbar", "hero"] {
            let seen = seen.clone();
            store.subscribe(move |v| seen.borrow_mut().push((tag, v)));
        }

        store.toggle();
        store.toggle();

        assert_eq!(
            *seen.borrow(),
            vec![
                ("navbar", true),
                ("hero", true),
                ("navbar", false),
                ("hero", false)
            ]
        );
    }

    #[test]
    fn test_set_same_value_is_silent() {
        let mut store = VisibilityStore::new();
        let calls = Rc::new(RefCell::new(0));
        let c = calls.clone();
        store.subscribe(move |_| *c.borrow_mut() += 1);

        store.set(false);
        assert_eq!(*calls.borrow(), 0);
        store.set(true);
        store.set(true);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = VisibilityStore::new();
        let calls = Rc::new(RefCell::new(0));
        let c = calls.clone();
        let id = store.subscribe(move |_| *c.borrow_mut() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle();
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(store.subscriber_count(), 0);
    }
}
