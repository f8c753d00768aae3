//! Enablement change notification primitive.
//!
//! A single-threaded observer list with RAII unsubscription. Cloning an
//! `EnablementChanged` yields another handle to the same subscriber list,
//! so a command can expose the event while helpers hold a handle to fire it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct ListenerSet {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

/// Notification channel announcing that a command's `can_run` answer may
/// have changed.
#[derive(Clone, Default)]
pub struct EnablementChanged {
    inner: Rc<ListenerSet>,
}

impl EnablementChanged {
    /// Create an event with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    ///
    /// The registration lives exactly as long as the returned guard;
    /// dropping the guard unsubscribes, including during unwinding.
    #[must_use = "dropping the Subscription immediately unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            set: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Invoke every listener registered at the start of the call.
    ///
    /// Listeners may subscribe or unsubscribe while the emit is in flight;
    /// a listener registered mid-emit is not invoked by that emit.
    pub fn emit(&self) {
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Guard for one listener registration on an [`EnablementChanged`] event.
pub struct Subscription {
    set: Weak<ListenerSet>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(set) = self.set.upgrade() {
            set.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
