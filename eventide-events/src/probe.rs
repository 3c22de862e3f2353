//! Liveness checks for listeners bound to an owning object.
//!
//! A listener that closes over state owned by something with its own
//! lifecycle (a scene object, a widget, a session) can carry a probe. The
//! controller asks the probe before every invocation and prunes the listener
//! once the owner is gone.

use std::sync::{Arc, Weak};

/// Answers whether a listener's owning context still exists.
///
/// A panic here is contained like a listener panic when the controller
/// catches panics.
pub trait ValidityProbe: Send + Sync + 'static {
    fn is_alive(&self) -> bool;
}

impl<F> ValidityProbe for F
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    fn is_alive(&self) -> bool {
        (self)()
    }
}

/// Probe that reports the owner alive while any strong reference remains.
pub struct OwnerProbe<T: ?Sized> {
    owner: Weak<T>,
}

impl<T: ?Sized> OwnerProbe<T> {
    pub fn new(owner: &Arc<T>) -> Self {
        Self {
            owner: Arc::downgrade(owner),
        }
    }
}

impl<T: ?Sized + Send + Sync + 'static> ValidityProbe for OwnerProbe<T> {
    fn is_alive(&self) -> bool {
        self.owner.strong_count() > 0
    }
}
