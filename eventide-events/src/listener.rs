//! Listener handles.
//!
//! A [`Listener`] is a cheaply cloneable handle around one callback. Clones
//! share an identity, so the handle used for registration is also the handle
//! used for removal. Two listeners created separately are never equal, even
//! if they wrap the same function.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::args::{Callback, EventArgs, HandlerResult, HandlerSignature};
use crate::probe::{OwnerProbe, ValidityProbe};

/// Stable identity of a listener and all of its clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity, name and probe shared by a listener and its erased copies.
struct ListenerMeta {
    id: ListenerId,
    name: String,
    probe: Option<Arc<dyn ValidityProbe>>,
}

impl ListenerMeta {
    fn is_alive(&self) -> bool {
        self.probe.as_ref().is_none_or(|probe| probe.is_alive())
    }
}

/// A typed callback for events carrying the argument tuple `A`.
pub struct Listener<A: EventArgs> {
    meta: Arc<ListenerMeta>,
    callback: Arc<dyn Callback<A>>,
}

impl<A: EventArgs> Listener<A> {
    /// Wrap a callback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eventide_events::Listener;
    ///
    /// let on_damage = Listener::new(|amount: u32, source: String| {
    ///     println!("{} dealt {}", source, amount);
    /// });
    /// assert_eq!(on_damage.signature().arity(), 2);
    /// ```
    pub fn new<C: Callback<A>>(callback: C) -> Self {
        Self::build(callback, None)
    }

    /// Wrap a callback whose owner is checked with `probe` before each call.
    pub fn with_probe<C, P>(callback: C, probe: P) -> Self
    where
        C: Callback<A>,
        P: ValidityProbe,
    {
        Self::build(callback, Some(Arc::new(probe)))
    }

    /// Wrap a callback that lives only as long as `owner` has strong references.
    pub fn bound<T, C>(owner: &Arc<T>, callback: C) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        C: Callback<A>,
    {
        Self::with_probe(callback, OwnerProbe::new(owner))
    }

    fn build<C: Callback<A>>(callback: C, probe: Option<Arc<dyn ValidityProbe>>) -> Self {
        Self {
            meta: Arc::new(ListenerMeta {
                id: ListenerId::new(),
                name: type_name::<C>().to_string(),
                probe,
            }),
            callback: Arc::new(callback),
        }
    }

    /// Replace the diagnostic name (defaults to the callback's type name).
    ///
    /// Only affects a handle that has not been cloned or registered yet;
    /// shared handles keep their current name and the rename is logged at
    /// debug level.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        match Arc::get_mut(&mut self.meta) {
            Some(meta) => meta.name = name,
            None => debug!(
                "Listener {} is shared; keeping name {:?} instead of {:?}",
                self.meta.id, self.meta.name, name
            ),
        }
        self
    }

    pub fn id(&self) -> ListenerId {
        self.meta.id
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn signature(&self) -> HandlerSignature {
        HandlerSignature::of::<A>()
    }

    /// Whether the owning context is still alive. Listeners without a probe
    /// are always alive.
    pub fn is_alive(&self) -> bool {
        self.meta.is_alive()
    }

    /// Invoke the callback directly, bypassing any controller.
    pub fn call(&self, args: A) -> HandlerResult {
        self.callback.call(args)
    }

    pub(crate) fn erase(&self) -> ErasedListener {
        ErasedListener {
            meta: Arc::clone(&self.meta),
            signature: self.signature(),
            typed: Arc::new(self.clone()),
        }
    }
}

impl<A: EventArgs> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            meta: Arc::clone(&self.meta),
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<A: EventArgs> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.meta.id == other.meta.id
    }
}

impl<A: EventArgs> Eq for Listener<A> {}

impl<A: EventArgs> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.meta.id)
            .field("name", &self.meta.name)
            .field("signature", &self.signature())
            .field("probed", &self.meta.probe.is_some())
            .finish()
    }
}

/// Type-erased listener stored in the registry.
#[derive(Clone)]
pub(crate) struct ErasedListener {
    meta: Arc<ListenerMeta>,
    pub(crate) signature: HandlerSignature,
    typed: Arc<dyn Any + Send + Sync>,
}

impl ErasedListener {
    pub(crate) fn id(&self) -> ListenerId {
        self.meta.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.meta.name
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.meta.is_alive()
    }

    /// Recover the typed handle, or `None` if `A` is not the stored tuple type.
    pub(crate) fn downcast<A: EventArgs>(&self) -> Option<&Listener<A>> {
        self.typed.downcast_ref::<Listener<A>>()
    }
}
