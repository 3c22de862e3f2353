//! Keyed listener storage.
//!
//! The registry maps each event key to a [`CallbackAggregate`]: the ordered
//! listeners for that key plus the argument signature fixed by the first
//! registration. It also tracks which keys are permanent. It performs no
//! locking and no dispatch; [`EventController`](crate::EventController)
//! wraps it in a mutex and drives it.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::args::HandlerSignature;
use crate::error::{EventError, Operation, Result};
use crate::listener::{ErasedListener, ListenerId};

/// Ordered listeners sharing one signature.
pub(crate) struct CallbackAggregate {
    signature: HandlerSignature,
    entries: Vec<ErasedListener>,
}

impl CallbackAggregate {
    fn new(first: ErasedListener) -> Self {
        Self {
            signature: first.signature,
            entries: vec![first],
        }
    }
}

pub(crate) struct Registry<K> {
    router: HashMap<K, CallbackAggregate>,
    permanent: HashSet<K>,
}

impl<K> Registry<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub(crate) fn new() -> Self {
        Self {
            router: HashMap::new(),
            permanent: HashSet::new(),
        }
    }

    /// Append a listener, creating the aggregate on first use.
    ///
    /// Rejects the listener without touching the aggregate when its signature
    /// differs from the one already fixed for `key`.
    pub(crate) fn insert(&mut self, key: K, listener: ErasedListener) -> Result<()> {
        match self.router.entry(key) {
            Entry::Occupied(occupied) => {
                let expected = occupied.get().signature;
                if expected != listener.signature {
                    return Err(EventError::mismatch(
                        Operation::Register,
                        occupied.key(),
                        expected,
                        listener.signature,
                    ));
                }
                occupied.into_mut().entries.push(listener);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CallbackAggregate::new(listener));
            }
        }
        Ok(())
    }

    /// Remove the first entry with `id` after checking `signature`.
    ///
    /// Returns `Ok(false)` when the key or the listener is absent.
    pub(crate) fn remove<Q>(
        &mut self,
        key: &Q,
        id: ListenerId,
        signature: HandlerSignature,
    ) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some(aggregate) = self.router.get(key) else {
            return Ok(false);
        };
        if aggregate.signature != signature {
            return Err(EventError::mismatch(
                Operation::Unregister,
                &key,
                aggregate.signature,
                signature,
            ));
        }
        Ok(self.detach(key, id))
    }

    /// Remove the first entry with `id`, dropping the key once it is empty.
    ///
    /// Permanent keys are dropped too; permanence only guards against
    /// [`Registry::cleanup`].
    pub(crate) fn detach<Q>(&mut self, key: &Q, id: ListenerId) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(aggregate) = self.router.get_mut(key) else {
            return false;
        };
        let removed = match aggregate.entries.iter().position(|e| e.id() == id) {
            Some(index) => {
                aggregate.entries.remove(index);
                true
            }
            None => false,
        };
        if aggregate.entries.is_empty() {
            self.router.remove(key);
        }
        removed
    }

    /// Copy of the listeners registered under `key`, in registration order.
    pub(crate) fn snapshot<Q>(&self, key: &Q) -> Option<Vec<ErasedListener>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.router.get(key).map(|a| a.entries.clone())
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.router.contains_key(key)
    }

    pub(crate) fn len_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.router.get(key).map_or(0, |a| a.entries.len())
    }

    pub(crate) fn signature_of<Q>(&self, key: &Q) -> Option<HandlerSignature>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.router.get(key).map(|a| a.signature)
    }

    pub(crate) fn keys(&self) -> Vec<K> {
        self.router.keys().cloned().collect()
    }

    pub(crate) fn mark_permanent(&mut self, key: K) -> bool {
        self.permanent.insert(key)
    }

    pub(crate) fn is_permanent<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.permanent.contains(key)
    }

    /// Drop every aggregate whose key is not permanent. Returns how many
    /// keys were removed.
    pub(crate) fn cleanup(&mut self) -> usize {
        let before = self.router.len();
        let permanent = &self.permanent;
        self.router.retain(|key, _| permanent.contains(key));
        before - self.router.len()
    }

    /// Drop every aggregate, permanent or not. The permanent set is kept.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.router.len();
        self.router.clear();
        removed
    }
}
