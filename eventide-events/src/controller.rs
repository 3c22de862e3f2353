//! Event controller: registration and dispatch.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, trace};

use crate::args::{Callback, EventArgs, HandlerResult, HandlerSignature};
use crate::config::ControllerConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsSink, TracingSink};
use crate::error::{EventError, HandlerError, Operation, Result};
use crate::listener::{ErasedListener, Listener};
use crate::registry::Registry;

/// Keyed, synchronous event controller.
///
/// Cloning the controller yields another handle to the same registry, so a
/// listener can capture a clone and register, remove or trigger from inside
/// its own body.
pub struct EventController<K> {
    inner: Arc<ControllerInner<K>>,
}

struct ControllerInner<K> {
    registry: Mutex<Registry<K>>,
    config: ControllerConfig,
    sink: Arc<dyn DiagnosticsSink>,
}

impl<K> EventController<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create a controller with the default config and a [`TracingSink`].
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    /// Create a controller with custom config
    pub fn with_config(config: ControllerConfig) -> Self {
        Self::from_parts(config, Arc::new(TracingSink))
    }

    pub fn builder() -> EventControllerBuilder<K> {
        EventControllerBuilder::new()
    }

    fn from_parts(config: ControllerConfig, sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                registry: Mutex::new(Registry::new()),
                config,
                sink,
            }),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.inner.config
    }

    /// Mark `key` as permanent so that [`cleanup`](Self::cleanup) keeps it.
    ///
    /// Idempotent, and the key does not need any listeners yet.
    pub fn mark_permanent(&self, key: K) {
        let newly_marked = self.inner.registry.lock().mark_permanent(key.clone());
        if newly_marked && self.inner.config.enable_logging {
            debug!("Marked event {:?} as permanent", key);
        }
    }

    pub fn is_permanent<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.registry.lock().is_permanent(key)
    }

    /// Whether any listener is registered under `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.registry.lock().contains(key)
    }

    /// Drop every non-permanent key and its listeners.
    ///
    /// Meant for scope transitions (scene or level reloads, session resets)
    /// where transient subscriptions go away and permanent ones stay.
    pub fn cleanup(&self) {
        let removed = self.inner.registry.lock().cleanup();
        if self.inner.config.enable_logging {
            info!("Cleaned up {} transient event(s)", removed);
        }
    }

    /// Drop every key, permanent or not. Permanent marks are kept.
    pub fn clear(&self) {
        let removed = self.inner.registry.lock().clear();
        if self.inner.config.enable_logging {
            info!("Cleared {} event(s)", removed);
        }
    }

    /// Register `listener` under `key`.
    ///
    /// The first listener for a key fixes its argument signature; a listener
    /// of any other shape is rejected with [`EventError::SignatureMismatch`].
    /// Registering the same handle twice makes it fire twice.
    pub fn add_listener<A: EventArgs>(&self, key: K, listener: &Listener<A>) -> Result<()> {
        if self.inner.config.enable_logging {
            debug!(
                "Subscribing listener {} ({}) to event {:?}",
                listener.id(),
                listener.name(),
                key
            );
        }
        self.inner.registry.lock().insert(key, listener.erase())
    }

    /// Wrap `callback` in a [`Listener`], register it, and return the handle
    /// needed to remove it later.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eventide_events::EventController;
    ///
    /// let events = EventController::new();
    /// let on_score = events.on("score", |points: u32| println!("+{}", points)).unwrap();
    /// events.trigger("score", (10u32,)).unwrap();
    /// events.remove_listener("score", &on_score).unwrap();
    /// ```
    pub fn on<A, C>(&self, key: K, callback: C) -> Result<Listener<A>>
    where
        A: EventArgs,
        C: Callback<A>,
    {
        let listener = Listener::new(callback);
        self.add_listener(key, &listener)?;
        Ok(listener)
    }

    /// Remove the first registration of `listener` under `key`.
    ///
    /// Returns `Ok(false)` when the key or the listener is not registered.
    /// Removing the last listener drops the key, even a permanent one.
    pub fn remove_listener<Q, A>(&self, key: &Q, listener: &Listener<A>) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
        A: EventArgs,
    {
        let removed =
            self.inner
                .registry
                .lock()
                .remove(key, listener.id(), listener.signature())?;
        if removed && self.inner.config.enable_logging {
            debug!(
                "Unsubscribed listener {} ({}) from event {:?}",
                listener.id(),
                listener.name(),
                key
            );
        }
        Ok(removed)
    }

    /// Deliver `args` to every listener registered under `key`.
    ///
    /// Listeners run in registration order over a snapshot taken on entry, so
    /// listeners added or removed during the pass take effect from the next
    /// trigger on. For each listener:
    ///
    /// 1. a listener whose owner is gone is pruned and reported, not invoked;
    ///    a probe that panics is reported and its listener skipped
    /// 2. a listener of a different shape than `A` aborts the pass with
    ///    [`EventError::SignatureMismatch`]
    /// 3. errors and panics from the listener are reported to the
    ///    diagnostics sink and the pass continues
    ///
    /// Triggering a key without listeners does nothing.
    pub fn trigger<Q, A>(&self, key: &Q, args: A) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
        A: EventArgs,
    {
        let snapshot = {
            let registry = self.inner.registry.lock();
            registry.snapshot(key)
        };
        let Some(snapshot) = snapshot else {
            return Ok(());
        };

        trace!("Triggering event {:?} for {} listener(s)", key, snapshot.len());

        for entry in &snapshot {
            if self.inner.config.prune_stale {
                match self.probe(entry) {
                    Ok(true) => {}
                    Ok(false) => {
                        // False when an earlier listener in this pass removed it
                        if self.inner.registry.lock().detach(key, entry.id()) {
                            self.report(key, entry, DiagnosticKind::StaleSubscriber);
                        }
                        continue;
                    }
                    Err(err) => {
                        self.report(key, entry, DiagnosticKind::HandlerFailed(err));
                        continue;
                    }
                }
            }

            let Some(listener) = entry.downcast::<A>() else {
                return Err(EventError::mismatch(
                    Operation::Trigger,
                    &key,
                    entry.signature,
                    HandlerSignature::of::<A>(),
                ));
            };

            if let Err(err) = self.invoke(listener, args.clone()) {
                self.report(key, entry, DiagnosticKind::HandlerFailed(err));
            }
        }

        Ok(())
    }

    fn probe(&self, entry: &ErasedListener) -> std::result::Result<bool, HandlerError> {
        if !self.inner.config.catch_panics {
            return Ok(entry.is_alive());
        }
        panic::catch_unwind(AssertUnwindSafe(|| entry.is_alive()))
            .map_err(HandlerError::from_panic)
    }

    fn invoke<A: EventArgs>(&self, listener: &Listener<A>, args: A) -> HandlerResult {
        if !self.inner.config.catch_panics {
            return listener.call(args);
        }
        panic::catch_unwind(AssertUnwindSafe(|| listener.call(args)))
            .unwrap_or_else(|payload| Err(HandlerError::from_panic(payload)))
    }

    fn report<Q>(&self, key: &Q, entry: &ErasedListener, kind: DiagnosticKind)
    where
        Q: Debug + ?Sized,
    {
        let diagnostic = Diagnostic::new(&key, entry.id(), entry.name(), kind);
        self.inner.sink.report(diagnostic);
    }

    /// Number of registrations under `key` (0 when absent).
    pub fn listener_count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.registry.lock().len_of(key)
    }

    /// The argument signature fixed for `key`, if it has listeners.
    pub fn signature_of<Q>(&self, key: &Q) -> Option<HandlerSignature>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.registry.lock().signature_of(key)
    }

    /// Keys that currently have listeners, in no particular order.
    pub fn keys(&self) -> Vec<K> {
        self.inner.registry.lock().keys()
    }
}

impl<K> Clone for EventController<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Default for EventController<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Event controller builder
pub struct EventControllerBuilder<K> {
    config: ControllerConfig,
    sink: Option<Arc<dyn DiagnosticsSink>>,
    _key: PhantomData<fn() -> K>,
}

impl<K> EventControllerBuilder<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            config: ControllerConfig::default(),
            sink: None,
            _key: PhantomData,
        }
    }

    /// Start from an existing config (e.g. [`ControllerConfig::from_env`]).
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable/disable debug logging of registry changes
    pub fn enable_logging(mut self, enabled: bool) -> Self {
        self.config.enable_logging = enabled;
        self
    }

    /// Enable/disable panic containment
    pub fn catch_panics(mut self, enabled: bool) -> Self {
        self.config.catch_panics = enabled;
        self
    }

    /// Enable/disable pruning of listeners whose owner is gone
    pub fn prune_stale(mut self, enabled: bool) -> Self {
        self.config.prune_stale = enabled;
        self
    }

    /// Route diagnostics to `sink` instead of the default [`TracingSink`]
    pub fn sink<S: DiagnosticsSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn build(self) -> EventController<K> {
        let sink = self.sink.unwrap_or_else(|| Arc::new(TracingSink));
        EventController::from_parts(self.config, sink)
    }
}

impl<K> Default for EventControllerBuilder<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    fn recording() -> (EventController<&'static str>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let controller = EventController::builder().sink(sink.clone()).build();
        (controller, sink)
    }

    fn log_to(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> Listener<()> {
        let log = log.clone();
        Listener::new(move || log.lock().push(tag))
    }

    #[test]
    fn test_listeners_fire_in_registration_order() {
        let (events, _) = recording();
        let log = Arc::new(Mutex::new(Vec::new()));
        let h1 = log_to(&log, "h1");
        let h2 = log_to(&log, "h2");
        let h3 = log_to(&log, "h3");

        events.add_listener("tick", &h1).unwrap();
        events.add_listener("tick", &h2).unwrap();
        events.add_listener("tick", &h3).unwrap();
        events.trigger("tick", ()).unwrap();
        assert_eq!(*log.lock(), vec!["h1", "h2", "h3"]);

        log.lock().clear();
        assert!(events.remove_listener("tick", &h2).unwrap());
        events.trigger("tick", ()).unwrap();
        assert_eq!(*log.lock(), vec!["h1", "h3"]);
    }

    #[test]
    fn test_duplicate_registration_fires_twice() {
        let (events, _) = recording();
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let listener = Listener::new(move |n: u32| {
            counter.fetch_add(n, Ordering::SeqCst);
        });

        events.add_listener("score", &listener).unwrap();
        events.add_listener("score", &listener).unwrap();
        events.trigger("score", (5u32,)).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 10);
        assert_eq!(events.listener_count("score"), 2);

        events.remove_listener("score", &listener).unwrap();
        assert_eq!(events.listener_count("score"), 1);
    }

    #[test]
    fn test_register_wrong_shape_leaves_aggregate_unchanged() {
        let (events, _) = recording();
        let fired = Arc::new(AtomicU32::new(0));
        let f = fired.clone();
        events
            .on("damage", move |_: u32, _: String| {
                f.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        let err = events.on("damage", |_: u32| {}).unwrap_err();
        assert!(matches!(
            err,
            EventError::SignatureMismatch {
                operation: Operation::Register,
                ..
            }
        ));
        assert_eq!(events.listener_count("damage"), 1);
        assert_eq!(
            events.signature_of("damage"),
            Some(HandlerSignature::of::<(u32, String)>())
        );

        events.trigger("damage", (3u32, "orc".to_string())).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregister_absent_key_is_not_found() {
        let (events, _) = recording();
        let listener = Listener::new(|| {});
        assert!(!events.remove_listener("nothing", &listener).unwrap());
    }

    #[test]
    fn test_unregister_wrong_shape_fails() {
        let (events, _) = recording();
        events.on("tick", || {}).unwrap();

        let other = Listener::new(|_: f32| {});
        let err = events.remove_listener("tick", &other).unwrap_err();
        assert!(matches!(
            err,
            EventError::SignatureMismatch {
                operation: Operation::Unregister,
                ..
            }
        ));
        assert!(events.contains("tick"));
    }

    #[test]
    fn test_trigger_absent_key_is_silent() {
        let (events, sink) = recording();
        events.trigger("never_registered", ()).unwrap();
        events.trigger("never_registered", (1u8, 2u8)).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_trigger_wrong_shape_aborts_pass() {
        let (events, sink) = recording();
        events.on("tick", || {}).unwrap();

        let err = events.trigger("tick", (1u32,)).unwrap_err();
        match err {
            EventError::SignatureMismatch {
                operation,
                key,
                expected,
                found,
            } => {
                assert_eq!(operation, Operation::Trigger);
                assert_eq!(key, "\"tick\"");
                assert_eq!(expected, HandlerSignature::of::<()>());
                assert_eq!(found, HandlerSignature::of::<(u32,)>());
            }
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn test_failing_listener_does_not_stop_others() {
        let (events, sink) = recording();
        let ran = Arc::new(AtomicBool::new(false));
        let r = ran.clone();

        events
            .on("save", |_: u32| -> std::result::Result<(), String> {
                Err("disk full".to_string())
            })
            .unwrap();
        events
            .on("save", |_: u32| -> std::result::Result<(), String> {
                panic!("listener bug")
            })
            .unwrap();
        events
            .on("save", move |_: u32| r.store(true, Ordering::SeqCst))
            .unwrap();

        events.trigger("save", (1u32,)).unwrap();

        assert!(ran.load(Ordering::SeqCst));
        assert_eq!(
            sink.failures(),
            vec![
                HandlerError::Failed("disk full".to_string()),
                HandlerError::Panicked("listener bug".to_string()),
            ]
        );
    }

    #[test]
    fn test_permanent_survives_cleanup() {
        let (events, _) = recording();
        let count = Arc::new(AtomicU32::new(0));
        let c = count.clone();

        events.mark_permanent("quit");
        events
            .on("quit", move || {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        events.on("spawn", || {}).unwrap();

        events.cleanup();

        assert!(events.contains("quit"));
        assert!(!events.contains("spawn"));
        events.trigger("quit", ()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_mark_permanent_without_listeners() {
        let (events, _) = recording();
        events.mark_permanent("later");
        events.mark_permanent("later");
        assert!(events.is_permanent("later"));
        assert!(!events.contains("later"));

        events.on("later", || {}).unwrap();
        events.cleanup();
        assert!(events.contains("later"));
    }

    #[test]
    fn test_unregister_empties_permanent_key() {
        let (events, _) = recording();
        events.mark_permanent("quit");
        let listener = events.on("quit", || {}).unwrap();

        assert!(events.remove_listener("quit", &listener).unwrap());
        assert!(!events.contains("quit"));
        assert!(events.is_permanent("quit"));
    }

    #[test]
    fn test_clear_removes_permanent_keys() {
        let (events, _) = recording();
        events.mark_permanent("quit");
        events.on("quit", || {}).unwrap();
        events.on("spawn", || {}).unwrap();

        events.clear();
        assert!(events.keys().is_empty());
        assert!(events.is_permanent("quit"));
    }

    #[test]
    fn test_self_removal_during_dispatch() {
        let (events, _) = recording();
        let log = Arc::new(Mutex::new(Vec::new()));

        let once_slot: Arc<Mutex<Option<Listener<()>>>> = Arc::new(Mutex::new(None));
        let once = {
            let events = events.clone();
            let log = log.clone();
            let slot = once_slot.clone();
            Listener::new(move || {
                log.lock().push("once");
                if let Some(me) = slot.lock().as_ref() {
                    events.remove_listener("tick", me).unwrap();
                }
            })
        };
        *once_slot.lock() = Some(once.clone());

        events.add_listener("tick", &log_to(&log, "before")).unwrap();
        events.add_listener("tick", &once).unwrap();
        events.add_listener("tick", &log_to(&log, "after")).unwrap();

        events.trigger("tick", ()).unwrap();
        assert_eq!(*log.lock(), vec!["before", "once", "after"]);

        log.lock().clear();
        events.trigger("tick", ()).unwrap();
        assert_eq!(*log.lock(), vec!["before", "after"]);

        once_slot.lock().take();
    }

    #[test]
    fn test_listener_added_during_dispatch_waits_for_next_pass() {
        let (events, _) = recording();
        let log = Arc::new(Mutex::new(Vec::new()));
        let late = log_to(&log, "late");

        let adder = {
            let events = events.clone();
            let late = late.clone();
            let log = log.clone();
            Listener::new(move || {
                log.lock().push("adder");
                if events.listener_count("tick") == 1 {
                    events.add_listener("tick", &late).unwrap();
                }
            })
        };
        events.add_listener("tick", &adder).unwrap();

        events.trigger("tick", ()).unwrap();
        assert_eq!(*log.lock(), vec!["adder"]);

        events.trigger("tick", ()).unwrap();
        assert_eq!(*log.lock(), vec!["adder", "adder", "late"]);
    }

    #[test]
    fn test_nested_trigger() {
        let (events, _) = recording();
        let log = Arc::new(Mutex::new(Vec::new()));

        events.add_listener("inner", &log_to(&log, "inner")).unwrap();
        let outer = {
            let events = events.clone();
            let log = log.clone();
            Listener::new(move || {
                log.lock().push("outer");
                events.trigger("inner", ()).unwrap();
            })
        };
        events.add_listener("outer", &outer).unwrap();

        events.trigger("outer", ()).unwrap();
        assert_eq!(*log.lock(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_stale_listener_pruned_once() {
        let (events, sink) = recording();
        let owner = Arc::new(String::from("enemy#7"));
        let count = Arc::new(AtomicU32::new(0));

        let c = count.clone();
        let bound = Listener::bound(&owner, move |_: u32| {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .named("enemy.on_hit");
        events.add_listener("hit", &bound).unwrap();
        events.on("hit", |_: u32| {}).unwrap();

        events.trigger("hit", (1u32,)).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(owner);
        events.trigger("hit", (1u32,)).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(events.listener_count("hit"), 1);
        assert_eq!(sink.stale_count(), 1);
        assert_eq!(sink.diagnostics()[0].listener_name, "enemy.on_hit");
        assert_eq!(sink.diagnostics()[0].listener, bound.id());

        events.trigger("hit", (1u32,)).unwrap();
        assert_eq!(sink.stale_count(), 1);
    }

    #[test]
    fn test_pruning_last_listener_drops_key() {
        let (events, sink) = recording();
        let alive = Arc::new(AtomicBool::new(true));
        let flag = alive.clone();
        let listener = Listener::with_probe(|| {}, move || flag.load(Ordering::SeqCst));
        events.add_listener("ping", &listener).unwrap();

        alive.store(false, Ordering::SeqCst);
        events.trigger("ping", ()).unwrap();

        assert!(!events.contains("ping"));
        assert_eq!(sink.stale_count(), 1);
    }

    #[test]
    fn test_stale_listener_removed_earlier_in_pass_is_not_reported() {
        let (events, sink) = recording();
        let alive = Arc::new(AtomicBool::new(true));
        let count = Arc::new(AtomicU32::new(0));

        let flag = alive.clone();
        let c = count.clone();
        let doomed = Listener::with_probe(
            move || {
                c.fetch_add(1, Ordering::SeqCst);
            },
            move || flag.load(Ordering::SeqCst),
        );

        let killer = {
            let events = events.clone();
            let alive = alive.clone();
            let doomed = doomed.clone();
            Listener::new(move || {
                alive.store(false, Ordering::SeqCst);
                assert!(events.remove_listener("k", &doomed).unwrap());
            })
        };
        events.add_listener("k", &killer).unwrap();
        events.add_listener("k", &doomed).unwrap();

        events.trigger("k", ()).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(sink.stale_count(), 0);
        assert!(sink.is_empty());
        assert_eq!(events.listener_count("k"), 1);
    }

    #[test]
    fn test_panicking_probe_is_contained() {
        let (events, sink) = recording();
        let count = Arc::new(AtomicU32::new(0));
        let c = count.clone();
        let listener = Listener::with_probe(|| {}, || -> bool { panic!("probe exploded") });
        events.add_listener("k", &listener).unwrap();
        events
            .on("k", move || {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        events.trigger("k", ()).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            sink.failures(),
            vec![HandlerError::Panicked("probe exploded".to_string())]
        );
        assert_eq!(sink.diagnostics()[0].listener, listener.id());
        assert_eq!(events.listener_count("k"), 2);
    }

    #[test]
    fn test_prune_stale_disabled() {
        let sink = Arc::new(RecordingSink::new());
        let events: EventController<&'static str> = EventController::builder()
            .prune_stale(false)
            .sink(sink.clone())
            .build();
        let count = Arc::new(AtomicU32::new(0));
        let c = count.clone();
        let listener = Listener::with_probe(
            move || {
                c.fetch_add(1, Ordering::SeqCst);
            },
            || false,
        );
        events.add_listener("ping", &listener).unwrap();

        events.trigger("ping", ()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_panics_propagate_when_not_caught() {
        let events: EventController<&'static str> = EventController::builder()
            .catch_panics(false)
            .build();
        events
            .on("boom", || -> std::result::Result<(), String> { panic!("unhandled") })
            .unwrap();

        let result = panic::catch_unwind(AssertUnwindSafe(|| events.trigger("boom", ())));
        assert!(result.is_err());
        assert!(events.contains("boom"));
    }

    #[test]
    fn test_string_keys_borrowed_lookup() {
        let events: EventController<String> = EventController::new();
        events.on("level_loaded".to_string(), |_: u32| {}).unwrap();

        assert!(events.contains("level_loaded"));
        events.trigger("level_loaded", (2u32,)).unwrap();
        assert_eq!(events.keys(), vec!["level_loaded".to_string()]);
    }

    #[test]
    fn test_four_argument_event() {
        let (events, _) = recording();
        let seen = Arc::new(Mutex::new(None));
        let s = seen.clone();
        events
            .on("move", move |id: u32, x: f32, y: f32, running: bool| {
                *s.lock() = Some((id, x, y, running));
            })
            .unwrap();

        events.trigger("move", (7u32, 1.5f32, -2.0f32, true)).unwrap();
        assert_eq!(*seen.lock(), Some((7, 1.5, -2.0, true)));
    }
}
