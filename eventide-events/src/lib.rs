//! Keyed, synchronous event dispatch for Eventide
//!
//! This crate provides an in-process event controller: listeners register
//! under an event key, triggers deliver a tuple of arguments to every
//! listener under that key, in registration order, on the caller's thread.
//!
//! ## Features
//!
//! - **Typed keys** - Any `Eq + Hash + Clone + Debug` type works as a key
//! - **Multi-arity** - Events carry zero to four arguments
//! - **Shape checking** - The first listener fixes a key's argument signature
//! - **Permanent events** - Survive `cleanup()` on scope transitions
//! - **Fault isolation** - A failing or panicking listener never stops the others
//! - **Stale pruning** - Listeners bound to a dropped owner are removed on the next trigger
//!
//! ## Quick Start
//!
//! ```rust
//! use eventide_events::*;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum GameEvent {
//!     PlayerHit,
//!     LevelLoaded,
//! }
//!
//! let events = EventController::new();
//!
//! let on_hit = events
//!     .on(GameEvent::PlayerHit, |damage: u32, source: String| {
//!         println!("{} hit the player for {}", source, damage);
//!     })
//!     .unwrap();
//!
//! events
//!     .trigger(&GameEvent::PlayerHit, (12u32, "goblin".to_string()))
//!     .unwrap();
//!
//! // A listener with another shape is rejected
//! assert!(events.on(GameEvent::PlayerHit, || {}).is_err());
//!
//! events.remove_listener(&GameEvent::PlayerHit, &on_hit).unwrap();
//! assert!(!events.contains(&GameEvent::PlayerHit));
//! # let _ = GameEvent::LevelLoaded;
//! ```
//!
//! ## Permanent Events
//!
//! ```rust
//! use eventide_events::*;
//!
//! let events = EventController::new();
//! events.mark_permanent("quit");
//! events.on("quit", || println!("bye")).unwrap();
//! events.on("enemy_spawned", |_id: u64| {}).unwrap();
//!
//! // Scene reload: transient subscriptions go away
//! events.cleanup();
//! assert!(events.contains("quit"));
//! assert!(!events.contains("enemy_spawned"));
//! ```
//!
//! ## Owner-bound Listeners
//!
//! ```rust
//! use eventide_events::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let events = EventController::builder().sink(sink.clone()).build();
//!
//! let widget = Arc::new("health_bar");
//! let listener = Listener::bound(&widget, |hp: u32| println!("hp = {}", hp));
//! events.add_listener("hp_changed", &listener).unwrap();
//!
//! drop(widget);
//! events.trigger("hp_changed", (90u32,)).unwrap();
//! assert_eq!(sink.stale_count(), 1);
//! assert!(!events.contains("hp_changed"));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use eventide_events::*;
//!
//! let events: EventController<&'static str> = EventControllerBuilder::new()
//!     .enable_logging(false)     // No debug logs for registry changes
//!     .catch_panics(true)        // Contain listener panics
//!     .prune_stale(true)         // Drop listeners whose owner is gone
//!     .sink(TracingSink)         // Where listener failures are reported
//!     .build();
//! # let _ = events;
//! ```

pub mod args;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod listener;
pub mod probe;
mod registry;

pub use args::{Callback, EventArgs, HandlerResult, HandlerSignature, IntoHandlerResult};
pub use config::ControllerConfig;
pub use controller::{EventController, EventControllerBuilder};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsSink, RecordingSink, TracingSink};
pub use error::{EventError, HandlerError, Operation, Result};
pub use listener::{Listener, ListenerId};
pub use probe::{OwnerProbe, ValidityProbe};
