//! Outbound match notifications.
//!
//! A [`Match`](crate::game::Match) owns a [`ListenerRegistry`] and emits a
//! [`MatchEvent`] synchronously after every committed mutation. Listeners are
//! plain callbacks; nothing below the match holds a reference back to it.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use quoridor_engine::events::{EventKind, ListenerRegistry, MatchEvent};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut registry = ListenerRegistry::new();
//! registry.register_for(&[EventKind::BoardChanged], move |event| {
//!     sink.lock().unwrap().push(event.kind());
//! });
//!
//! registry.emit(&MatchEvent::ParticipantsChanged);
//! registry.emit(&MatchEvent::BoardChanged);
//! assert_eq!(*seen.lock().unwrap(), vec![EventKind::BoardChanged]);
//! ```

mod event;
mod registry;

pub use event::{EventKind, MatchEvent};
pub use registry::{Listener, ListenerId, ListenerRegistry};
