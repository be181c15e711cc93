//! Listener registry.
//!
//! Listeners are stored by id with an optional kind filter. Emission order is
//! registration order (ascending id), so observers see a stable sequence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{EventKind, MatchEvent};

/// Callback invoked with each emitted event.
pub type Listener = Box<dyn FnMut(&MatchEvent) + Send>;

/// Handle returned by registration, used to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

struct Subscription {
    /// `None` listens to every kind.
    kinds: Option<SmallVec<[EventKind; 4]>>,
    callback: Listener,
}

impl Subscription {
    fn wants(&self, kind: EventKind) -> bool {
        self.kinds.as_ref().map_or(true, |kinds| kinds.contains(&kind))
    }
}

/// Registry of match listeners.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: FxHashMap<ListenerId, Subscription>,

    /// Next listener ID to allocate.
    next_id: u32,
}

impl ListenerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every event, returns its ID.
    pub fn register(&mut self, callback: impl FnMut(&MatchEvent) + Send + 'static) -> ListenerId {
        self.insert(None, Box::new(callback))
    }

    /// Register a listener for the given kinds only.
    pub fn register_for(
        &mut self,
        kinds: &[EventKind],
        callback: impl FnMut(&MatchEvent) + Send + 'static,
    ) -> ListenerId {
        self.insert(Some(SmallVec::from_slice(kinds)), Box::new(callback))
    }

    fn insert(&mut self, kinds: Option<SmallVec<[EventKind; 4]>>, callback: Listener) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Subscription { kinds, callback });
        id
    }

    /// Unregister a listener. Returns `false` if the id was unknown.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Invoke every interested listener with `event`.
    pub fn emit(&mut self, event: &MatchEvent) {
        let kind = event.kind();
        let mut ids: SmallVec<[ListenerId; 8]> = self.listeners.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            if let Some(subscription) = self.listeners.get_mut(&id) {
                if subscription.wants(kind) {
                    (subscription.callback)(event);
                }
            }
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
