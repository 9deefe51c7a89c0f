//! Lifecycle events and the subscription registry that delivers them.
//!
//! Listeners are kept per event kind in registration order. `subscribe` hands
//! back a [`Subscription`]; dropping it unsubscribes. The registry only holds
//! the listener closures, so listeners that need their owner should capture a
//! `Weak` to it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::trace;

use crate::domain::{Card, Position, ScoreEntry};

/// Event published by the rules engine after a committed state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Phase or passing direction changed; re-query the model.
    StateUpdate,
    /// A new trick began; the leader is the model's `next_to_play`.
    TrickStart,
    /// A play was accepted.
    TrickPlay { position: Position, card: Card },
    /// The trick is complete and `position` collects it.
    TrickCollected { position: Position },
    /// A round was scored.
    ScoreUpdate {
        entry: ScoreEntry,
        moonshooter: Option<Position>,
    },
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::StateUpdate => EventKind::StateUpdate,
            GameEvent::TrickStart => EventKind::TrickStart,
            GameEvent::TrickPlay { .. } => EventKind::TrickPlay,
            GameEvent::TrickCollected { .. } => EventKind::TrickCollected,
            GameEvent::ScoreUpdate { .. } => EventKind::ScoreUpdate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    StateUpdate,
    TrickStart,
    TrickPlay,
    TrickCollected,
    ScoreUpdate,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::StateUpdate,
        EventKind::TrickStart,
        EventKind::TrickPlay,
        EventKind::TrickCollected,
        EventKind::ScoreUpdate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::StateUpdate => "stateupdate",
            EventKind::TrickStart => "trickstart",
            EventKind::TrickPlay => "trickplay",
            EventKind::TrickCollected => "trickcollected",
            EventKind::ScoreUpdate => "scoreupdate",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Listener = Arc<dyn Fn(&GameEvent) + Send + Sync>;

struct Registration {
    id: u64,
    kind: EventKind,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Registration>>,
}

impl Registry {
    fn remove(&self, id: u64) {
        self.listeners.lock().retain(|r| r.id != id);
    }
}

/// Ordered publish/subscribe registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Registry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind`. Listeners of one kind run in registration order.
    pub fn subscribe<F>(&self, kind: EventKind, listener: F) -> Subscription
    where
        F: Fn(&GameEvent) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.listeners.lock().push(Registration {
            id,
            kind,
            listener: Arc::new(listener),
        });
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver `event` to every listener of its kind.
    ///
    /// Listeners are snapshotted first, so a listener may subscribe, unsubscribe or
    /// trigger a nested emit without deadlocking.
    pub fn emit(&self, event: &GameEvent) {
        let kind = event.kind();
        let listeners: Vec<Listener> = self
            .registry
            .listeners
            .lock()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| Arc::clone(&r.listener))
            .collect();

        trace!(event = %kind, listeners = listeners.len(), "emitting");
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.registry
            .listeners
            .lock()
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }
}

/// Disposer for one registered listener; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    registry: Weak<Registry>,
    id: u64,
}

impl Subscription {
    /// Unsubscribe now. Equivalent to dropping the handle.
    pub fn dispose(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
