//! Synchronous publish/subscribe between the game and its views.
//!
//! Handlers run on the publishing thread, in subscription order, before
//! `publish` returns. There is no queue and no reentrancy guard.

use crate::Grid;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Messages sent from the game to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The board changed; carries the full grid.
    BoardUpdated {
        /// Rows of the board.
        grid: Grid,
    },
    /// The game ended.
    GameOver {
        /// Winner's display name, `None` for a draw.
        winner: Option<String>,
    },
}

/// Receives game events.
pub trait GameObserver {
    /// Handles one event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("subscription #{}", _0)]
pub struct SubscriptionId(u64);

/// Ordered list of observers.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(SubscriptionId, Box<dyn GameObserver>)>,
    next_id: u64,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer after all existing ones.
    #[instrument(skip_all)]
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(observer)));
        debug!(%id, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if it was not subscribed.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Number of subscribed observers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers `event` to every observer in subscription order.
    pub fn publish(&mut self, event: &GameEvent) {
        trace!(?event, subscribers = self.subscribers.len(), "Publishing event");
        for (_, observer) in &mut self.subscribers {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
