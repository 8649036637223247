//! Ordered list controller with optimistic reordering.
//!
//! # Design
//! `TodoList` owns the working sequence for one page view. A drag gesture is
//! applied as a two-phase mutation:
//!
//! 1. snapshot the current sequence,
//! 2. apply the moved sequence locally,
//! 3. submit the new id order,
//! 4. on rejection restore the snapshot.
//!
//! Steps 1 and 2 happen in `begin_reorder`, which hands back a
//! `ReorderTicket`; the host settles it with `confirm` or `revert` once the
//! request is done. `handle_drag_end` runs the whole cycle through a
//! `TodoActions`. Only one reorder may be pending: gestures arriving in
//! between are answered with `Busy` and change nothing.
//!
//! `initialize` always wins. It replaces the sequence and forgets any pending
//! reorder, so a ticket issued before it settles as a no-op.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::actions::TodoActions;
use crate::drag::DragEnd;
use crate::error::ActionError;
use crate::transport::Transport;
use crate::types::Todo;

/// Moves the element at `from` to index `to`, shifting the elements between.
///
/// Panics if either index is out of bounds.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Handle for one in-flight reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderTicket {
    generation: u64,
    ids: Vec<Uuid>,
}

impl ReorderTicket {
    /// The complete order to submit to the store.
    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }
}

/// Result of the first phase of a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing to do: dropped outside, onto itself, or an unknown id.
    Ignored,
    /// Another reorder is still pending.
    Busy,
    /// The new order is applied locally and waiting for the store.
    Pending(ReorderTicket),
}

/// Result of a full gesture cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    Ignored,
    Busy,
    Confirmed,
    /// The store rejected the order; the previous one is back in place.
    Reverted(ActionError),
}

#[derive(Debug)]
struct PendingReorder {
    generation: u64,
    snapshot: Vec<Todo>,
}

#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<Todo>,
    pending: Option<PendingReorder>,
    generation: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: &[Todo]) -> Self {
        let mut list = Self::new();
        list.initialize(items);
        list
    }

    /// Replaces the working sequence with a fresh authoritative one.
    pub fn initialize(&mut self, items: &[Todo]) {
        if self.pending.take().is_some() {
            debug!("authoritative reload supersedes pending reorder");
        }
        self.generation += 1;
        self.items = items.to_vec();
    }

    /// The working sequence, in display order.
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.items.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    pub fn is_reordering(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies a gesture locally and returns what must be sent to the store.
    pub fn begin_reorder(&mut self, gesture: DragEnd) -> DragOutcome {
        let Some(target) = gesture.target.filter(|t| *t != gesture.dragged) else {
            return DragOutcome::Ignored;
        };
        if self.pending.is_some() {
            debug!(dragged = %gesture.dragged, "reorder already pending");
            return DragOutcome::Busy;
        }
        let (Some(from), Some(to)) = (self.position(gesture.dragged), self.position(target)) else {
            debug!(dragged = %gesture.dragged, %target, "gesture refers to unknown item");
            return DragOutcome::Ignored;
        };

        let moved = move_item(&self.items, from, to);
        let snapshot = std::mem::replace(&mut self.items, moved);
        self.generation += 1;
        self.pending = Some(PendingReorder {
            generation: self.generation,
            snapshot,
        });
        debug!(from, to, "reorder applied locally");

        DragOutcome::Pending(ReorderTicket {
            generation: self.generation,
            ids: self.ids(),
        })
    }

    /// Keeps the applied order. Returns false for stale or settled tickets.
    pub fn confirm(&mut self, ticket: &ReorderTicket) -> bool {
        self.take_pending(ticket).is_some()
    }

    /// Restores the order from before the gesture. Returns false for stale or
    /// settled tickets, so reverting twice has no further effect.
    pub fn revert(&mut self, ticket: &ReorderTicket) -> bool {
        match self.take_pending(ticket) {
            Some(pending) => {
                self.items = pending.snapshot;
                true
            }
            None => false,
        }
    }

    /// Runs a gesture end to end: apply, submit, then keep or roll back.
    pub fn handle_drag_end<T: Transport>(&mut self, gesture: DragEnd, actions: &TodoActions<T>) -> ReorderOutcome {
        let ticket = match self.begin_reorder(gesture) {
            DragOutcome::Ignored => return ReorderOutcome::Ignored,
            DragOutcome::Busy => return ReorderOutcome::Busy,
            DragOutcome::Pending(ticket) => ticket,
        };
        match actions.reorder(ticket.ids()) {
            Ok(()) => {
                self.confirm(&ticket);
                ReorderOutcome::Confirmed
            }
            Err(err) => {
                if self.revert(&ticket) {
                    warn!(error = %err, "reorder rejected, previous order restored");
                }
                ReorderOutcome::Reverted(err)
            }
        }
    }

    fn take_pending(&mut self, ticket: &ReorderTicket) -> Option<PendingReorder> {
        match &self.pending {
            Some(pending) if pending.generation == ticket.generation => self.pending.take(),
            _ => None,
        }
    }
}
