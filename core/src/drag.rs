//! Drag identity and gesture reporting for rendered items.
//!
//! # Design
//! A `DraggableItem` is a thin adapter: the todo id, whether the host has
//! finished mounting it, and whether it is currently being dragged. It owns
//! no list state. `DragLayer` holds one wrapper per item in display order and
//! turns pointer or keyboard input into `DragEnd` reports, which is all the
//! list controller ever sees.
//!
//! Wrappers refuse to start a drag until `on_mounted` has been called, so a
//! handle can never report a gesture before its handlers are attached.

use tracing::debug;
use uuid::Uuid;

use crate::types::Todo;

/// Opacity of an item while it is being dragged.
pub const DRAGGING_OPACITY: f32 = 0.5;

/// A completed drag gesture: move `dragged` to where `target` sits.
///
/// `target` is `None` when the item was dropped outside any item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub dragged: Uuid,
    pub target: Option<Uuid>,
}

impl DragEnd {
    pub fn onto(dragged: Uuid, target: Uuid) -> Self {
        Self {
            dragged,
            target: Some(target),
        }
    }

    pub fn outside(dragged: Uuid) -> Self {
        Self { dragged, target: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraggableItem {
    id: Uuid,
    mounted: bool,
    dragging: bool,
}

impl DraggableItem {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            mounted: false,
            dragging: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Host signal that the item's handle is attached.
    pub fn on_mounted(&mut self) {
        self.mounted = true;
    }

    pub fn opacity(&self) -> f32 {
        if self.dragging {
            DRAGGING_OPACITY
        } else {
            1.0
        }
    }

    /// Picks the item up. Returns false if the handle is not mounted yet.
    pub fn grab(&mut self) -> bool {
        if !self.mounted {
            debug!(id = %self.id, "grab before mount ignored");
            return false;
        }
        self.dragging = true;
        true
    }

    /// Drops the item; reports a gesture only if it was being dragged.
    pub fn release(&mut self, target: Option<Uuid>) -> Option<DragEnd> {
        if !std::mem::take(&mut self.dragging) {
            return None;
        }
        Some(DragEnd {
            dragged: self.id,
            target,
        })
    }

    pub fn cancel(&mut self) {
        self.dragging = false;
    }
}

/// Direction for keyboard reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// Wrappers for a whole list, at most one of them dragging.
#[derive(Debug, Default)]
pub struct DragLayer {
    items: Vec<DraggableItem>,
    active: Option<Uuid>,
}

impl DragLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the wrappers to match `todos`, in order.
    ///
    /// Items that were already present keep their mount state; new ones start
    /// unmounted. An active drag on an item that disappeared is dropped.
    pub fn sync(&mut self, todos: &[Todo]) {
        let previous = std::mem::take(&mut self.items);
        self.items = todos
            .iter()
            .map(|todo| {
                previous
                    .iter()
                    .find(|w| w.id == todo.id)
                    .cloned()
                    .unwrap_or_else(|| DraggableItem::new(todo.id))
            })
            .collect();
        if let Some(active) = self.active {
            if self.get(active).is_none() {
                debug!(id = %active, "active drag target vanished");
                self.active = None;
            }
        }
    }

    pub fn items(&self) -> &[DraggableItem] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&DraggableItem> {
        self.items.iter().find(|w| w.id == id)
    }

    pub fn active(&self) -> Option<Uuid> {
        self.active
    }

    /// Forwards the host's mount-completion signal to every wrapper.
    pub fn on_mounted(&mut self) {
        for item in &mut self.items {
            item.on_mounted();
        }
    }

    pub fn on_item_mounted(&mut self, id: Uuid) {
        if let Some(item) = self.get_mut(id) {
            item.on_mounted();
        }
    }

    /// Starts dragging `id`. Fails while another drag is active, for unknown
    /// ids, and for unmounted wrappers.
    pub fn start(&mut self, id: Uuid) -> bool {
        if self.active.is_some() {
            debug!(%id, "drag already in progress");
            return false;
        }
        let grabbed = self.get_mut(id).is_some_and(DraggableItem::grab);
        if grabbed {
            self.active = Some(id);
        }
        grabbed
    }

    /// Ends the active drag over `over`. Targets that are not items of this
    /// layer count as a drop outside the list.
    pub fn finish(&mut self, over: Option<Uuid>) -> Option<DragEnd> {
        let active = self.active.take()?;
        let target = over.filter(|id| self.get(*id).is_some());
        self.get_mut(active)?.release(target)
    }

    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            if let Some(item) = self.get_mut(active) {
                item.cancel();
            }
        }
    }

    /// Keyboard reordering: reports moving `id` onto its neighbour.
    ///
    /// Returns `None` at the ends of the list, for unknown or unmounted items,
    /// and while a pointer drag is active.
    pub fn step(&self, id: Uuid, step: Step) -> Option<DragEnd> {
        if self.active.is_some() {
            return None;
        }
        let index = self.items.iter().position(|w| w.id == id)?;
        if !self.items[index].mounted {
            return None;
        }
        let neighbour = match step {
            Step::Up => index.checked_sub(1)?,
            Step::Down => index + 1,
        };
        let target = self.items.get(neighbour)?;
        Some(DragEnd::onto(id, target.id))
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut DraggableItem> {
        self.items.iter_mut().find(|w| w.id == id)
    }
}
