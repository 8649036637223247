//! Item rendering and the intents a rendered item can emit.

use uuid::Uuid;

use crate::drag::{DragLayer, DraggableItem};
use crate::list::TodoList;
use crate::messages::Messages;
use crate::types::Todo;

const GRIP: char = '⠿';

/// What a user asked an item to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemIntent {
    Toggle { id: Uuid, completed: bool },
    Delete { id: Uuid },
}

/// Everything needed to draw one row.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub opacity: f32,
    /// False until the item's drag wrapper is mounted.
    pub handle_live: bool,
}

impl ItemView {
    pub fn new(todo: &Todo, wrapper: Option<&DraggableItem>) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            completed: todo.completed,
            opacity: wrapper.map_or(1.0, DraggableItem::opacity),
            handle_live: wrapper.is_some_and(DraggableItem::is_mounted),
        }
    }

    pub fn toggle_intent(&self) -> ItemIntent {
        ItemIntent::Toggle {
            id: self.id,
            completed: !self.completed,
        }
    }

    pub fn delete_intent(&self) -> ItemIntent {
        ItemIntent::Delete { id: self.id }
    }

    /// Plain-text row, e.g. `⠿ [x] Buy milk`.
    pub fn line(&self) -> String {
        let grip = if self.handle_live { GRIP } else { ' ' };
        let mark = if self.completed { 'x' } else { ' ' };
        format!("{grip} [{mark}] {}", self.title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty(&'static str),
    Items(Vec<ItemView>),
}

impl ListView {
    pub fn build(list: &TodoList, layer: &DragLayer, messages: &Messages) -> Self {
        if list.is_empty() {
            return ListView::Empty(messages.empty_list);
        }
        ListView::Items(
            list.items()
                .iter()
                .map(|todo| ItemView::new(todo, layer.get(todo.id)))
                .collect(),
        )
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            ListView::Empty(message) => vec![message.to_string()],
            ListView::Items(items) => items.iter().map(ItemView::line).collect(),
        }
    }
}
