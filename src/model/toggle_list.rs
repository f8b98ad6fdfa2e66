use std::fmt;

use super::error::StateError;

/// Identity of an item within one [`ToggleList`]. Never reused by that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    id: ItemId,
    text: String,
    done: bool,
}

impl ListItem {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn done(&self) -> bool {
        self.done
    }
}

/// Ordered list of labelled items, each carrying a `done` flag.
///
/// Display order is insertion order. Item text is fixed at creation; the
/// flag is the only mutable part of an item.
#[derive(Debug, Default)]
pub struct ToggleList {
    items: Vec<ListItem>,
    next_id: u64,
}

impl ToggleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item. Whitespace around `text` is trimmed; blank input is
    /// ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(ListItem {
            id,
            text: text.to_string(),
            done: false,
        });
        Some(id)
    }

    /// Flip the `done` flag of the item with the given id and return its new value.
    pub fn toggle(&mut self, id: ItemId) -> Result<bool, StateError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StateError::NotFound(id))?;
        item.done = !item.done;
        Ok(item.done)
    }

    pub fn remove(&mut self, index: usize) -> Result<ListItem, StateError> {
        if index >= self.items.len() {
            return Err(StateError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&ListItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet marked done.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }
}
