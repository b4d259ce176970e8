//! The in-memory store: a sorted, duplicate-free collection of items.
//!
//! Every mutation rebuilds or edits the collection and re-establishes the
//! invariant (ascending by id, unique ids) before returning, so lookups can
//! always binary-search. Failed operations leave the collection untouched.

use crate::error::{Result, StockroomError};
use crate::item::Item;
use crate::search;
use crate::sort::{first_duplicate_id, sort_by_id};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
    trace: bool,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable diagnostic trace events on every operation.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Build a store from an arbitrary batch of items, sorting them and
    /// rejecting duplicate ids.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let items = sort_by_id(items);
        if let Some(id) = first_duplicate_id(&items) {
            return Err(StockroomError::DuplicateId(id));
        }
        Ok(Self {
            items,
            trace: false,
        })
    }

    /// Read-only view of the collection, always sorted ascending by id.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item, keeping the collection sorted.
    ///
    /// Fails with [`StockroomError::DuplicateId`] when the id is already
    /// present. The whole collection is re-sorted after the append rather
    /// than inserting positionally; simpler, and the result is sorted by
    /// construction.
    pub fn add(&mut self, item: Item) -> Result<()> {
        if search::find_index(&self.items, item.id).is_some() {
            return Err(StockroomError::DuplicateId(item.id));
        }

        if self.trace {
            debug!(id = item.id, "inventory: add");
        }

        let mut next = std::mem::take(&mut self.items);
        next.push(item);
        self.items = sort_by_id(next);
        Ok(())
    }

    /// Remove and return the item with the given id.
    pub fn delete_by_id(&mut self, id: i64) -> Result<Item> {
        let index = search::find_index(&self.items, id).ok_or(StockroomError::NotFound(id))?;

        if self.trace {
            debug!(id, index, "inventory: delete");
        }

        Ok(self.items.remove(index))
    }

    /// Remove and return the item at the given position, delegating to
    /// [`Inventory::delete_by_id`].
    pub fn delete_by_index(&mut self, index: usize) -> Result<Item> {
        let id = self
            .items
            .get(index)
            .map(|item| item.id)
            .ok_or(StockroomError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;
        self.delete_by_id(id)
    }

    /// Swap the item at `index` for `new_item`.
    ///
    /// The new id may only collide with the item being replaced, never with
    /// a surviving one; collisions are detected before anything is removed,
    /// so a failed replace leaves the original item in place.
    pub fn replace(&mut self, index: usize, new_item: Item) -> Result<()> {
        let old_id = self
            .items
            .get(index)
            .map(|item| item.id)
            .ok_or(StockroomError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;

        if new_item.id != old_id && search::find_index(&self.items, new_item.id).is_some() {
            return Err(StockroomError::DuplicateId(new_item.id));
        }

        if self.trace {
            debug!(index, old_id, new_id = new_item.id, "inventory: replace");
        }

        self.items.remove(index);
        self.add(new_item)
    }

    /// Position of the item with the given id, if present.
    pub fn find_by_id(&self, id: i64) -> Option<usize> {
        if self.trace {
            debug!(id, "inventory: find");
        }
        search::find_index(&self.items, id)
    }

    /// The item with the given id, if present.
    pub fn find_item(&self, id: i64) -> Option<&Item> {
        if self.trace {
            debug!(id, "inventory: find");
        }
        search::find(&self.items, id)
    }
}
