use crate::compliance::domain::Identified;
use std::collections::HashMap;
use uuid::Uuid;

/// An id-indexed collection that preserves server ordering.
///
/// Lists arrive sorted by the server and the client must not reorder them,
/// so ordering lives in `order` while `records` gives O(1) reconciliation
/// by id after updates and deletes.
#[derive(Debug, Clone)]
pub struct IndexedCollection<T> {
    order: Vec<Uuid>,
    records: HashMap<Uuid, T>,
}

impl<T> Default for IndexedCollection<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }
}

impl<T: Identified> IndexedCollection<T> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }

    /// Replaces the whole collection with a fresh server payload,
    /// keeping the payload's order verbatim.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.order.clear();
        self.records.clear();
        for item in items {
            let id = item.id();
            if self.records.insert(id, item).is_none() {
                self.order.push(id);
            }
        }
    }

    /// Patches an existing record in place. Returns false when the id is
    /// not part of the collection (e.g. the row lives on another page).
    pub fn patch(&mut self, item: T) -> bool {
        let id = item.id();
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Inserts a new record at the front of the list.
    pub fn insert_front(&mut self, item: T) {
        let id = item.id();
        if self.records.insert(id, item).is_none() {
            self.order.insert(0, id);
        }
    }

    /// Removes a record by id. Returns the removed record, if present.
    pub fn remove(&mut self, id: Uuid) -> Option<T> {
        let removed = self.records.remove(&id);
        if removed.is_some() {
            self.order.retain(|entry| *entry != id);
        }
        removed
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Records in server order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }
}
