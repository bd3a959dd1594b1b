//! Generic in-memory storage for domain entities.
//!
//! Stores are keyed by generated ids; id generation is injected as a
//! closure so each store can run its own sequence.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any domain entity must implement to be managed by [`MemoryStore`].
pub trait Entity: Clone {
    type Id: Eq + Hash + Clone + Display + Debug;
    type CreateParams: Debug;

    /// Get the ID of the entity.
    #[allow(dead_code)]
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the store-assigned ID and params.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Self;
}

/// A synchronous in-memory store.
pub struct MemoryStore<T: Entity> {
    items: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id>,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new(next_id_fn: impl Fn() -> T::Id + 'static) -> Self {
        Self {
            items: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    /// Creates and stores a new entity, returning its assigned id.
    pub fn create(&mut self, params: T::CreateParams) -> T::Id {
        let id = (self.next_id_fn)();
        let item = T::from_create_params(id.clone(), params);
        self.items.insert(id.clone(), item);
        id
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    #[allow(dead_code)]
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.items.remove(id)
    }

    /// Iterates over all stored entities in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
