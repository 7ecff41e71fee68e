//! Typed dependency injection for descendants.
//!
//! Rather than threading the modal control handle through every intermediate
//! layer, the host's owner provides it once in a [`ContextRegistry`] and any
//! descendant looks it up by type. The well-known key for the control API is
//! the `Rc<dyn ModalControl>` type itself.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
};

use crate::error::{Error, Result};

/// A registry of values keyed by their type, passed down the component tree.
#[derive(Default)]
pub struct ContextRegistry {
    /// Provided values, boxed by type id.
    entries: HashMap<TypeId, Box<dyn Any>>,
}

impl ContextRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide a value for type `T`, replacing any previous value of the
    /// same type.
    pub fn provide<T: Clone + 'static>(&mut self, value: T) {
        self.entries.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Look up a value by type.
    pub fn get<T: Clone + 'static>(&self) -> Option<T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
    }

    /// Look up a value by type, erroring when it was never provided.
    pub fn require<T: Clone + 'static>(&self) -> Result<T> {
        self.get::<T>()
            .ok_or_else(|| Error::MissingContext(type_name::<T>().to_string()))
    }
}
