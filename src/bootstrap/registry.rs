//! Component definitions known to the page

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

/// Names of the widget definitions registered so far
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    defined: RwLock<HashSet<String>>,
}

impl ComponentRegistry {
    /// Register a definition. Returns false when it was already known.
    pub fn define(&self, name: impl Into<String>) -> bool {
        self.defined
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into())
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.defined
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(name)
    }
}
