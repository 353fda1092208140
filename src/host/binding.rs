//! Weak association between a widget and the host's live handle

use super::SharedHandle;
use crate::host::HostHandle;
use std::sync::{Arc, PoisonError, RwLock, Weak};

/// The widget's reference to the host handle.
///
/// Held weakly: the host owns the handle, and a replaced handle the host has
/// let go of is never kept alive here.
#[derive(Default)]
pub struct HandleBinding {
    current: RwLock<Option<Weak<dyn HostHandle>>>,
}

impl HandleBinding {
    pub fn new(handle: &SharedHandle) -> Self {
        let binding = Self::default();
        binding.bind(handle);
        binding
    }

    pub fn bind(&self, handle: &SharedHandle) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::downgrade(handle));
    }

    /// Rebind only when `handle` is a different object. Returns whether the
    /// binding changed.
    pub fn rebind_if_changed(&self, handle: &SharedHandle) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let unchanged = current
            .as_ref()
            .is_some_and(|weak| std::ptr::addr_eq(weak.as_ptr(), Arc::as_ptr(handle)));
        if unchanged {
            return false;
        }
        *current = Some(Arc::downgrade(handle));
        true
    }

    pub fn is_bound_to(&self, handle: &SharedHandle) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|weak| std::ptr::addr_eq(weak.as_ptr(), Arc::as_ptr(handle)))
    }

    /// The bound handle, if it is still alive
    pub fn current(&self) -> Option<SharedHandle> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
    }

    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl std::fmt::Debug for HandleBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandleBinding")
            .field("live", &self.current().is_some())
            .finish()
    }
}
