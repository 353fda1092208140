//! The page the widget is attached to

use super::registry::ComponentRegistry;
use crate::host::HostRoot;
use crate::widget::FloatingWidget;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tokio_util::sync::CancellationToken;

/// One page lifetime: its registered definitions, the host's root element
/// and the body slot holding the floating widget.
#[derive(Debug, Default)]
pub struct Document {
    registry: ComponentRegistry,
    root: RwLock<Option<HostRoot>>,
    body: Mutex<Option<Arc<FloatingWidget>>>,
    discarded: CancellationToken,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: HostRoot) -> Self {
        let document = Self::new();
        document.set_root(root);
        document
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Host side: mount the application root
    pub fn set_root(&self, root: HostRoot) {
        *self.root.write().unwrap_or_else(PoisonError::into_inner) = Some(root);
    }

    pub fn root(&self) -> Option<HostRoot> {
        self.root
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The floating widget, if one is attached
    pub fn attached(&self) -> Option<Arc<FloatingWidget>> {
        self.body().clone()
    }

    pub fn is_discarded(&self) -> bool {
        self.discarded.is_cancelled()
    }

    /// Fires when the page goes away
    pub fn discarded(&self) -> CancellationToken {
        self.discarded.clone()
    }

    /// Tear down the page: stops polling and observers, detaches the widget
    pub fn discard(&self) {
        self.discarded.cancel();
        self.body().take();
    }

    pub(crate) fn body(&self) -> MutexGuard<'_, Option<Arc<FloatingWidget>>> {
        self.body.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
