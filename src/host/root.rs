//! The host application's root element

use super::SharedHandle;
use std::sync::Arc;
use tokio::sync::watch;

/// Owner of the live host handle.
///
/// The host replaces its handle whenever its own state changes; observers
/// get a change notification per replacement, the way an attribute observer
/// would on the host's root element.
#[derive(Clone)]
pub struct HostRoot {
    handle_tx: Arc<watch::Sender<Option<SharedHandle>>>,
}

impl HostRoot {
    /// A root that has not exposed a handle yet
    pub fn new() -> Self {
        let (handle_tx, _) = watch::channel(None);
        Self {
            handle_tx: Arc::new(handle_tx),
        }
    }

    pub fn with_handle(handle: SharedHandle) -> Self {
        let root = Self::new();
        root.publish(handle);
        root
    }

    /// Host side: expose a new handle
    pub fn publish(&self, handle: SharedHandle) {
        self.handle_tx.send_replace(Some(handle));
    }

    /// Host side: withdraw the handle
    pub fn withdraw(&self) {
        self.handle_tx.send_replace(None);
    }

    pub fn handle(&self) -> Option<SharedHandle> {
        self.handle_tx.borrow().clone()
    }

    /// Subscribe to future replacements. The current value counts as seen.
    pub fn observe(&self) -> watch::Receiver<Option<SharedHandle>> {
        self.handle_tx.subscribe()
    }
}

impl Default for HostRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HostRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostRoot")
            .field("has_handle", &self.handle_tx.borrow().is_some())
            .finish()
    }
}
