//! Capability bridge
//!
//! Pass-through adapter from the session controller to whatever host handle
//! the widget is currently bound to.

mod error;
mod payload;

pub use error::{BridgeFault, FaultKind, FAULT_FALLBACK_MESSAGE};
pub use payload::{query_data, QueryPayload};

use crate::config::QueryTarget;
use crate::host::HandleBinding;
use std::sync::Arc;

/// Invokes the backend `query` capability through the bound host handle
pub struct CapabilityBridge {
    target: QueryTarget,
    binding: Arc<HandleBinding>,
}

impl CapabilityBridge {
    pub fn new(target: QueryTarget, binding: Arc<HandleBinding>) -> Self {
        Self { target, binding }
    }

    pub fn target(&self) -> &QueryTarget {
        &self.target
    }

    pub fn binding(&self) -> &Arc<HandleBinding> {
        &self.binding
    }

    /// Run one query. The handle is resolved at call time, so a rebinding
    /// that happened after attachment is always honoured.
    ///
    /// # Errors
    ///
    /// Returns an unbound fault when no live handle is bound, or the fault
    /// reported by the handle.
    pub async fn query(&self, prompt: &str) -> Result<QueryPayload, BridgeFault> {
        let handle = self.binding.current().ok_or_else(BridgeFault::unbound)?;
        let data = query_data(prompt, self.target.provider.as_deref(), self.target.debug);
        let value = handle
            .call_service(&self.target.domain, &self.target.service, data)
            .await?;
        Ok(QueryPayload::from_value(&value))
    }
}
