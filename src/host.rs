//! Host context handles
//!
//! The host application owns a live handle through which capabilities are
//! invoked. The widget only ever reads it: it observes the host root for
//! replacements and keeps a weak binding to the latest one.

mod binding;
mod logging;
mod rest;
mod root;

#[cfg(test)]
pub mod testing;

pub use binding::HandleBinding;
pub use logging::LoggingHandle;
pub use rest::RestHostHandle;
pub use root::HostRoot;

use crate::bridge::BridgeFault;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// The host's capability-invocation surface
#[async_trait]
pub trait HostHandle: Send + Sync {
    /// Invoke `domain.service` with `data`, returning the host's reply
    ///
    /// # Errors
    ///
    /// Returns a [`BridgeFault`] when the call cannot be delivered or the
    /// host rejects it.
    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        data: Value,
    ) -> Result<Value, BridgeFault>;
}

/// How handles are passed around; identity is the allocation
pub type SharedHandle = Arc<dyn HostHandle>;

/// Whether two handles are the same object
pub fn same_handle(a: &SharedHandle, b: &SharedHandle) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
