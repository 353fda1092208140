//! Logging wrapper for host handles

use super::{HostHandle, SharedHandle};
use crate::bridge::BridgeFault;
use async_trait::async_trait;
use serde_json::Value;

/// Logs timing and outcome of every capability call
pub struct LoggingHandle {
    inner: SharedHandle,
}

impl LoggingHandle {
    pub fn new(inner: SharedHandle) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HostHandle for LoggingHandle {
    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        data: Value,
    ) -> Result<Value, BridgeFault> {
        let start = std::time::Instant::now();
        let result = self.inner.call_service(domain, service, data).await;
        let duration = start.elapsed();

        match &result {
            Ok(_) => {
                tracing::info!(
                    domain,
                    service,
                    duration_ms = %duration.as_millis(),
                    "Service call completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    domain,
                    service,
                    duration_ms = %duration.as_millis(),
                    error = %e,
                    "Service call failed"
                );
            }
        }

        result
    }
}
