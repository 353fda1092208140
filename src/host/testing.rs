//! Mock host handles for testing

use super::HostHandle;
use crate::bridge::BridgeFault;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// ============================================================================
// Mock Handle
// ============================================================================

/// Handle that replies from a queue and records every call.
/// An empty queue answers with an empty object.
#[allow(dead_code)]
pub struct MockHandle {
    replies: Mutex<VecDeque<Result<Value, BridgeFault>>>,
    /// Record of all calls made: (domain, service, data)
    pub calls: Mutex<Vec<(String, String, Value)>>,
}

#[allow(dead_code)]
impl MockHandle {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_response(&self, reply: Value) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    /// Queue a fault
    pub fn queue_fault(&self, fault: BridgeFault) {
        self.replies.lock().unwrap().push_back(Err(fault));
    }

    pub fn recorded_calls(&self) -> Vec<(String, String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// Prompts of all recorded calls
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(_, _, data)| data.get("prompt").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }

    fn record_and_reply(&self, domain: &str, service: &str, data: Value) -> Result<Value, BridgeFault> {
        self.calls
            .lock()
            .unwrap()
            .push((domain.to_string(), service.to_string(), data));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }
}

impl Default for MockHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostHandle for MockHandle {
    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        data: Value,
    ) -> Result<Value, BridgeFault> {
        self.record_and_reply(domain, service, data)
    }
}

// ============================================================================
// Gated Mock Handle (for in-flight assertions)
// ============================================================================

/// Handle that parks each call until the test releases it
pub struct GatedMockHandle {
    pub inner: MockHandle,
    /// Notified when a call starts
    pub call_started: Arc<Notify>,
    /// Notify once per call to let it finish
    pub release: Arc<Notify>,
}

impl GatedMockHandle {
    pub fn new() -> Self {
        Self {
            inner: MockHandle::new(),
            call_started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl HostHandle for GatedMockHandle {
    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        data: Value,
    ) -> Result<Value, BridgeFault> {
        self.call_started.notify_one();
        self.release.notified().await;
        self.inner.record_and_reply(domain, service, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_mock_handle_replies_in_order() {
        let mock = MockHandle::new();
        mock.queue_response(json!({"response": "one"}));
        mock.queue_fault(BridgeFault::host("two"));

        assert_eq!(
            mock.call_service("d", "s", json!({"prompt": "a"})).await.unwrap(),
            json!({"response": "one"})
        );
        assert!(mock.call_service("d", "s", json!({"prompt": "b"})).await.is_err());
        assert_eq!(
            mock.call_service("d", "s", json!({})).await.unwrap(),
            json!({})
        );
        assert_eq!(mock.recorded_prompts(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_gated_handle_waits_for_release() {
        let gated = Arc::new(GatedMockHandle::new());
        let task = {
            let gated = gated.clone();
            tokio::spawn(async move { gated.call_service("d", "s", json!({})).await })
        };

        tokio::time::timeout(Duration::from_secs(1), gated.call_started.notified())
            .await
            .expect("call should start");
        assert!(!task.is_finished());

        gated.release.notify_one();
        assert!(task.await.unwrap().is_ok());
    }
}
