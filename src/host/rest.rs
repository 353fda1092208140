//! Host handle backed by the home-automation server's REST API

use super::HostHandle;
use crate::bridge::BridgeFault;
use crate::config::HassConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Calls services over `POST /api/services/<domain>/<service>?return_response`
pub struct RestHostHandle {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RestHostHandle {
    pub fn new(config: &HassConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Handle for the server named by `HASS_URL` / `HASS_TOKEN`
    pub fn from_env() -> Self {
        Self::new(&HassConfig::from_env())
    }

    fn service_url(&self, domain: &str, service: &str) -> String {
        format!(
            "{}/api/services/{domain}/{service}?return_response",
            self.base_url
        )
    }
}

/// The server wraps the capability's reply in `service_response`
fn unwrap_service_response(mut body: Value) -> Value {
    match body.get_mut("service_response") {
        Some(inner) => inner.take(),
        None => body,
    }
}

#[async_trait]
impl HostHandle for RestHostHandle {
    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        data: Value,
    ) -> Result<Value, BridgeFault> {
        let mut request = self.client.post(self.service_url(domain, service)).json(&data);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                BridgeFault::transport(format!("Request timeout: {e}"))
            } else if e.is_connect() {
                BridgeFault::transport(format!("Connection failed: {e}"))
            } else {
                BridgeFault::transport(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BridgeFault::transport(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(BridgeFault::status(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        let parsed: Value = serde_json::from_str(&body).map_err(|e| {
            BridgeFault::transport(format!("Failed to parse response: {e} - body: {body}"))
        })?;
        Ok(unwrap_service_response(parsed))
    }
}
