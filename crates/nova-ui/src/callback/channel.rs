//! HTTP transport for host callbacks.

use async_trait::async_trait;
use nova_common::CallbackError;
use nova_config::CallbackConfig;
use serde_json::Value;
use tracing::{debug, error};

use super::HostCallback;

/// Posts JSON callbacks to `<scheme>://<resource>/<name>`.
pub struct CallbackChannel {
    http: reqwest::Client,
    base_url: String,
}

impl CallbackChannel {
    pub fn new(resource: &str, config: &CallbackConfig) -> Result<Self, CallbackError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| CallbackError::Client(e.to_string()))?;

        let base_url = match &config.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}://{}", config.scheme, resource),
        };

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for callback `name`.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// POST `payload` and decode the JSON reply.
    pub async fn send(&self, name: &str, payload: &Value) -> Result<Value, CallbackError> {
        let url = self.endpoint(name);
        debug!(callback = name, url = %url, "sending callback");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| CallbackError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CallbackError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| CallbackError::Decode(e.to_string()))
    }

    /// Like [`send`](Self::send), but logs failures and yields `None`.
    pub async fn call_or_none(&self, name: &str, payload: &Value) -> Option<Value> {
        match self.send(name, payload).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!(callback = name, error = %e, "callback failed");
                None
            }
        }
    }
}

#[async_trait]
impl HostCallback for CallbackChannel {
    async fn invoke(&self, name: &str, payload: Value) -> Result<Value, CallbackError> {
        self.send(name, &payload).await
    }
}
