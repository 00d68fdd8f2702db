//! Outbound callbacks from the UI to the host.
//!
//! Each callback is an HTTP `POST https://<resource>/<name>` with a JSON
//! body; the host answers with JSON.

mod channel;
mod resource;
mod result;


use async_trait::async_trait;
use nova_common::CallbackError;

pub use channel::CallbackChannel;
pub use resource::{resolve_resource_name, FALLBACK_RESOURCE, RESOURCE_ENV};
pub use result::{CallbackName, TpcdsResult};

/// Anything that can deliver a named callback to the host.
#[async_trait]
pub trait HostCallback: Send + Sync {
    async fn invoke(
        &self,
        name: &str,
        payload: serde_json::Value,
    ) -> Result<serde_json::Value, CallbackError>;
}
