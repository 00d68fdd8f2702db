use std::sync::{Arc, Mutex};

use nova_ui::UiEvent;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::ipc::parse_ipc_body;

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: Arc<Mutex<Vec<UiEvent>>>,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        push_ipc_body(&events, body);
    })
}

/// Decode `body` and queue it. Malformed bodies are dropped.
fn push_ipc_body(events: &Mutex<Vec<UiEvent>>, body: &str) {
    let Some(event) = parse_ipc_body(body) else {
        warn!(body_len = body.len(), "IPC message rejected: not a UI event");
        return;
    };
    debug!(?event, "IPC event");
    if let Ok(mut events) = events.lock() {
        events.push(event);
    }
}
