//! Dispatch of host messages to their handlers.

use tracing::debug;

use crate::message::InboundMessage;

/// Receiver of routed host messages.
pub trait MessageHandler {
    fn show_progressbar(&mut self, label: &str, duration_ms: f64);
    fn hide_progressbar(&mut self);
    fn open_tpcds(&mut self);
    fn copy_to_clipboard(&mut self, text: Option<&str>);
}

/// Invoke the handler matching `message.action`. Unknown actions are dropped.
pub fn route<H: MessageHandler + ?Sized>(handler: &mut H, message: &InboundMessage) {
    match message {
        InboundMessage::Progressbar { label, duration } => {
            handler.show_progressbar(label, *duration);
        }
        InboundMessage::HideProgressbar => handler.hide_progressbar(),
        InboundMessage::OpenTpcds => handler.open_tpcds(),
        InboundMessage::CopyToClipboard { text } => {
            handler.copy_to_clipboard(text.as_deref());
        }
        InboundMessage::Unknown => {
            debug!("host message ignored: unknown action");
        }
    }
}

/// Parse and route a raw JSON message. Returns `false` if it was malformed.
pub fn route_json<H: MessageHandler + ?Sized>(handler: &mut H, raw: &str) -> bool {
    match InboundMessage::from_json(raw) {
        Some(message) => {
            debug!(action = ?message.action(), "host message dispatched");
            route(handler, &message);
            true
        }
        None => {
            debug!(body_len = raw.len(), "host message ignored: failed to parse");
            false
        }
    }
}
