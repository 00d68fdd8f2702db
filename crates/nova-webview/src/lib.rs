//! WebView bridge for the Nova UI.
//!
//! Wraps the `wry` crate to provide:
//! - The bundled page with the progress bar and coordinate panel elements
//! - IPC from JavaScript to Rust (host messages and key events)
//! - A DOM surface that renders controller output as queued JS snippets
//! - A host owning the WebView, draining events and flushing scripts

pub mod dom;
pub mod host;
pub mod ipc;
pub mod page;
pub mod script;

pub use dom::{DomSurface, ScriptQueue};
pub use host::WebViewHost;
pub use ipc::IPC_INIT_SCRIPT;
pub use page::render_page;
