//! Windowed mode.
//!
//! Implements `winit::application::ApplicationHandler` to host the WebView
//! and pump host messages, IPC events and queued scripts on the UI thread.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;

pub use core::NovaApp;
