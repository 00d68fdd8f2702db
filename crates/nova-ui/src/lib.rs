//! Controller for the Nova in-game web UI.
//!
//! Host messages drive a timed progress bar, a coordinate entry panel and a
//! clipboard relay. Results travel back to the host as JSON callbacks:
//!
//! - [`message`] / [`router`]: typed host messages and their dispatch
//! - [`progress`]: the sampled progress bar timer
//! - [`coords`]: coordinate parsing and the entry panel state machine
//! - [`callback`]: outbound `POST https://<resource>/<name>` channel
//! - [`controller`]: [`UiController`], which owns all mutable UI state

pub mod callback;
pub mod clipboard;
pub mod controller;
pub mod coords;
pub mod escape;
pub mod event;
pub mod message;
pub mod progress;
pub mod router;
pub mod surface;

#[cfg(test)]
pub(crate) mod test_support;

pub use callback::{CallbackChannel, CallbackName, HostCallback, TpcdsResult};
pub use clipboard::{ClipboardRelay, ClipboardSink, SystemClipboard};
pub use controller::{UiBindings, UiController};
pub use coords::{parse_coordinates, Coordinate, CoordinatePanel, PanelState, SubmitOutcome};
pub use escape::escape_html;
pub use event::{Key, KeyEvent, KeyOutcome, KeyPhase, KeyTarget, Propagation, UiEvent};
pub use message::InboundMessage;
pub use progress::{fill_percent, ProgressTimer};
pub use router::{route, MessageHandler};
pub use surface::{PanelSurface, ProgressSurface};
