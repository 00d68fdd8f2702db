//! Coordinate entry: text parsing and the modal panel.

mod panel;
mod parse;

pub use panel::{CoordinatePanel, PanelState, SubmitOutcome};
pub use parse::{parse_coordinates, Coordinate};
