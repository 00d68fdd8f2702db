use serde::{Deserialize, Serialize};

use crate::coords::Coordinate;

/// Callback names understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackName {
    /// Outcome of the coordinate panel.
    TpcdsResult,
    /// Request to dismiss the whole UI surface.
    CloseUi,
}

impl CallbackName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackName::TpcdsResult => "tpcds_result",
            CallbackName::CloseUi => "closeUI",
        }
    }
}

/// Payload of `tpcds_result`: a coordinate or `{"cancelled": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TpcdsResult {
    Coordinates(Coordinate),
    Cancelled { cancelled: bool },
}

impl TpcdsResult {
    pub fn cancelled() -> Self {
        TpcdsResult::Cancelled { cancelled: true }
    }
}

impl From<Coordinate> for TpcdsResult {
    fn from(coordinate: Coordinate) -> Self {
        TpcdsResult::Coordinates(coordinate)
    }
}
