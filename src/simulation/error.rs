//! Error type for the simulation core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass sits on the anchor, so the spring direction is undefined
    #[error("degenerate geometry: mass is {distance:e} from the anchor")]
    DegenerateGeometry { distance: f64 },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
