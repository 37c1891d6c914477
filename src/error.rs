//! Error taxonomy for panel operations

use thiserror::Error;

/// Errors surfaced by [`crate::host::PanelHost`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PanelError {
    /// The host surface has no usable area, so a resting offset cannot
    /// be computed. Raised by `attach` before anything is mutated.
    #[error("host surface has degenerate geometry ({width}x{height})")]
    InvalidHostGeometry { width: f32, height: f32 },

    /// A gesture or animation operation arrived with no attached child.
    /// Any driver handle from a previous attachment is stale and was
    /// discarded when the attachment was replaced or removed.
    #[error("no attached child; the previous animation driver is stale")]
    StaleAnimationHandle,
}
