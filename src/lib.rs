//! slidepanel - a draggable slide-up panel
//!
//! A child surface attached to a host can be dragged vertically between
//! a collapsed and an expanded resting position, either interactively
//! (tracking the pointer in real time) or non-interactively (sampled
//! only for directional intent and committed on release).
//!
//! The crate separates pure decision logic from stateful glue:
//! [`slide::step`] maps gesture samples to actions, and
//! [`host::PanelHost`] owns the attachment and applies those actions to
//! its [`animator::Animator`] and child [`host::Surface`].

pub mod animator;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod slide;
pub mod tracing;

// Re-export commonly used types
pub use animator::{Animator, Easing};
pub use config::PanelConfig;
pub use error::PanelError;
pub use geometry::{PanelState, Rect};
pub use gesture::{GesturePhase, GestureSample};
pub use host::{FrameSurface, PanelHost, Surface};
