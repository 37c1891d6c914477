//! Runtime module - winit/platform integration
//!
//! Platform-specific code for the demo shell:
//! - `app` - ApplicationHandler, window management and rendering

pub mod app;

pub use app::App;
