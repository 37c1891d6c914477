//! Command-line argument parsing for the demo shell

use clap::Parser;

use crate::config::PanelConfig;
use crate::geometry::PanelState;

/// Slide-up panel demo
#[derive(Parser, Debug)]
#[command(name = "slidepanel", version, about = "A draggable slide-up panel demo")]
pub struct CliArgs {
    /// Disable live drag tracking; drags only signal the target state
    #[arg(long)]
    pub non_interactive: bool,

    /// Slide animation duration in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration_ms: Option<u64>,

    /// Start with the panel expanded instead of collapsed
    #[arg(long)]
    pub expanded: bool,
}

impl CliArgs {
    /// Apply CLI overrides on top of the persisted config.
    pub fn apply_to(&self, config: &mut PanelConfig) {
        if self.non_interactive {
            config.interactable = false;
        }
        if let Some(ms) = self.duration_ms {
            config.slide_duration_ms = ms;
        }
    }

    /// Initial resting state for the attached panel.
    pub fn initial_state(&self) -> PanelState {
        if self.expanded {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }
}
