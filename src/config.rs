//! Panel configuration persistence
//!
//! Stores user preferences in `~/.config/slidepanel/config.yaml`

use serde::{Deserialize, Serialize};

/// Configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Duration of a settle/commit transition, in milliseconds
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u64,

    /// Whether drags reposition the panel continuously (true) or only
    /// signal the final intended state (false)
    #[serde(default = "default_interactable")]
    pub interactable: bool,

    /// Demo window size in logical pixels
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

fn default_slide_duration_ms() -> u64 {
    500
}

fn default_interactable() -> bool {
    true
}

fn default_window_width() -> u32 {
    420
}

fn default_window_height() -> u32 {
    800
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: default_slide_duration_ms(),
            interactable: default_interactable(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl PanelConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
