//! Configuration file support for inkpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkpad/config.toml`. Settings
//! include tool defaults, canvas dimensions, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, ExportConfig, ToolsConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [tools]
/// default_tool = "brush"
/// stroke_color = "black"
/// line_width = 2.0
/// polygon_sides = 6
///
/// [canvas]
/// width = 600
/// height = 600
///
/// [export]
/// directory = "~/Pictures/Inkpad"
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Tool defaults (active tool, colors, line width, polygon sides)
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// PNG export preferences
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged. The polygon side count is the exception: it is checked in
    /// [`Config::load`] and surfaced as a hard error, never clamped.
    ///
    /// Validated ranges:
    /// - `line_width`: 1.0 - 20.0
    /// - `canvas.width`, `canvas.height`: 16 - 4096
    /// - `export.format`: "png" only
    fn validate_and_clamp(&mut self) {
        // Line width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.tools.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 1.0-20.0 range",
                self.tools.line_width
            );
            self.tools.line_width = self.tools.line_width.clamp(1.0, 20.0);
        }

        // Canvas dimensions: 16 - 4096
        if !(16..=4096).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 4096);
        }
        if !(16..=4096).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 4096);
        }

        // Export format: PNG is the only codec shipped
        if self.export.format.to_lowercase() != "png" {
            log::warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/inkpad/config.toml`. If the file doesn't exist, returns a
    /// Config with default values. Loaded values are validated: out-of-range
    /// numbers are clamped with a warning, while an invalid polygon side
    /// count fails the load outright.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    /// - `polygon_sides` is below 3
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Clamp soft ranges, then surface the hard error
        config.validate_and_clamp();
        config
            .tools
            .to_tool_config()
            .with_context(|| format!("Invalid [tools] section in {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
