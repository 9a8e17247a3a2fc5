//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::tool::{Tool, ToolConfig, ToolError};
use serde::{Deserialize, Serialize};

/// Tool defaults applied when the pad starts.
///
/// These seed the initial [`ToolConfig`]; script control events can change
/// any of them between gestures at runtime.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Tool selected at startup (brush, line, rectangle, circle, ellipse, polygon)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Stroke color - either a named color (red, green, blue, yellow, orange,
    /// pink, white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Fill color, carried as surface style state
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Side count for the polygon tool (minimum 3, never clamped)
    #[serde(default = "default_polygon_sides")]
    pub polygon_sides: u32,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
            line_width: default_line_width(),
            polygon_sides: default_polygon_sides(),
        }
    }
}

impl ToolsConfig {
    /// Builds the runtime tool settings from the configured defaults.
    ///
    /// # Errors
    /// Returns [`ToolError::InvalidSideCount`] when the polygon side count is
    /// below 3. The count is surfaced to the caller, never clamped.
    pub fn to_tool_config(&self) -> Result<ToolConfig, ToolError> {
        let config = ToolConfig {
            tool: self.default_tool,
            stroke_color: self.stroke_color.to_color(),
            fill_color: self.fill_color.to_color(),
            line_width: self.line_width,
            polygon_sides: self.polygon_sides,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Canvas dimensions.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

/// PNG export settings.
///
/// Used when the binary exports without an explicit output path.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory to save drawings to. Supports a leading `~`.
    /// Defaults to `<pictures>/Inkpad`.
    #[serde(default)]
    pub directory: Option<String>,

    /// Filename template (supports chrono format specifiers).
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format extension. Only "png" is supported.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: default_filename_template(),
            format: default_format(),
        }
    }
}

fn default_tool() -> Tool {
    Tool::Brush
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> f64 {
    2.0
}

fn default_polygon_sides() -> u32 {
    6
}

fn default_canvas_size() -> u32 {
    600
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_format() -> String {
    "png".to_string()
}
