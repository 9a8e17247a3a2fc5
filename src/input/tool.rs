//! Drawing tool selection and per-gesture tool settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::draw::color::{BLACK, Color};

/// Minimum side count the polygon tool accepts.
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Drawing tool selection.
///
/// The active tool determines what shape is created when the user drags the
/// pointer across the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand brush - follows the pointer path (default)
    Brush,
    /// Straight line between the drag endpoints
    Line,
    /// Rectangle outline spanning the drag bounding box
    Rectangle,
    /// Circle outline - radius follows the horizontal drag distance
    Circle,
    /// Ellipse outline inscribed in the drag bounding box
    Ellipse,
    /// Regular polygon centered on the pointer
    Polygon,
}

/// Error raised when tool settings cannot produce a drawable shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Polygon outlines need at least three vertices to close.
    #[error("polygon side count must be at least 3, got {0}")]
    InvalidSideCount(u32),
}

/// Tool settings a gesture captures when it starts.
///
/// The capture makes in-progress drags immune to settings changes: a drag
/// keeps drawing with the values it started with, and the next drag picks up
/// whatever the settings are by then.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    /// Active drawing tool
    pub tool: Tool,
    /// Stroke color for outlines and brush segments
    pub stroke_color: Color,
    /// Fill color, carried as surface style state
    pub fill_color: Color,
    /// Stroke thickness in pixels
    pub line_width: f64,
    /// Side count used by the polygon tool
    pub polygon_sides: u32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            stroke_color: BLACK,
            fill_color: BLACK,
            line_width: 2.0,
            polygon_sides: 6,
        }
    }
}

impl ToolConfig {
    /// Checks that the settings can produce drawable shapes.
    ///
    /// # Returns
    /// `ToolError::InvalidSideCount` when the polygon side count is below
    /// the minimum. The count is never clamped; callers surface the error.
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.polygon_sides < MIN_POLYGON_SIDES {
            return Err(ToolError::InvalidSideCount(self.polygon_sides));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_names_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Tool::Brush).unwrap(), "\"brush\"");
        assert_eq!(
            serde_json::to_string(&Tool::Rectangle).unwrap(),
            "\"rectangle\""
        );
        let parsed: Tool = serde_json::from_str("\"polygon\"").unwrap();
        assert_eq!(parsed, Tool::Polygon);
        assert!(serde_json::from_str::<Tool>("\"laser\"").is_err());
    }

    #[test]
    fn default_settings_validate() {
        let config = ToolConfig::default();
        assert_eq!(config.tool, Tool::Brush);
        assert_eq!(config.line_width, 2.0);
        assert_eq!(config.polygon_sides, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn side_count_below_three_is_a_hard_error() {
        let config = ToolConfig {
            polygon_sides: 2,
            ..ToolConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err, ToolError::InvalidSideCount(2));
        assert!(err.to_string().contains("at least 3"));
    }
}
