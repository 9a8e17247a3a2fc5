//! Pointer script format and replay.
//!
//! A script is the headless stand-in for a frontend: a JSON document holding
//! an optional viewport placement plus an ordered list of events. Pointer
//! events carry viewport coordinates and are mapped onto the surface before
//! they reach the gesture state machine; control events change the tool
//! settings between gestures, the way a toolbar would.
//!
//! # Example
//! ```json
//! {
//!   "events": [
//!     { "type": "tool", "name": "rectangle" },
//!     { "type": "stroke-color", "color": "red" },
//!     { "type": "down", "x": 100, "y": 100 },
//!     { "type": "move", "x": 120, "y": 110 },
//!     { "type": "up", "x": 150, "y": 130 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ColorSpec;
use crate::draw::Surface;
use crate::input::mapper::{self, ViewportRect};
use crate::input::state::PadState;
use crate::input::tool::{Tool, ToolConfig, ToolError};

/// Errors that can occur while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tool settings: {0}")]
    Tool(#[from] ToolError),
}

/// One scripted event.
///
/// Pointer events (`down`, `move`, `up`) are in viewport coordinates; the
/// remaining variants mirror the control actions a toolbar exposes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Primary button pressed
    Down { x: f64, y: f64 },
    /// Pointer moved
    Move { x: f64, y: f64 },
    /// Primary button released
    Up { x: f64, y: f64 },
    /// Select the active tool
    Tool { name: Tool },
    /// Change the stroke color
    StrokeColor { color: ColorSpec },
    /// Change the fill color
    FillColor { color: ColorSpec },
    /// Change the stroke thickness
    LineWidth { width: f64 },
    /// Change the polygon side count
    PolygonSides { sides: u32 },
    /// Reset the surface to the background color
    Clear,
}

/// A recorded pad session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    /// Where the pad sat in the recording frontend's viewport. Defaults to a
    /// one-to-one mapping onto the surface.
    #[serde(default)]
    pub viewport: Option<ViewportRect>,

    /// Events in the order they happened
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parses a script from JSON text.
    pub fn parse(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path)?;
        let script = Self::parse(&text)?;
        info!(
            "Loaded script from {} ({} events)",
            path.display(),
            script.events.len()
        );
        Ok(script)
    }
}

/// Summary of one replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayStats {
    /// Shapes committed by completed drags
    pub shapes_committed: usize,
    /// Brush samples rejected by the surface bounds filter
    pub dropped_samples: u64,
}

/// Drives the gesture state machine from a script.
///
/// Owns the pad state and the current tool settings. Settings changes apply
/// to the next drag; the state machine captures them at pointer-down, so an
/// in-flight drag keeps the values it started with.
pub struct ScriptRunner {
    pad: PadState,
    tools: ToolConfig,
}

impl ScriptRunner {
    /// Creates a runner starting from the given tool settings.
    pub fn new(tools: ToolConfig) -> Self {
        Self {
            pad: PadState::new(),
            tools,
        }
    }

    /// Tool settings the next drag will capture.
    pub fn tools(&self) -> &ToolConfig {
        &self.tools
    }

    /// Replays a script onto a surface.
    ///
    /// Pointer coordinates are mapped through the script's viewport rect (or
    /// an identity mapping when none is given) before they reach the state
    /// machine. Control events are applied between pointer events:
    /// `line-width` is clamped into the same 1.0-20.0 range the config
    /// loader enforces, while a `polygon-sides` value below 3 aborts the
    /// replay.
    pub fn run<S: Surface>(
        &mut self,
        surface: &mut S,
        script: &Script,
    ) -> Result<ReplayStats, ScriptError> {
        let rect = script
            .viewport
            .unwrap_or_else(|| ViewportRect::identity(surface.width(), surface.height()));
        let dropped_before = self.pad.dropped_samples();
        let mut stats = ReplayStats::default();

        for event in &script.events {
            match event {
                ScriptEvent::Down { x, y } => {
                    let pos = mapper::map_to_surface(&rect, surface.width(), surface.height(), *x, *y);
                    self.pad.pointer_down(surface, &self.tools, pos);
                }
                ScriptEvent::Move { x, y } => {
                    let pos = mapper::map_to_surface(&rect, surface.width(), surface.height(), *x, *y);
                    self.pad.pointer_move(surface, pos);
                }
                ScriptEvent::Up { x, y } => {
                    let pos = mapper::map_to_surface(&rect, surface.width(), surface.height(), *x, *y);
                    if self.pad.pointer_up(surface, pos).is_some() {
                        stats.shapes_committed += 1;
                    }
                }
                ScriptEvent::Tool { name } => {
                    debug!("script selects {:?}", name);
                    self.tools.tool = *name;
                }
                ScriptEvent::StrokeColor { color } => {
                    self.tools.stroke_color = color.to_color();
                }
                ScriptEvent::FillColor { color } => {
                    self.tools.fill_color = color.to_color();
                }
                ScriptEvent::LineWidth { width } => {
                    // Same range the config loader enforces.
                    if !(1.0..=20.0).contains(width) {
                        warn!(
                            "Invalid script line width {:.1}, clamping to 1.0-20.0 range",
                            width
                        );
                    }
                    self.tools.line_width = width.clamp(1.0, 20.0);
                }
                ScriptEvent::PolygonSides { sides } => {
                    let candidate = ToolConfig {
                        polygon_sides: *sides,
                        ..self.tools.clone()
                    };
                    candidate.validate()?;
                    self.tools = candidate;
                }
                ScriptEvent::Clear => {
                    if self.pad.is_dragging() {
                        // Clearing mid-drag would invalidate the baseline
                        // snapshot the preview restores to.
                        warn!("script clear ignored: drag in progress");
                    } else {
                        surface.clear();
                    }
                }
            }
        }

        stats.dropped_samples = self.pad.dropped_samples() - dropped_before;
        info!(
            "Replay committed {} shapes, dropped {} samples",
            stats.shapes_committed, stats.dropped_samples
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RasterSurface;

    const WHITE_PX: [u8; 4] = [255, 255, 255, 255];
    const BLACK_PX: [u8; 4] = [0, 0, 0, 255];

    fn pixel(surface: &RasterSurface, x: u32, y: u32) -> [u8; 4] {
        surface.snapshot().pixel(x, y).unwrap()
    }

    #[test]
    fn events_parse_from_kebab_case_json() {
        let script = Script::parse(
            r#"{
                "events": [
                    { "type": "tool", "name": "polygon" },
                    { "type": "polygon-sides", "sides": 5 },
                    { "type": "stroke-color", "color": [255, 0, 0] },
                    { "type": "line-width", "width": 4.0 },
                    { "type": "down", "x": 1.5, "y": 2.5 },
                    { "type": "clear" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(script.events.len(), 6);
        assert!(script.viewport.is_none());
        assert_eq!(script.events[0], ScriptEvent::Tool { name: Tool::Polygon });
        assert_eq!(script.events[4], ScriptEvent::Down { x: 1.5, y: 2.5 });
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Script::parse("{ \"events\": [ { \"type\": \"warp\" } ] }").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn replay_commits_scripted_drags() {
        let mut surface = RasterSurface::new(64, 64);
        let script = Script::parse(
            r#"{
                "events": [
                    { "type": "tool", "name": "rectangle" },
                    { "type": "down", "x": 10, "y": 10 },
                    { "type": "move", "x": 20, "y": 15 },
                    { "type": "up", "x": 30, "y": 25 }
                ]
            }"#,
        )
        .unwrap();

        let mut runner = ScriptRunner::new(ToolConfig::default());
        let stats = runner.run(&mut surface, &script).unwrap();
        assert_eq!(stats.shapes_committed, 1);
        assert_eq!(stats.dropped_samples, 0);

        // Committed rectangle outline from (10, 10) to (30, 25).
        assert_eq!(pixel(&surface, 20, 10), BLACK_PX);
        assert_eq!(pixel(&surface, 30, 18), BLACK_PX);
        assert_eq!(pixel(&surface, 20, 18), WHITE_PX);
    }

    #[test]
    fn viewport_rect_scales_pointer_coordinates() {
        let mut surface = RasterSurface::new(60, 60);
        // Pad displayed at twice the surface size: viewport (20, 20)
        // lands on surface (10, 10).
        let script = Script::parse(
            r#"{
                "viewport": { "left": 0.0, "top": 0.0, "width": 120.0, "height": 120.0 },
                "events": [
                    { "type": "tool", "name": "line" },
                    { "type": "down", "x": 20, "y": 20 },
                    { "type": "up", "x": 100, "y": 20 }
                ]
            }"#,
        )
        .unwrap();

        let mut runner = ScriptRunner::new(ToolConfig::default());
        runner.run(&mut surface, &script).unwrap();
        assert_eq!(pixel(&surface, 10, 10), BLACK_PX);
        assert_eq!(pixel(&surface, 50, 10), BLACK_PX);
        assert_eq!(pixel(&surface, 10, 30), WHITE_PX);
    }

    #[test]
    fn control_events_change_the_next_drag_only() {
        let mut surface = RasterSurface::new(64, 64);
        let script = Script::parse(
            r#"{
                "events": [
                    { "type": "tool", "name": "line" },
                    { "type": "down", "x": 5, "y": 5 },
                    { "type": "stroke-color", "color": [255, 0, 0] },
                    { "type": "up", "x": 25, "y": 5 }
                ]
            }"#,
        )
        .unwrap();

        let mut runner = ScriptRunner::new(ToolConfig::default());
        runner.run(&mut surface, &script).unwrap();
        // The drag started before the color change, so it drew in black.
        assert_eq!(pixel(&surface, 15, 5), BLACK_PX);
        // The runner carries red forward for the next drag.
        assert_eq!(runner.tools().stroke_color, crate::draw::RED);
    }

    #[test]
    fn line_width_events_clamp_like_the_config_loader() {
        let mut surface = RasterSurface::new(16, 16);
        let mut runner = ScriptRunner::new(ToolConfig::default());

        let oversized = Script::parse(
            r#"{ "events": [ { "type": "line-width", "width": 500.0 } ] }"#,
        )
        .unwrap();
        runner.run(&mut surface, &oversized).unwrap();
        assert_eq!(runner.tools().line_width, 20.0);

        let undersized = Script::parse(
            r#"{ "events": [ { "type": "line-width", "width": 0.01 } ] }"#,
        )
        .unwrap();
        runner.run(&mut surface, &undersized).unwrap();
        assert_eq!(runner.tools().line_width, 1.0);

        let in_range = Script::parse(
            r#"{ "events": [ { "type": "line-width", "width": 4.0 } ] }"#,
        )
        .unwrap();
        runner.run(&mut surface, &in_range).unwrap();
        assert_eq!(runner.tools().line_width, 4.0);
    }

    #[test]
    fn invalid_polygon_sides_aborts_the_replay() {
        let mut surface = RasterSurface::new(32, 32);
        let script = Script::parse(
            r#"{ "events": [ { "type": "polygon-sides", "sides": 2 } ] }"#,
        )
        .unwrap();

        let mut runner = ScriptRunner::new(ToolConfig::default());
        let err = runner.run(&mut surface, &script).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Tool(ToolError::InvalidSideCount(2))
        ));
        // The settings are untouched.
        assert_eq!(runner.tools().polygon_sides, 6);
    }

    #[test]
    fn clear_resets_the_surface_between_drags() {
        let mut surface = RasterSurface::new(32, 32);
        let script = Script::parse(
            r#"{
                "events": [
                    { "type": "tool", "name": "rectangle" },
                    { "type": "down", "x": 5, "y": 5 },
                    { "type": "up", "x": 20, "y": 20 },
                    { "type": "clear" }
                ]
            }"#,
        )
        .unwrap();

        let mut runner = ScriptRunner::new(ToolConfig::default());
        runner.run(&mut surface, &script).unwrap();
        assert_eq!(pixel(&surface, 5, 5), WHITE_PX);
    }

    #[test]
    fn clear_during_a_drag_is_ignored() {
        let mut surface = RasterSurface::new(32, 32);
        let script = Script::parse(
            r#"{
                "events": [
                    { "type": "down", "x": 10, "y": 10 },
                    { "type": "clear" },
                    { "type": "move", "x": 15, "y": 10 },
                    { "type": "up", "x": 15, "y": 10 }
                ]
            }"#,
        )
        .unwrap();

        let mut runner = ScriptRunner::new(ToolConfig::default());
        let stats = runner.run(&mut surface, &script).unwrap();
        assert_eq!(stats.shapes_committed, 1);
        // The brush stroke survives the ignored clear.
        assert_eq!(pixel(&surface, 12, 10), BLACK_PX);
    }

    #[test]
    fn dropped_samples_are_reported_per_replay() {
        let mut surface = RasterSurface::new(20, 20);
        let script = Script::parse(
            r#"{
                "events": [
                    { "type": "down", "x": 10, "y": 10 },
                    { "type": "move", "x": 50, "y": 10 },
                    { "type": "move", "x": 12, "y": 10 },
                    { "type": "up", "x": 12, "y": 10 }
                ]
            }"#,
        )
        .unwrap();

        let mut runner = ScriptRunner::new(ToolConfig::default());
        let stats = runner.run(&mut surface, &script).unwrap();
        assert_eq!(stats.dropped_samples, 1);
        assert_eq!(stats.shapes_committed, 1);
    }
}
