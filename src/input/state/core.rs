//! Gesture state types and drag-to-shape construction.

use std::f64::consts::FRAC_PI_4;

use crate::draw::{BrushSample, Shape, Snapshot};
use crate::input::tool::{Tool, ToolConfig};
use crate::util::{self, BoundingBox, Point};

/// Current gesture state machine.
///
/// Tracks whether the pointer is idle or mid-drag. Everything a drag needs
/// lives inside the `Dragging` variant, including the baseline snapshot, so
/// a preview can only ever be restored from a baseline that exists.
#[derive(Debug)]
pub enum GestureState {
    /// Not drawing - waiting for a pointer press
    Idle,
    /// Pointer held down - rubber banding until release
    Dragging {
        /// Tool settings captured when the press happened
        config: ToolConfig,
        /// Position where the pointer went down
        start: Point,
        /// Latest pointer position
        current: Point,
        /// Normalized box from `start` to `current`
        bounds: BoundingBox,
        /// Surface pixels the next preview frame is painted over
        baseline: Snapshot,
        /// Accepted brush samples, empty for non-brush tools
        stroke: Vec<BrushSample>,
    },
}

/// Pad-level input state.
///
/// Owns the gesture state machine plus counters that outlive individual
/// drags. Pointer handlers live in the `pointer` submodule.
pub struct PadState {
    /// Current gesture state
    pub(super) state: GestureState,
    /// Running count of brush samples rejected by the bounds filter
    pub(super) dropped_samples: u64,
}

impl PadState {
    /// Creates an idle pad.
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            dropped_samples: 0,
        }
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Bounding box of the in-progress drag.
    ///
    /// # Returns
    /// `None` when idle.
    pub fn drag_bounds(&self) -> Option<BoundingBox> {
        match &self.state {
            GestureState::Dragging { bounds, .. } => Some(*bounds),
            GestureState::Idle => None,
        }
    }

    /// Total brush samples dropped because they fell outside the surface.
    ///
    /// The counter accumulates across drags for the lifetime of the pad.
    pub fn dropped_samples(&self) -> u64 {
        self.dropped_samples
    }

    /// Shape the in-progress drag would commit if released right now.
    ///
    /// Brush drags report the stroke recorded so far; other tools report
    /// their current preview geometry.
    ///
    /// # Returns
    /// `None` when idle.
    pub fn provisional_shape(&self) -> Option<Shape> {
        match &self.state {
            GestureState::Idle => None,
            GestureState::Dragging {
                config,
                start,
                current,
                bounds,
                stroke,
                ..
            } => match config.tool {
                Tool::Brush => Some(Shape::Brush {
                    samples: stroke.clone(),
                    color: config.stroke_color,
                    thick: config.line_width,
                }),
                _ => shape_from_drag(config, *start, *current, bounds),
            },
        }
    }
}

impl Default for PadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the shape a non-brush drag describes.
///
/// # Returns
/// `None` for the brush tool, whose output is the recorded sample log rather
/// than drag geometry.
pub(super) fn shape_from_drag(
    config: &ToolConfig,
    start: Point,
    current: Point,
    bounds: &BoundingBox,
) -> Option<Shape> {
    let shape = match config.tool {
        Tool::Brush => return None,
        Tool::Line => Shape::Line {
            x1: start.x,
            y1: start.y,
            x2: current.x,
            y2: current.y,
            color: config.stroke_color,
            thick: config.line_width,
        },
        Tool::Rectangle => Shape::Rect {
            x: bounds.left,
            y: bounds.top,
            w: bounds.width,
            h: bounds.height,
            color: config.stroke_color,
            thick: config.line_width,
        },
        // The radius follows the horizontal extent only; vertical drag
        // movement leaves it unchanged.
        Tool::Circle => Shape::Circle {
            cx: start.x,
            cy: start.y,
            radius: bounds.width,
            color: config.stroke_color,
            thick: config.line_width,
        },
        // Ellipses draw with a fixed 45 degree tilt around the anchor.
        Tool::Ellipse => Shape::Ellipse {
            cx: start.x,
            cy: start.y,
            rx: bounds.width / 2.0,
            ry: bounds.height / 2.0,
            rotation: FRAC_PI_4,
            color: config.stroke_color,
            thick: config.line_width,
        },
        // Polygons center on the pointer and spin with the drag direction.
        Tool::Polygon => Shape::Polygon {
            cx: current.x,
            cy: current.y,
            rx: bounds.width,
            ry: bounds.height,
            start_angle: util::drag_angle(start, current),
            sides: config.polygon_sides,
            color: config.stroke_color,
            thick: config.line_width,
        },
    };
    Some(shape)
}
