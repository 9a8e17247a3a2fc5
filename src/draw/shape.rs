//! Shape definitions for the drawing pad.

use super::color::Color;

/// One recorded brush position.
///
/// The brush tool logs every accepted pointer position together with a flag
/// describing how to connect it when the stroke is replayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushSample {
    /// X coordinate on the drawing surface
    pub x: f64,
    /// Y coordinate on the drawing surface
    pub y: f64,
    /// True when the pen was already down, so the sample continues the
    /// previous segment. False marks a fresh pen-down position, which is
    /// rendered as a short stub instead of a connecting segment.
    pub pen_down: bool,
}

impl BrushSample {
    /// Creates a sample at the given position.
    pub fn new(x: f64, y: f64, pen_down: bool) -> Self {
        Self { x, y, pen_down }
    }
}

/// Represents a drawable shape on the pad.
///
/// Each variant represents a different drawing tool with its specific
/// parameters. All shapes store their own color and thickness so they render
/// independently of whatever the tool settings are later changed to.
#[derive(Clone, Debug)]
pub enum Shape {
    /// Freehand brush stroke - replayed from the recorded sample log
    Brush {
        /// Sequence of accepted samples in the order they arrived
        samples: Vec<BrushSample>,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Straight line between the drag endpoints
    Line {
        /// Starting X coordinate
        x1: f64,
        /// Starting Y coordinate
        y1: f64,
        /// Ending X coordinate
        x2: f64,
        /// Ending Y coordinate
        y2: f64,
        /// Line color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Rectangle outline spanning the drag bounding box
    Rect {
        /// Top-left X coordinate
        x: f64,
        /// Top-left Y coordinate
        y: f64,
        /// Width in pixels
        w: f64,
        /// Height in pixels
        h: f64,
        /// Border color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
    },
    /// Circle outline centered on the drag anchor.
    ///
    /// The radius tracks only the horizontal extent of the drag; vertical
    /// movement leaves it unchanged.
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Radius in pixels
        radius: f64,
        /// Border color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
    },
    /// Ellipse outline centered on the drag anchor
    Ellipse {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
        /// Rotation around the center in radians
        rotation: f64,
        /// Border color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
    },
    /// Regular polygon centered on the current pointer position
    Polygon {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
        /// Angle of the first vertex in radians
        start_angle: f64,
        /// Number of sides, at least 3
        sides: u32,
        /// Border color
        color: Color,
        /// Border thickness in pixels
        thick: f64,
    },
}
