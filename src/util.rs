//! Utility functions for colors and drag geometry.
//!
//! This module provides:
//! - Name-to-color mapping for the configuration system (constants in draw::color)
//! - Points and drag bounding boxes shared by the gesture tracker and renderer
//! - Polygon vertex generation for the polygon tool

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Arguments
/// * `name` - Color name string
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Drag Geometry
// ============================================================================

/// A point on the drawing surface in pixel coordinates.
///
/// Coordinates are kept as `f64` end to end; nothing rounds until pixels are
/// actually painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of an in-progress drag.
///
/// Recomputed from the drag anchor and the current pointer position on every
/// move, so it is always normalized: `width` and `height` are non-negative
/// regardless of drag direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Builds the bounding box spanned by a drag from `start` to `current`.
    ///
    /// # Arguments
    /// * `start` - Position where the pointer went down
    /// * `current` - Latest pointer position
    ///
    /// # Returns
    /// The normalized box: `left`/`top` are the componentwise minima and
    /// `width`/`height` the absolute deltas.
    pub fn from_drag(start: Point, current: Point) -> Self {
        Self {
            left: start.x.min(current.x),
            top: start.y.min(current.y),
            width: (current.x - start.x).abs(),
            height: (current.y - start.y).abs(),
        }
    }
}

/// Angle of the vector pointing from the current pointer position back to the
/// drag anchor, in radians.
///
/// This is the orientation the polygon tool seeds its first vertex with, so
/// the polygon rotates as the user drags around the anchor.
pub fn drag_angle(start: Point, current: Point) -> f64 {
    (start.y - current.y).atan2(start.x - current.x)
}

/// Generates the vertices of a regular polygon inscribed in an ellipse.
///
/// Vertices are evenly spaced in angle starting at `start_angle`. X offsets
/// use the sine of the angle and Y offsets the cosine, so an angle of zero
/// points along positive Y and angles advance clockwise in screen
/// coordinates. `start_angle` pairs with [`drag_angle`].
///
/// # Arguments
/// * `cx` - Center X coordinate
/// * `cy` - Center Y coordinate
/// * `rx` - Horizontal radius
/// * `ry` - Vertical radius
/// * `start_angle` - Angle of the first vertex in radians
/// * `sides` - Number of vertices; callers validate this is at least 3
///
/// # Returns
/// One point per side, in drawing order.
pub fn polygon_vertices(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_angle: f64,
    sides: u32,
) -> Vec<Point> {
    debug_assert!(sides >= 3, "polygon side count validated upstream");
    let step = std::f64::consts::TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = start_angle + i as f64 * step;
            Point::new(cx + rx * angle.sin(), cy + ry * angle.cos())
        })
        .collect()
}
