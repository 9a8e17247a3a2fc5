//! Viewport-to-surface coordinate mapping.
//!
//! Frontends report pointer positions in their own viewport coordinates, and
//! the on-screen size of the pad rarely matches the surface resolution. The
//! mapper converts between the two so drawing lands where the pointer
//! visually is, even when the pad is displayed scaled.

use serde::{Deserialize, Serialize};

use crate::util::Point;

/// Placement and size of the pad inside the frontend's viewport.
///
/// All values are in viewport units (CSS pixels, window points, whatever the
/// frontend uses).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    /// Viewport X of the pad's left edge
    pub left: f64,
    /// Viewport Y of the pad's top edge
    pub top: f64,
    /// Displayed width of the pad
    pub width: f64,
    /// Displayed height of the pad
    pub height: f64,
}

impl ViewportRect {
    /// A rect that maps viewport coordinates one-to-one onto a surface of
    /// the given size.
    pub fn identity(surface_width: u32, surface_height: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: surface_width as f64,
            height: surface_height as f64,
        }
    }
}

/// Maps a viewport position onto the drawing surface.
///
/// Subtracts the pad's viewport offset, then scales each axis by the ratio
/// of surface resolution to displayed size. The result stays fractional;
/// nothing rounds here.
///
/// # Arguments
/// * `rect` - Where the pad sits in the viewport
/// * `surface_width` - Surface width in pixels
/// * `surface_height` - Surface height in pixels
/// * `x` - Pointer X in viewport coordinates
/// * `y` - Pointer Y in viewport coordinates
pub fn map_to_surface(rect: &ViewportRect, surface_width: u32, surface_height: u32, x: f64, y: f64) -> Point {
    let scale_x = if rect.width > 0.0 {
        surface_width as f64 / rect.width
    } else {
        1.0
    };
    let scale_y = if rect.height > 0.0 {
        surface_height as f64 / rect.height
    } else {
        1.0
    };
    Point::new((x - rect.left) * scale_x, (y - rect.top) * scale_y)
}
