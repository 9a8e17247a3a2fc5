//! Rendering primitives and shape definitions.
//!
//! This module defines the core drawing types used by the pad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: Different tool outputs (brush strokes, lines, polygons, etc.)
//! - [`Surface`]: The drawing surface trait with snapshot/restore support
//! - [`RasterSurface`]: The CPU raster implementation behind PNG export
//! - Rendering functions that replay shapes onto any surface

pub mod color;
pub mod raster;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use raster::RasterSurface;
pub use render::{render_brush_stroke, render_shape};
pub use shape::{BrushSample, Shape};
pub use surface::{Snapshot, Surface};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
