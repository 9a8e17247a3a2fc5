//! Drawing surface abstraction.
//!
//! The gesture tracker and shape renderer draw through the [`Surface`] trait
//! rather than against a concrete raster, so rubber-band previews, replay
//! scripts, and tests all share the same drawing contract. The only shipped
//! implementation is [`super::RasterSurface`].

use super::color::Color;

/// A full copy of a surface's pixel contents.
///
/// Snapshots are what make rubber-band previews possible: the gesture tracker
/// captures one when a drag starts and restores it before every preview frame.
/// Pixels are tightly packed 8-bit RGBA in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Snapshot {
    /// Wraps a raw RGBA buffer.
    ///
    /// # Returns
    /// `None` when the buffer length does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wraps a buffer whose length the caller already guarantees.
    pub(crate) fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "snapshot buffer must match dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Snapshot width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Snapshot height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reads one pixel as `[r, g, b, a]`.
    ///
    /// # Returns
    /// `None` when the coordinates fall outside the snapshot.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize * self.width as usize) + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }
}

/// Drawing operations the pad needs from a render target.
///
/// The contract mirrors an immediate-mode 2D canvas: a current path built
/// from move/line segments, stroke style state that persists across calls,
/// and whole-surface snapshot/restore for rubber banding. Coordinates are
/// `f64` pixels with the origin at the top-left corner.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Sets the color used by subsequent stroke operations.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the fill color. Kept as style state for tools that fill; the
    /// current tool set only strokes.
    fn set_fill_color(&mut self, color: Color);

    /// Sets the stroke thickness in pixels for subsequent stroke operations.
    fn set_line_width(&mut self, width: f64);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Starts a new subpath at the given position.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extends the current subpath with a straight segment. Acts like
    /// [`Surface::move_to`] when no subpath is open.
    fn line_to(&mut self, x: f64, y: f64);

    /// Closes the current subpath back to its first point.
    fn close_path(&mut self);

    /// Strokes every subpath of the current path with the current style.
    /// The path is kept until the next [`Surface::begin_path`].
    fn stroke(&mut self);

    /// Strokes an axis-aligned rectangle outline without touching the
    /// current path.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Appends a circular arc subpath. Angles are radians, measured from the
    /// positive X axis, sweeping from `start_angle` to `end_angle`.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);

    /// Appends an elliptical arc subpath, rotated by `rotation` radians
    /// around its center.
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    );

    /// Resets every pixel to the background color.
    fn clear(&mut self);

    /// Captures the full pixel contents.
    fn snapshot(&self) -> Snapshot;

    /// Restores pixel contents captured earlier with [`Surface::snapshot`].
    /// Style state and the current path are left untouched.
    fn restore(&mut self, snapshot: &Snapshot);

    /// Composites an image onto the surface with its top-left corner at
    /// `(x, y)`, clipping whatever falls outside.
    fn draw_image(&mut self, image: &Snapshot, x: f64, y: f64);
}
