//! Software raster implementation of the drawing surface.
//!
//! Strokes are rendered by stamping filled discs at sub-pixel intervals along
//! each path segment, which gives round caps and joins without a full
//! vector scanline pass. Arcs and ellipses are flattened into polylines
//! before stamping. Pixels blend source-over in 8-bit RGBA.

use image::{Rgba, RgbaImage};

use super::color::{BLACK, Color, WHITE};
use super::surface::{Snapshot, Surface};

/// Background color of a fresh or cleared surface.
const BACKGROUND: Color = WHITE;

/// Distance between disc stamps along a stroked segment, in pixels.
const STAMP_SPACING: f64 = 0.5;

#[derive(Debug, Clone)]
struct Subpath {
    points: Vec<(f64, f64)>,
    closed: bool,
}

/// CPU raster surface backed by an RGBA image buffer.
///
/// Fresh surfaces are opaque white. Dimensions are fixed at construction;
/// anything drawn outside them is clipped.
pub struct RasterSurface {
    image: RgbaImage,
    stroke_color: Color,
    fill_color: Color,
    line_width: f64,
    path: Vec<Subpath>,
}

impl RasterSurface {
    /// Creates a surface filled with the background color.
    ///
    /// Zero dimensions are bumped to one pixel so the surface always has
    /// drawable area.
    pub fn new(width: u32, height: u32) -> Self {
        let image = RgbaImage::from_pixel(
            width.max(1),
            height.max(1),
            Rgba(BACKGROUND.to_rgba8()),
        );
        Self {
            image,
            stroke_color: BLACK,
            fill_color: BLACK,
            line_width: 1.0,
            path: Vec::new(),
        }
    }

    /// Current stroke color.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Current fill color.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Current stroke thickness in pixels.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    // ========================================================================
    // Stamping
    // ========================================================================

    /// Stamps discs along a segment at sub-pixel spacing.
    fn stamp_segment(&mut self, start: (f64, f64), end: (f64, f64)) {
        let radius = (self.line_width / 2.0).max(0.5);
        let color = self.stroke_color.to_rgba8();

        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance < 0.1 {
            self.stamp_disc(start.0, start.1, radius, color);
            return;
        }

        let steps = (distance / STAMP_SPACING).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.stamp_disc(start.0 + dx * t, start.1 + dy * t, radius, color);
        }
    }

    /// Blends a filled disc into the buffer, clipped to the surface.
    fn stamp_disc(&mut self, cx: f64, cy: f64, radius: f64, color: [u8; 4]) {
        let width = self.image.width();
        let height = self.image.height();
        let max_x = (width - 1) as f64;
        let max_y = (height - 1) as f64;
        if cx + radius < 0.0 || cy + radius < 0.0 || cx - radius > max_x || cy - radius > max_y {
            return;
        }

        let radius_sq = radius * radius;
        let x0 = (cx - radius).floor().max(0.0) as u32;
        let x1 = (cx + radius).ceil().min(max_x) as u32;
        let y0 = (cy - radius).floor().max(0.0) as u32;
        let y1 = (cy + radius).ceil().min(max_y) as u32;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f64 - cx;
                let dy = py as f64 - cy;
                if dx * dx + dy * dy <= radius_sq {
                    let dst = *self.image.get_pixel(px, py);
                    self.image.put_pixel(px, py, blend_over(dst, color));
                }
            }
        }
    }

    /// Appends a flattened arc of the given parametric ellipse as one
    /// subpath. `rotation` spins the ellipse around its center.
    fn flatten_ellipse_arc(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        let sweep = end_angle - start_angle;
        let steps = flatten_steps(rx.abs().max(ry.abs()), sweep);
        let (rot_sin, rot_cos) = rotation.sin_cos();

        let mut points = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let angle = start_angle + sweep * t;
            let ex = rx * angle.cos();
            let ey = ry * angle.sin();
            points.push((
                cx + ex * rot_cos - ey * rot_sin,
                cy + ex * rot_sin + ey * rot_cos,
            ));
        }
        self.path.push(Subpath {
            points,
            closed: false,
        });
    }
}

/// Number of polyline segments used to flatten an arc, based on its
/// approximate length in pixels.
fn flatten_steps(radius: f64, sweep: f64) -> usize {
    let arc_length = radius.max(1.0) * sweep.abs();
    (arc_length / 2.0).ceil().clamp(8.0, 1024.0) as usize
}

/// Source-over blend of an RGBA color onto an opaque-capable destination.
fn blend_over(dst: Rgba<u8>, src: [u8; 4]) -> Rgba<u8> {
    if src[3] == 255 {
        return Rgba(src);
    }
    if src[3] == 0 {
        return dst;
    }
    let sa = src[3] as f32 / 255.0;
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| ((s as f32 * sa) + (d as f32 * (1.0 - sa))).round() as u8;
    Rgba([
        channel(src[0], dst.0[0]),
        channel(src[1], dst.0[1]),
        channel(src[2], dst.0[2]),
        (out_a * 255.0).round() as u8,
    ])
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(Subpath {
            points: vec![(x, y)],
            closed: false,
        });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.path.last_mut() {
            Some(subpath) if !subpath.closed => subpath.points.push((x, y)),
            _ => self.move_to(x, y),
        }
    }

    fn close_path(&mut self) {
        if let Some(subpath) = self.path.last_mut() {
            subpath.closed = true;
        }
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for subpath in &path {
            if subpath.points.len() < 2 {
                continue;
            }
            for pair in subpath.points.windows(2) {
                self.stamp_segment(pair[0], pair[1]);
            }
            if subpath.closed {
                let first = subpath.points[0];
                let last = subpath.points[subpath.points.len() - 1];
                self.stamp_segment(last, first);
            }
        }
        self.path = path;
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
        for i in 0..corners.len() {
            self.stamp_segment(corners[i], corners[(i + 1) % corners.len()]);
        }
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.flatten_ellipse_arc(cx, cy, radius, radius, 0.0, start_angle, end_angle);
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        self.flatten_ellipse_arc(cx, cy, rx, ry, rotation, start_angle, end_angle);
    }

    fn clear(&mut self) {
        let background = Rgba(BACKGROUND.to_rgba8());
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::from_raw(
            self.image.width(),
            self.image.height(),
            self.image.as_raw().clone(),
        )
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width() != self.image.width() || snapshot.height() != self.image.height() {
            log::warn!(
                "restore size mismatch: snapshot {}x{}, surface {}x{}",
                snapshot.width(),
                snapshot.height(),
                self.image.width(),
                self.image.height()
            );
            self.draw_image(snapshot, 0.0, 0.0);
            return;
        }
        self.image.copy_from_slice(snapshot.pixels());
    }

    fn draw_image(&mut self, image: &Snapshot, x: f64, y: f64) {
        let offset_x = x.round() as i64;
        let offset_y = y.round() as i64;
        let width = self.image.width() as i64;
        let height = self.image.height() as i64;
        let pixels = image.pixels();

        for sy in 0..image.height() as i64 {
            let dy = offset_y + sy;
            if dy < 0 || dy >= height {
                continue;
            }
            for sx in 0..image.width() as i64 {
                let dx = offset_x + sx;
                if dx < 0 || dx >= width {
                    continue;
                }
                let idx = ((sy * image.width() as i64 + sx) * 4) as usize;
                let src = [pixels[idx], pixels[idx + 1], pixels[idx + 2], pixels[idx + 3]];
                let dst = *self.image.get_pixel(dx as u32, dy as u32);
                self.image
                    .put_pixel(dx as u32, dy as u32, blend_over(dst, src));
            }
        }
    }
}
