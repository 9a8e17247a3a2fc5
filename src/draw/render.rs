//! Shape rendering against the drawing surface trait.

use std::f64::consts::TAU;

use super::color::Color;
use super::shape::{BrushSample, Shape};
use super::surface::Surface;
use crate::util;

/// Renders a single shape onto a surface.
///
/// Dispatches to the appropriate internal rendering function based on shape
/// type. Handles all shape variants: Brush, Line, Rect, Circle, Ellipse, and
/// Polygon.
///
/// # Arguments
/// * `surface` - Drawing surface to render to
/// * `shape` - The shape to render
pub fn render_shape<S: Surface>(surface: &mut S, shape: &Shape) {
    match shape {
        Shape::Brush {
            samples,
            color,
            thick,
        } => {
            render_brush_stroke(surface, samples, *color, *thick);
        }
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            thick,
        } => {
            render_line(surface, *x1, *y1, *x2, *y2, *color, *thick);
        }
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            thick,
        } => {
            render_rect(surface, *x, *y, *w, *h, *color, *thick);
        }
        Shape::Circle {
            cx,
            cy,
            radius,
            color,
            thick,
        } => {
            render_circle(surface, *cx, *cy, *radius, *color, *thick);
        }
        Shape::Ellipse {
            cx,
            cy,
            rx,
            ry,
            rotation,
            color,
            thick,
        } => {
            render_ellipse(surface, *cx, *cy, *rx, *ry, *rotation, *color, *thick);
        }
        Shape::Polygon {
            cx,
            cy,
            rx,
            ry,
            start_angle,
            sides,
            color,
            thick,
        } => {
            render_polygon(
                surface,
                *cx,
                *cy,
                *rx,
                *ry,
                *start_angle,
                *sides,
                *color,
                *thick,
            );
        }
    }
}

/// Replays a full brush stroke from its sample log.
///
/// Walks the samples in order: a pen-down sample (flag false) renders as a
/// short stub at its position, a continuation sample (flag true) renders as a
/// segment from the previous sample. A stroke is therefore rebuilt exactly as
/// it was drawn, stubs included.
pub fn render_brush_stroke<S: Surface>(
    surface: &mut S,
    samples: &[BrushSample],
    color: Color,
    thick: f64,
) {
    if samples.is_empty() {
        return;
    }

    surface.set_stroke_color(color);
    surface.set_line_width(thick);

    for (i, sample) in samples.iter().enumerate() {
        if sample.pen_down && i > 0 {
            let prev = samples[i - 1];
            brush_segment(surface, prev.x, prev.y, sample.x, sample.y);
        } else {
            brush_stub(surface, sample.x, sample.y);
        }
    }
}

/// Renders the one-pixel stub marking a fresh pen-down position.
///
/// Callers set the stroke style first.
pub(crate) fn brush_stub<S: Surface>(surface: &mut S, x: f64, y: f64) {
    surface.begin_path();
    surface.move_to(x - 1.0, y);
    surface.line_to(x, y);
    surface.stroke();
}

/// Renders one brush segment between consecutive samples.
///
/// Callers set the stroke style first.
pub(crate) fn brush_segment<S: Surface>(surface: &mut S, x1: f64, y1: f64, x2: f64, y2: f64) {
    surface.begin_path();
    surface.move_to(x1, y1);
    surface.line_to(x2, y2);
    surface.stroke();
}

/// Render a straight line
fn render_line<S: Surface>(
    surface: &mut S,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
    thick: f64,
) {
    surface.set_stroke_color(color);
    surface.set_line_width(thick);

    surface.begin_path();
    surface.move_to(x1, y1);
    surface.line_to(x2, y2);
    surface.stroke();
}

/// Render a rectangle (outline)
fn render_rect<S: Surface>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    thick: f64,
) {
    surface.set_stroke_color(color);
    surface.set_line_width(thick);

    // Normalize to handle any callers passing negative dimensions
    // (the gesture tracker already normalizes, but this keeps rendering consistent)
    let (norm_x, norm_w) = if w >= 0.0 { (x, w) } else { (x + w, -w) };
    let (norm_y, norm_h) = if h >= 0.0 { (y, h) } else { (y + h, -h) };

    surface.stroke_rect(norm_x, norm_y, norm_w, norm_h);
}

/// Render a circle outline
fn render_circle<S: Surface>(
    surface: &mut S,
    cx: f64,
    cy: f64,
    radius: f64,
    color: Color,
    thick: f64,
) {
    surface.set_stroke_color(color);
    surface.set_line_width(thick);

    surface.begin_path();
    surface.arc(cx, cy, radius, 0.0, TAU);
    surface.stroke();
}

/// Render an ellipse outline, rotated around its center
#[allow(clippy::too_many_arguments)]
fn render_ellipse<S: Surface>(
    surface: &mut S,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    rotation: f64,
    color: Color,
    thick: f64,
) {
    surface.set_stroke_color(color);
    surface.set_line_width(thick);

    surface.begin_path();
    surface.ellipse(cx, cy, rx, ry, rotation, 0.0, TAU);
    surface.stroke();
}

/// Render a regular polygon outline
#[allow(clippy::too_many_arguments)]
fn render_polygon<S: Surface>(
    surface: &mut S,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_angle: f64,
    sides: u32,
    color: Color,
    thick: f64,
) {
    if sides < 3 {
        return;
    }

    surface.set_stroke_color(color);
    surface.set_line_width(thick);

    let vertices = util::polygon_vertices(cx, cy, rx, ry, start_angle, sides);
    surface.begin_path();
    surface.move_to(vertices[0].x, vertices[0].y);
    for vertex in &vertices[1..] {
        surface.line_to(vertex.x, vertex.y);
    }
    surface.close_path();
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::draw::raster::RasterSurface;

    const WHITE_PX: [u8; 4] = [255, 255, 255, 255];
    const BLACK_PX: [u8; 4] = [0, 0, 0, 255];

    fn pixel(surface: &RasterSurface, x: u32, y: u32) -> [u8; 4] {
        surface.snapshot().pixel(x, y).unwrap()
    }

    #[test]
    fn brush_replay_draws_stub_then_segments() {
        let mut surface = RasterSurface::new(30, 30);
        let samples = vec![
            BrushSample::new(10.0, 10.0, false),
            BrushSample::new(12.0, 11.0, true),
            BrushSample::new(14.0, 13.0, true),
        ];
        render_brush_stroke(&mut surface, &samples, BLACK, 2.0);

        // Stub covers (9, 10) to (10, 10).
        assert_eq!(pixel(&surface, 9, 10), BLACK_PX);
        assert_eq!(pixel(&surface, 10, 10), BLACK_PX);
        // Segments pass through the later samples.
        assert_eq!(pixel(&surface, 12, 11), BLACK_PX);
        assert_eq!(pixel(&surface, 13, 12), BLACK_PX);
        assert_eq!(pixel(&surface, 14, 13), BLACK_PX);
        assert_eq!(pixel(&surface, 25, 25), WHITE_PX);
    }

    #[test]
    fn brush_replay_restarts_with_a_stub_after_pen_lift() {
        let mut surface = RasterSurface::new(40, 20);
        let samples = vec![
            BrushSample::new(5.0, 10.0, false),
            BrushSample::new(8.0, 10.0, true),
            BrushSample::new(30.0, 10.0, false),
        ];
        render_brush_stroke(&mut surface, &samples, BLACK, 2.0);

        // No segment connects (8, 10) to (30, 10).
        assert_eq!(pixel(&surface, 19, 10), WHITE_PX);
        assert_eq!(pixel(&surface, 29, 10), BLACK_PX);
    }

    #[test]
    fn empty_brush_stroke_renders_nothing() {
        let mut surface = RasterSurface::new(10, 10);
        let before = surface.snapshot();
        render_brush_stroke(&mut surface, &[], BLACK, 2.0);
        assert_eq!(surface.snapshot(), before);
    }

    #[test]
    fn line_shape_connects_its_endpoints() {
        let mut surface = RasterSurface::new(30, 30);
        render_shape(
            &mut surface,
            &Shape::Line {
                x1: 4.0,
                y1: 4.0,
                x2: 24.0,
                y2: 24.0,
                color: BLACK,
                thick: 2.0,
            },
        );
        assert_eq!(pixel(&surface, 4, 4), BLACK_PX);
        assert_eq!(pixel(&surface, 14, 14), BLACK_PX);
        assert_eq!(pixel(&surface, 24, 24), BLACK_PX);
        assert_eq!(pixel(&surface, 24, 4), WHITE_PX);
    }

    #[test]
    fn rect_shape_normalizes_negative_dimensions() {
        let mut surface = RasterSurface::new(30, 30);
        render_shape(
            &mut surface,
            &Shape::Rect {
                x: 20.0,
                y: 18.0,
                w: -15.0,
                h: -12.0,
                color: BLACK,
                thick: 1.0,
            },
        );
        // Same outline as the normalized box at (5, 6) sized 15x12.
        assert_eq!(pixel(&surface, 5, 6), BLACK_PX);
        assert_eq!(pixel(&surface, 20, 18), BLACK_PX);
        assert_eq!(pixel(&surface, 12, 12), WHITE_PX);
    }

    #[test]
    fn circle_shape_strokes_at_its_radius() {
        let mut surface = RasterSurface::new(100, 100);
        render_shape(
            &mut surface,
            &Shape::Circle {
                cx: 50.0,
                cy: 50.0,
                radius: 40.0,
                color: BLACK,
                thick: 2.0,
            },
        );
        assert_eq!(pixel(&surface, 90, 50), BLACK_PX);
        assert_eq!(pixel(&surface, 10, 50), BLACK_PX);
        assert_eq!(pixel(&surface, 50, 90), BLACK_PX);
        assert_eq!(pixel(&surface, 50, 50), WHITE_PX);
    }

    #[test]
    fn polygon_shape_passes_through_its_vertices() {
        let mut surface = RasterSurface::new(60, 60);
        render_shape(
            &mut surface,
            &Shape::Polygon {
                cx: 30.0,
                cy: 30.0,
                rx: 20.0,
                ry: 20.0,
                start_angle: 0.0,
                sides: 3,
                color: BLACK,
                thick: 2.0,
            },
        );
        for vertex in util::polygon_vertices(30.0, 30.0, 20.0, 20.0, 0.0, 3) {
            assert_eq!(
                pixel(&surface, vertex.x.round() as u32, vertex.y.round() as u32),
                BLACK_PX
            );
        }
        assert_eq!(pixel(&surface, 30, 30), WHITE_PX);
    }

    #[test]
    fn degenerate_polygon_renders_nothing() {
        let mut surface = RasterSurface::new(20, 20);
        let before = surface.snapshot();
        render_polygon(&mut surface, 10.0, 10.0, 5.0, 5.0, 0.0, 2, BLACK, 2.0);
        assert_eq!(surface.snapshot(), before);
    }
}
