//! Pointer event handling for the gesture state machine.

use log::{debug, trace, warn};

use super::core::shape_from_drag;
use super::{GestureState, PadState};
use crate::draw::{BrushSample, Shape, Surface, render};
use crate::input::events::PointerEvent;
use crate::input::tool::{Tool, ToolConfig};
use crate::util::{BoundingBox, Point};

impl PadState {
    /// Dispatches a pointer event to the matching handler.
    ///
    /// # Returns
    /// The committed shape when an up event ends a drag, `None` otherwise.
    pub fn handle_pointer_event<S: Surface>(
        &mut self,
        surface: &mut S,
        config: &ToolConfig,
        event: PointerEvent,
    ) -> Option<Shape> {
        match event {
            PointerEvent::Down(pos) => {
                self.pointer_down(surface, config, pos);
                None
            }
            PointerEvent::Move(pos) => {
                self.pointer_move(surface, pos);
                None
            }
            PointerEvent::Up(pos) => self.pointer_up(surface, pos),
        }
    }

    /// Starts a drag.
    ///
    /// Captures the tool settings for the whole drag and applies them to the
    /// surface style. For the brush tool the pen-down sample is logged
    /// immediately with its flag unset and its stub drawn on the spot. The
    /// baseline snapshot is taken after that, so the stub is part of what
    /// previews restore to.
    ///
    /// A press while a drag is already in progress is ignored.
    pub fn pointer_down<S: Surface>(&mut self, surface: &mut S, config: &ToolConfig, pos: Point) {
        if self.is_dragging() {
            warn!(
                "pointer down at ({:.1}, {:.1}) ignored: drag already in progress",
                pos.x, pos.y
            );
            return;
        }

        let config = config.clone();
        surface.set_stroke_color(config.stroke_color);
        surface.set_fill_color(config.fill_color);
        surface.set_line_width(config.line_width);

        let mut stroke = Vec::new();
        if config.tool == Tool::Brush {
            stroke.push(BrushSample::new(pos.x, pos.y, false));
            render::brush_stub(surface, pos.x, pos.y);
        }
        let baseline = surface.snapshot();

        trace!(
            "drag started at ({:.1}, {:.1}) with {:?}",
            pos.x, pos.y, config.tool
        );
        self.state = GestureState::Dragging {
            config,
            start: pos,
            current: pos,
            bounds: BoundingBox::from_drag(pos, pos),
            baseline,
            stroke,
        };
    }

    /// Tracks a drag.
    ///
    /// Always updates the current position and bounding box. Brush drags
    /// run the position through the bounds filter; an accepted sample is
    /// logged with its flag set, drawn as one segment from the previous
    /// sample, and folded into the baseline, so each move paints only the
    /// new segment. A rejected sample is counted and the stroke drawn so
    /// far is left untouched. Other tools restore the baseline and draw a
    /// fresh preview of the whole shape.
    ///
    /// Moves with no drag in progress are ignored; without a baseline there
    /// is nothing to preview against.
    pub fn pointer_move<S: Surface>(&mut self, surface: &mut S, pos: Point) {
        let GestureState::Dragging {
            config,
            start,
            current,
            bounds,
            baseline,
            stroke,
        } = &mut self.state
        else {
            trace!(
                "pointer move at ({:.1}, {:.1}) ignored: no drag in progress",
                pos.x, pos.y
            );
            return;
        };

        *current = pos;
        *bounds = BoundingBox::from_drag(*start, pos);

        if config.tool == Tool::Brush {
            let width = surface.width() as f64;
            let height = surface.height() as f64;
            // Strictly inside: positions on the edge are dropped too.
            let inside = pos.x > 0.0 && pos.x < width && pos.y > 0.0 && pos.y < height;
            if inside {
                if let Some(prev) = stroke.last().copied() {
                    surface.restore(baseline);
                    render::brush_segment(surface, prev.x, prev.y, pos.x, pos.y);
                    *baseline = surface.snapshot();
                    stroke.push(BrushSample::new(pos.x, pos.y, true));
                }
            } else {
                self.dropped_samples += 1;
                debug!(
                    "dropped out-of-bounds brush sample at ({:.1}, {:.1})",
                    pos.x, pos.y
                );
                surface.restore(baseline);
            }
        } else {
            surface.restore(baseline);
            if let Some(shape) = shape_from_drag(config, *start, pos, bounds) {
                render::render_shape(surface, &shape);
            }
        }
    }

    /// Ends a drag.
    ///
    /// The release position is folded into the drag geometry but never
    /// appended to a brush stroke's sample log. Non-brush tools restore the
    /// baseline and draw their final geometry; brush strokes were committed
    /// sample by sample, so the release just seals the log.
    ///
    /// # Returns
    /// The committed shape, or `None` when no drag was in progress.
    pub fn pointer_up<S: Surface>(&mut self, surface: &mut S, pos: Point) -> Option<Shape> {
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        let GestureState::Dragging {
            config,
            start,
            baseline,
            stroke,
            ..
        } = state
        else {
            trace!(
                "pointer up at ({:.1}, {:.1}) ignored: no drag in progress",
                pos.x, pos.y
            );
            return None;
        };

        surface.restore(&baseline);
        let shape = match config.tool {
            Tool::Brush => Shape::Brush {
                samples: stroke,
                color: config.stroke_color,
                thick: config.line_width,
            },
            _ => {
                let bounds = BoundingBox::from_drag(start, pos);
                let shape = shape_from_drag(&config, start, pos, &bounds)?;
                render::render_shape(surface, &shape);
                shape
            }
        };

        debug!("drag finished with {:?}", config.tool);
        Some(shape)
    }
}
