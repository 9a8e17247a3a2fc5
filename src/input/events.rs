//! Generic pointer event types for cross-frontend compatibility.
//!
//! Frontends map their native input (mouse, stylus, replay scripts) into
//! these events after converting positions to surface coordinates.

use crate::util::Point;

/// A pointer event in surface coordinates.
///
/// Positions have already been mapped from whatever coordinate space the
/// frontend works in; see [`crate::input::mapper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at a position
    Down(Point),
    /// Pointer moved while tracking
    Move(Point),
    /// Primary button released at a position
    Up(Point),
}
