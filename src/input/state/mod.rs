//! Gesture state machine for the drawing pad.
//!
//! Split across submodules: `core` holds the state types, accessors, and
//! drag-to-shape construction, `pointer` the pointer event handlers.

mod core;
mod pointer;

pub use self::core::{GestureState, PadState};
