//! Input handling and gesture state machine.
//!
//! This module translates frontend pointer events into drawing actions. It
//! maintains the gesture state machine, the viewport-to-surface coordinate
//! mapper, and the tool settings each drag captures.

pub mod events;
pub mod mapper;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use mapper::ViewportRect;
pub use state::{GestureState, PadState};
pub use tool::{Tool, ToolConfig, ToolError};
