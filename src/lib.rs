//! Library exports for reusing inkpad subsystems.
//!
//! Exposes the drawing engine alongside the supporting modules it relies on
//! so that other frontends (and the integration tests) can share the gesture
//! state machine, raster surface, and script replay with the main binary.

pub mod capture;
pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
