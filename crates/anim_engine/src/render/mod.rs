//! Render-loop state
//!
//! There is no geometry yet; a frame is a single clear with a gray level
//! that ramps up and wraps around.

pub mod clear_color;

pub use clear_color::{ClearColor, ColorCycle};
