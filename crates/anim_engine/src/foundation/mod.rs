//! Foundation module - Core utilities shared by the window and graphics layers
//!
//! - Logging setup
//! - Frame timing and pacing

pub mod logging;
pub mod time;
