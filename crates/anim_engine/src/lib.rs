//! # Anim Engine
//!
//! Window and Vulkan bootstrap for the animation engine: opens a GLFW
//! window, creates a Vulkan instance, lists the physical devices, binds a
//! presentation surface and runs a clear-color loop until the window closes.
//!
//! ## Lifecycle
//!
//! Creation order is windowing library, window, instance, devices, surface.
//! Teardown is the exact reverse, on [`window::WindowSystem::cleanup`], on
//! drop, and on every initialization failure.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anim_engine::prelude::*;
//!
//! let mut system = WindowSystem::new(GlfwBackend::new(60), VulkanBackend::new());
//! if system.initialize(640, 480, "Test Window").is_ok() {
//!     system.run_loop();
//!     system.cleanup();
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod graphics;
pub mod render;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{AppConfig, Config, ConfigError},
        graphics::{GraphicsError, GraphicsInstance, InstanceState, VulkanBackend},
        render::{ClearColor, ColorCycle},
        window::{GlfwBackend, InitError, NativeWindow, WindowError, WindowSystem},
    };
}
