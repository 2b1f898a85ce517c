//! Window layer
//!
//! Owns the windowing library, the native window and the main loop, and
//! decides the order in which everything is created and torn down.

pub mod backend;
pub mod glfw_backend;
pub mod system;

pub use backend::{
    NativeWindow, WindowDescriptor, WindowError, WindowResult, WindowingBackend, WindowingContext,
};
pub use glfw_backend::{GlfwBackend, GlfwContext, GlfwWindow};
pub use system::{InitError, WindowSystem};
