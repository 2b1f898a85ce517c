//! Graphics layer
//!
//! Owns the connection to the graphics API: instance, physical device list
//! and the presentation surface bound to the window. This module does not
//! depend on the window module; windows reach it through
//! [`SurfaceProvider`].

pub mod backend;
pub mod error;
pub mod instance;
pub mod vulkan;

pub use backend::{
    ApplicationDescriptor, BackendInstance, GraphicsBackend, PhysicalDeviceSummary, SurfaceProvider, ENGINE_NAME,
};
pub use error::{GraphicsError, GraphicsResult};
pub use instance::{GraphicsInstance, InstanceState};
pub use vulkan::{VulkanBackend, VulkanInstance};
