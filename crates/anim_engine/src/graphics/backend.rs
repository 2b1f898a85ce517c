//! Graphics backend capability traits
//!
//! `GraphicsInstance` only talks to the driver through these traits so the
//! lifecycle logic can run against a fake backend in tests. Status codes are
//! plain `vk::Result` values; handles are plain `vk` handles.

use ash::vk;

/// Engine name reported to the driver
pub const ENGINE_NAME: &str = "Game Animations Programming";

/// Application description handed to the driver at instance creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDescriptor {
    /// Application name
    pub application_name: String,
    /// Application version, packed with `vk::make_api_version`
    pub application_version: u32,
    /// Engine name
    pub engine_name: String,
    /// Engine version, packed with `vk::make_api_version`
    pub engine_version: u32,
    /// Lowest API version the application needs
    pub api_version: u32,
}

impl ApplicationDescriptor {
    /// Describe `application_name` with the fixed engine identity
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            application_version: vk::make_api_version(0, 0, 0, 1),
            engine_name: ENGINE_NAME.to_string(),
            engine_version: vk::make_api_version(0, 1, 0, 0),
            api_version: vk::API_VERSION_1_1,
        }
    }
}

/// What gets logged about each enumerated device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalDeviceSummary {
    /// Driver-reported device name
    pub name: String,
    /// Integrated, discrete, virtual, CPU...
    pub device_type: vk::PhysicalDeviceType,
    /// Highest API version the device supports
    pub api_version: u32,
}

impl std::fmt::Display for PhysicalDeviceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:?}, Vulkan {}.{}.{})",
            self.name,
            self.device_type,
            vk::api_version_major(self.api_version),
            vk::api_version_minor(self.api_version),
            vk::api_version_patch(self.api_version),
        )
    }
}

/// Entry point of a graphics API implementation
pub trait GraphicsBackend {
    /// Live instance type produced by this backend
    type Instance: BackendInstance;

    /// Create an instance enabling exactly `extensions` and no layers
    fn create_instance(
        &mut self,
        descriptor: &ApplicationDescriptor,
        extensions: &[String],
    ) -> Result<Self::Instance, vk::Result>;
}

/// A created graphics API instance
///
/// Nothing here is released on drop; the owner calls `destroy_surface` and
/// `destroy` in that order.
pub trait BackendInstance {
    /// Raw handle, used to bind surfaces
    fn handle(&self) -> vk::Instance;

    /// List every physical device the instance can see
    fn enumerate_physical_devices(&self) -> Result<Vec<vk::PhysicalDevice>, vk::Result>;

    /// Name and type of a device, for logging
    fn describe_physical_device(&self, device: vk::PhysicalDevice) -> PhysicalDeviceSummary;

    /// Release a surface created against this instance
    fn destroy_surface(&self, surface: vk::SurfaceKHR);

    /// Release the instance itself
    fn destroy(self);
}

/// The window side of presentation
///
/// Implemented by native windows so the graphics layer can ask which
/// extensions presentation needs and bind a surface without knowing which
/// windowing library is underneath.
pub trait SurfaceProvider {
    /// Instance extensions the windowing library needs; empty means it cannot present
    fn required_instance_extensions(&self) -> Vec<String>;

    /// Bind a presentation surface to this window under `instance`
    fn create_surface(&self, instance: vk::Instance) -> Result<vk::SurfaceKHR, vk::Result>;

    /// Most recent diagnostic text from the windowing library, if any
    fn last_error(&self) -> Option<String>;
}
