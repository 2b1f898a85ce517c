//! Vulkan backend built on `ash`
//!
//! The loader is resolved when the first instance is created rather than
//! when the backend value is built, so a missing driver surfaces as an
//! instance creation failure like any other driver rejection.

use std::ffi::{c_char, CStr, CString};

use ash::extensions::khr;
use ash::{vk, Entry, Instance};

use super::backend::{ApplicationDescriptor, BackendInstance, GraphicsBackend, PhysicalDeviceSummary};

/// Graphics backend talking to the system Vulkan loader
#[derive(Debug, Default)]
pub struct VulkanBackend;

impl VulkanBackend {
    /// Create the backend; no driver calls happen yet
    pub const fn new() -> Self {
        Self
    }
}

/// Live Vulkan instance with its surface loader
pub struct VulkanInstance {
    // Keeps the loader library mapped for as long as the instance lives
    _entry: Entry,
    instance: Instance,
    surface_loader: khr::Surface,
}

fn to_cstring(value: &str) -> Result<CString, vk::Result> {
    CString::new(value).map_err(|e| {
        log::error!("String {:?} contains an interior NUL byte: {}", value, e);
        vk::Result::ERROR_INITIALIZATION_FAILED
    })
}

impl GraphicsBackend for VulkanBackend {
    type Instance = VulkanInstance;

    fn create_instance(
        &mut self,
        descriptor: &ApplicationDescriptor,
        extensions: &[String],
    ) -> Result<VulkanInstance, vk::Result> {
        let entry = unsafe { Entry::load() }.map_err(|e| {
            log::error!("Failed to load Vulkan: {}", e);
            vk::Result::ERROR_INCOMPATIBLE_DRIVER
        })?;

        let app_name = to_cstring(&descriptor.application_name)?;
        let engine_name = to_cstring(&descriptor.engine_name)?;
        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(descriptor.application_version)
            .engine_name(&engine_name)
            .engine_version(descriptor.engine_version)
            .api_version(descriptor.api_version);

        let extension_names = extensions
            .iter()
            .map(|ext| to_cstring(ext))
            .collect::<Result<Vec<_>, _>>()?;
        let extension_ptrs: Vec<*const c_char> = extension_names
            .iter()
            .map(|ext| ext.as_ptr())
            .collect();

        // No layers: validation is left to the environment (VK_INSTANCE_LAYERS)
        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs);

        let instance = unsafe { entry.create_instance(&create_info, None)? };
        let surface_loader = khr::Surface::new(&entry, &instance);
        log::info!(
            "Created Vulkan instance for {:?} with {} extension(s)",
            descriptor.application_name,
            extensions.len()
        );

        Ok(VulkanInstance {
            _entry: entry,
            instance,
            surface_loader,
        })
    }
}

impl BackendInstance for VulkanInstance {
    fn handle(&self) -> vk::Instance {
        self.instance.handle()
    }

    fn enumerate_physical_devices(&self) -> Result<Vec<vk::PhysicalDevice>, vk::Result> {
        unsafe { self.instance.enumerate_physical_devices() }
    }

    fn describe_physical_device(&self, device: vk::PhysicalDevice) -> PhysicalDeviceSummary {
        let properties = unsafe { self.instance.get_physical_device_properties(device) };
        let name = unsafe { CStr::from_ptr(properties.device_name.as_ptr()) }
            .to_string_lossy()
            .into_owned();

        PhysicalDeviceSummary {
            name,
            device_type: properties.device_type,
            api_version: properties.api_version,
        }
    }

    fn destroy_surface(&self, surface: vk::SurfaceKHR) {
        unsafe {
            self.surface_loader.destroy_surface(surface, None);
        }
    }

    fn destroy(self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}
