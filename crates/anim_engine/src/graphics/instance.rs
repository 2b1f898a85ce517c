//! Graphics instance lifecycle
//!
//! `GraphicsInstance` owns the API instance, the enumerated device list and
//! the presentation surface. It moves strictly forward through
//! [`InstanceState`]; each operation checks that it is being called from the
//! state right before it.
//!
//! Teardown always releases the surface before the instance. Dropping a
//! `GraphicsInstance` that was never destroyed performs the same teardown.

use ash::vk;

use super::backend::{ApplicationDescriptor, BackendInstance, GraphicsBackend, SurfaceProvider};
use super::error::{GraphicsError, GraphicsResult, NO_DIAGNOSTIC};

/// Lifecycle state of a [`GraphicsInstance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// Nothing created yet
    Uninitialized,
    /// API instance exists
    InstanceCreated,
    /// Physical devices listed
    DevicesEnumerated,
    /// Surface bound to the window
    SurfaceCreated,
    /// Everything released; terminal
    Destroyed,
}

/// Owner of the API instance and presentation surface
pub struct GraphicsInstance<B: GraphicsBackend> {
    backend: B,
    state: InstanceState,
    instance: Option<B::Instance>,
    devices: Vec<vk::PhysicalDevice>,
    surface: Option<vk::SurfaceKHR>,
}

impl<B: GraphicsBackend> GraphicsInstance<B> {
    /// Wrap a backend; nothing is created until [`Self::create_instance`]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: InstanceState::Uninitialized,
            instance: None,
            devices: Vec::new(),
            surface: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> InstanceState {
        self.state
    }

    /// The backend this instance was built from
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Raw instance handle while the instance is alive
    pub fn instance_handle(&self) -> Option<vk::Instance> {
        self.instance.as_ref().map(BackendInstance::handle)
    }

    /// Devices found by [`Self::enumerate_devices`]
    pub fn devices(&self) -> &[vk::PhysicalDevice] {
        &self.devices
    }

    /// Surface handle while the surface is alive
    pub fn surface(&self) -> Option<vk::SurfaceKHR> {
        self.surface
    }

    fn expect_state(&self, expected: InstanceState) -> GraphicsResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GraphicsError::InvalidState { expected, actual: self.state })
        }
    }

    /// Create the API instance with the extensions `target` needs to present
    ///
    /// Fails with [`GraphicsError::NoPresentationExtensions`] without calling
    /// the driver when the windowing library reports no extensions.
    pub fn create_instance(&mut self, application_name: &str, target: &dyn SurfaceProvider) -> GraphicsResult<()> {
        self.expect_state(InstanceState::Uninitialized)?;

        let extensions = target.required_instance_extensions();
        if extensions.is_empty() {
            log::error!("create_instance: no Vulkan extensions found");
            return Err(GraphicsError::NoPresentationExtensions);
        }
        log::debug!("Requesting instance extensions: {:?}", extensions);

        let descriptor = ApplicationDescriptor::new(application_name);
        let instance = self.backend.create_instance(&descriptor, &extensions).map_err(|result| {
            let diagnostic = diagnostic(target);
            log::error!("create_instance: Could not create Instance ({:?}): {}", result, diagnostic);
            GraphicsError::InstanceCreation { result, diagnostic }
        })?;

        self.instance = Some(instance);
        self.state = InstanceState::InstanceCreated;
        Ok(())
    }

    /// List the physical devices visible to the instance
    ///
    /// Only enumerates; no device is picked. `diagnostics` supplies the
    /// windowing library's error text when nothing is found.
    pub fn enumerate_devices(&mut self, diagnostics: &dyn SurfaceProvider) -> GraphicsResult<&[vk::PhysicalDevice]> {
        self.expect_state(InstanceState::InstanceCreated)?;
        let Some(instance) = self.instance.as_ref() else {
            return Err(GraphicsError::InvalidState {
                expected: InstanceState::InstanceCreated,
                actual: self.state,
            });
        };

        let devices = instance.enumerate_physical_devices().map_err(|result| {
            log::error!("enumerate_devices: enumeration failed ({:?})", result);
            GraphicsError::DeviceEnumeration(result)
        })?;

        if devices.is_empty() {
            let diagnostic = diagnostic(diagnostics);
            log::error!("enumerate_devices: No Vulkan capable GPU found: {}", diagnostic);
            return Err(GraphicsError::NoCapableDevice { diagnostic });
        }

        log::info!("Found {} physical device(s):", devices.len());
        for (index, device) in devices.iter().enumerate() {
            log::info!("  [{}] {}", index, instance.describe_physical_device(*device));
        }

        self.devices = devices;
        self.state = InstanceState::DevicesEnumerated;
        Ok(&self.devices)
    }

    /// Bind a presentation surface to `target`
    pub fn create_surface(&mut self, target: &dyn SurfaceProvider) -> GraphicsResult<()> {
        self.expect_state(InstanceState::DevicesEnumerated)?;
        let Some(handle) = self.instance_handle() else {
            return Err(GraphicsError::InvalidState {
                expected: InstanceState::DevicesEnumerated,
                actual: self.state,
            });
        };

        let surface = target.create_surface(handle).map_err(|result| {
            let diagnostic = diagnostic(target);
            log::error!("create_surface: Could not create Vulkan surface ({:?}): {}", result, diagnostic);
            GraphicsError::SurfaceCreation { result, diagnostic }
        })?;

        self.surface = Some(surface);
        self.state = InstanceState::SurfaceCreated;
        Ok(())
    }

    /// Run instance creation, enumeration and surface creation in order
    ///
    /// Stops at the first failure. Whatever was created stays owned by
    /// `self` and is released by [`Self::destroy`] or on drop.
    pub fn build(&mut self, application_name: &str, target: &dyn SurfaceProvider) -> GraphicsResult<()> {
        self.create_instance(application_name, target)?;
        self.enumerate_devices(target)?;
        self.create_surface(target)
    }

    /// Release the surface, then the instance
    ///
    /// No-op before anything was created and after a previous destroy.
    pub fn destroy(&mut self) {
        if matches!(self.state, InstanceState::Uninitialized | InstanceState::Destroyed) {
            return;
        }

        log::debug!("Destroying graphics instance from state {:?}", self.state);
        if let Some(instance) = self.instance.take() {
            if let Some(surface) = self.surface.take() {
                instance.destroy_surface(surface);
            }
            instance.destroy();
        }
        self.devices.clear();
        self.state = InstanceState::Destroyed;
    }
}

impl<B: GraphicsBackend> Drop for GraphicsInstance<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn diagnostic(source: &dyn SurfaceProvider) -> String {
    source.last_error().unwrap_or_else(|| NO_DIAGNOSTIC.to_string())
}
