//! Fake windowing and graphics backends for tests
//!
//! Every fake shares a [`Journal`] that records lifecycle events in the
//! order they happen (`library:bootstrap`, `window:create`,
//! `instance:create`, `surface:create` and the matching `destroy` /
//! `shutdown` events), so tests can assert on creation and teardown order.

use std::cell::RefCell;
use std::rc::Rc;

use ash::vk::{self, Handle};

use crate::graphics::{
    ApplicationDescriptor, BackendInstance, GraphicsBackend, PhysicalDeviceSummary, SurfaceProvider,
};
use crate::render::ClearColor;
use crate::window::{NativeWindow, WindowDescriptor, WindowError, WindowResult, WindowingBackend, WindowingContext};

const FAKE_INSTANCE: u64 = 0x1000;
const FAKE_SURFACE: u64 = 0x2000;
const FAKE_DEVICE_BASE: u64 = 0x3000;

#[derive(Default)]
struct JournalState {
    events: Vec<String>,
    library_live: bool,
    polls: usize,
    presented: Vec<f32>,
    window_descriptor: Option<WindowDescriptor>,
}

/// Shared record of everything the fakes did
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<JournalState>>);

impl Journal {
    fn record(&self, event: &str) {
        let mut state = self.0.borrow_mut();
        match event {
            "library:bootstrap" => state.library_live = true,
            "library:shutdown" => state.library_live = false,
            _ => {}
        }
        state.events.push(event.to_string());
    }

    /// Lifecycle events so far
    pub fn events(&self) -> Vec<String> {
        self.0.borrow().events.clone()
    }

    /// Lifecycle events containing `pattern`
    pub fn events_matching(&self, pattern: &str) -> Vec<String> {
        self.events().into_iter().filter(|event| event.contains(pattern)).collect()
    }

    /// Whether `event` was recorded
    pub fn contains(&self, event: &str) -> bool {
        self.0.borrow().events.iter().any(|e| e == event)
    }

    /// How many times `event` was recorded
    pub fn count(&self, event: &str) -> usize {
        self.0.borrow().events.iter().filter(|e| *e == event).count()
    }

    /// Forget recorded events; the library state is kept
    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    /// Whether the library is bootstrapped right now
    pub fn library_live(&self) -> bool {
        self.0.borrow().library_live
    }

    /// Number of event polls
    pub fn poll_count(&self) -> usize {
        self.0.borrow().polls
    }

    /// Gray level of every presented frame
    pub fn presented(&self) -> Vec<f32> {
        self.0.borrow().presented.clone()
    }

    /// Descriptor of the most recently created window
    pub fn last_window_descriptor(&self) -> Option<WindowDescriptor> {
        self.0.borrow().window_descriptor.clone()
    }
}

/// Fake windowing library; every knob is public
#[derive(Clone)]
pub struct FakeWindowing {
    journal: Journal,
    /// Make `bootstrap` fail
    pub fail_bootstrap: bool,
    /// Result of the presentation support probe
    pub vulkan_supported: bool,
    /// Make `create_window` fail
    pub fail_window: bool,
    /// Extensions reported as required for presentation
    pub extensions: Vec<String>,
    /// Outcome of surface creation
    pub surface_result: Result<vk::SurfaceKHR, vk::Result>,
    /// Diagnostic text reported by `last_error`
    pub error_message: Option<String>,
    /// Close flag turns on after this many presented frames
    pub close_after_frames: usize,
}

impl FakeWindowing {
    /// A library where every step succeeds
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            fail_bootstrap: false,
            vulkan_supported: true,
            fail_window: false,
            extensions: vec!["VK_KHR_surface".to_string(), "VK_KHR_xcb_surface".to_string()],
            surface_result: Ok(vk::SurfaceKHR::from_raw(FAKE_SURFACE)),
            error_message: None,
            close_after_frames: 1,
        }
    }

    /// A window built straight from these settings, without a context
    pub fn window(&self) -> FakeWindow {
        FakeWindow {
            settings: self.clone(),
            created: false,
            close_requested: false,
            frames: 0,
        }
    }
}

impl WindowingBackend for FakeWindowing {
    type Context = FakeContext;

    fn bootstrap(&mut self) -> WindowResult<FakeContext> {
        if self.fail_bootstrap {
            return Err(WindowError::InitializationFailed("fake bootstrap failure".to_string()));
        }
        self.journal.record("library:bootstrap");
        Ok(FakeContext { settings: self.clone() })
    }
}

/// Bootstrapped fake library
pub struct FakeContext {
    settings: FakeWindowing,
}

impl WindowingContext for FakeContext {
    type Window = FakeWindow;

    fn vulkan_supported(&self) -> bool {
        self.settings.vulkan_supported
    }

    fn create_window(&mut self, descriptor: &WindowDescriptor) -> WindowResult<FakeWindow> {
        if self.settings.fail_window {
            return Err(WindowError::CreationFailed("fake window failure".to_string()));
        }
        let journal = &self.settings.journal;
        journal.0.borrow_mut().window_descriptor = Some(descriptor.clone());
        journal.record("window:create");
        let mut window = self.settings.window();
        window.created = true;
        Ok(window)
    }

    fn poll_events(&mut self) {
        self.settings.journal.0.borrow_mut().polls += 1;
    }
}

impl Drop for FakeContext {
    fn drop(&mut self) {
        self.settings.journal.record("library:shutdown");
    }
}

/// Fake native window
pub struct FakeWindow {
    settings: FakeWindowing,
    created: bool,
    close_requested: bool,
    frames: usize,
}

impl NativeWindow for FakeWindow {
    fn should_close(&self) -> bool {
        self.close_requested || self.frames >= self.settings.close_after_frames
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.close_requested = should_close;
    }

    fn drain_events(&mut self) -> usize {
        0
    }

    fn present(&mut self, color: ClearColor) {
        self.frames += 1;
        self.settings.journal.0.borrow_mut().presented.push(color.r);
    }
}

impl SurfaceProvider for FakeWindow {
    fn required_instance_extensions(&self) -> Vec<String> {
        self.settings.extensions.clone()
    }

    fn create_surface(&self, instance: vk::Instance) -> Result<vk::SurfaceKHR, vk::Result> {
        assert_eq!(instance.as_raw(), FAKE_INSTANCE, "surface bound to an unknown instance");
        let surface = self.settings.surface_result?;
        self.settings.journal.record("surface:create");
        Ok(surface)
    }

    fn last_error(&self) -> Option<String> {
        self.settings.error_message.clone()
    }
}

impl Drop for FakeWindow {
    fn drop(&mut self) {
        // Windows built directly by tests were never "created"
        if self.created {
            self.settings.journal.record("window:destroy");
        }
    }
}

/// Fake graphics driver
pub struct FakeGraphics {
    journal: Journal,
    /// Outcome of instance creation
    pub instance_result: Result<(), vk::Result>,
    /// Number of physical devices reported
    pub device_count: u64,
    /// Make enumeration itself fail
    pub enumeration_error: Option<vk::Result>,
    requests: Vec<(ApplicationDescriptor, Vec<String>)>,
}

impl FakeGraphics {
    /// A driver with one device where every call succeeds
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            instance_result: Ok(()),
            device_count: 1,
            enumeration_error: None,
            requests: Vec::new(),
        }
    }

    /// How many times instance creation was requested
    pub fn attempts(&self) -> usize {
        self.requests.len()
    }

    /// Descriptor and extensions of the latest instance request
    pub fn last_request(&self) -> Option<(ApplicationDescriptor, Vec<String>)> {
        self.requests.last().cloned()
    }
}

impl GraphicsBackend for FakeGraphics {
    type Instance = FakeInstance;

    fn create_instance(
        &mut self,
        descriptor: &ApplicationDescriptor,
        extensions: &[String],
    ) -> Result<FakeInstance, vk::Result> {
        self.requests.push((descriptor.clone(), extensions.to_vec()));
        self.instance_result?;
        self.journal.record("instance:create");
        Ok(FakeInstance {
            journal: self.journal.clone(),
            device_count: self.device_count,
            enumeration_error: self.enumeration_error,
        })
    }
}

/// Fake live instance
pub struct FakeInstance {
    journal: Journal,
    device_count: u64,
    enumeration_error: Option<vk::Result>,
}

impl BackendInstance for FakeInstance {
    fn handle(&self) -> vk::Instance {
        vk::Instance::from_raw(FAKE_INSTANCE)
    }

    fn enumerate_physical_devices(&self) -> Result<Vec<vk::PhysicalDevice>, vk::Result> {
        if let Some(error) = self.enumeration_error {
            return Err(error);
        }
        Ok((0..self.device_count)
            .map(|index| vk::PhysicalDevice::from_raw(FAKE_DEVICE_BASE + index))
            .collect())
    }

    fn describe_physical_device(&self, device: vk::PhysicalDevice) -> PhysicalDeviceSummary {
        PhysicalDeviceSummary {
            name: format!("Fake GPU {}", device.as_raw() - FAKE_DEVICE_BASE),
            device_type: vk::PhysicalDeviceType::CPU,
            api_version: vk::API_VERSION_1_1,
        }
    }

    fn destroy_surface(&self, surface: vk::SurfaceKHR) {
        assert_eq!(surface.as_raw(), FAKE_SURFACE, "destroying an unknown surface");
        self.journal.record("surface:destroy");
    }

    fn destroy(self) {
        self.journal.record("instance:destroy");
    }
}
