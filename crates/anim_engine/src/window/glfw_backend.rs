//! GLFW-based window management for Vulkan rendering
//!
//! GLFW reports errors through a process-wide callback. The callback logs
//! each error and keeps the latest description so that later failures can
//! attach it as a diagnostic, the way `glfwGetError` would.

use std::sync::Mutex;

use ash::vk;

use super::backend::{NativeWindow, WindowDescriptor, WindowError, WindowResult, WindowingBackend, WindowingContext};
use crate::foundation::time::FramePacer;
use crate::graphics::SurfaceProvider;
use crate::render::ClearColor;

static LAST_ERROR: Mutex<Option<String>> = Mutex::new(None);

fn record_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {:?}: {}", error, description);
    if let Ok(mut last) = LAST_ERROR.lock() {
        *last = Some(description);
    }
}

/// Take the most recent GLFW error description, clearing it
pub fn take_last_error() -> Option<String> {
    LAST_ERROR.lock().ok().and_then(|mut last| last.take())
}

/// GLFW windowing backend
#[derive(Debug, Clone)]
pub struct GlfwBackend {
    target_fps: u32,
}

impl GlfwBackend {
    /// Create a backend whose windows pace presentation to `target_fps`
    pub const fn new(target_fps: u32) -> Self {
        Self { target_fps }
    }
}

impl WindowingBackend for GlfwBackend {
    type Context = GlfwContext;

    fn bootstrap(&mut self) -> WindowResult<GlfwContext> {
        let glfw = glfw::init(record_error).map_err(|e| {
            let reason = take_last_error().unwrap_or_else(|| format!("{:?}", e));
            WindowError::InitializationFailed(reason)
        })?;
        log::debug!("GLFW {} initialized", glfw::get_version_string());

        Ok(GlfwContext {
            glfw,
            target_fps: self.target_fps,
        })
    }
}

/// Bootstrapped GLFW library
pub struct GlfwContext {
    glfw: glfw::Glfw,
    target_fps: u32,
}

impl WindowingContext for GlfwContext {
    type Window = GlfwWindow;

    fn vulkan_supported(&self) -> bool {
        self.glfw.vulkan_supported()
    }

    fn create_window(&mut self, descriptor: &WindowDescriptor) -> WindowResult<GlfwWindow> {
        descriptor.validate()?;

        self.glfw.window_hint(glfw::WindowHint::Resizable(descriptor.resizable));
        // No OpenGL context; Vulkan manages presentation
        self.glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));

        let (mut window, events) = self
            .glfw
            .create_window(descriptor.width, descriptor.height, &descriptor.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                WindowError::CreationFailed(
                    take_last_error().unwrap_or_else(|| "Could not create window".to_string()),
                )
            })?;

        window.set_close_polling(true);

        let required_extensions = self.glfw.get_required_instance_extensions().unwrap_or_default();
        log::debug!(
            "Created {}x{} window {:?}",
            descriptor.width,
            descriptor.height,
            descriptor.title
        );

        Ok(GlfwWindow {
            window,
            events,
            required_extensions,
            pacer: FramePacer::new(self.target_fps),
        })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
}

impl Drop for GlfwContext {
    fn drop(&mut self) {
        log::debug!("Shutting down GLFW");
    }
}

/// GLFW window without a client API
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    required_extensions: Vec<String>,
    pacer: FramePacer,
}

impl NativeWindow for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn drain_events(&mut self) -> usize {
        glfw::flush_messages(&self.events)
            .inspect(|(_, event)| log::trace!("Ignoring window event {:?}", event))
            .count()
    }

    fn present(&mut self, color: ClearColor) {
        // A NoApi window has no buffers to swap; the clear is recorded and the
        // pacer takes the place of the swap interval.
        log::trace!("Clear {:?}", color.to_array());
        self.pacer.wait_for_next_frame();
    }
}

impl SurfaceProvider for GlfwWindow {
    fn required_instance_extensions(&self) -> Vec<String> {
        self.required_extensions.clone()
    }

    fn create_surface(&self, instance: vk::Instance) -> Result<vk::SurfaceKHR, vk::Result> {
        let mut surface = vk::SurfaceKHR::null();
        let result = self.window.create_window_surface(instance, std::ptr::null(), &mut surface);

        if result == vk::Result::SUCCESS {
            Ok(surface)
        } else {
            Err(result)
        }
    }

    fn last_error(&self) -> Option<String> {
        take_last_error()
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        log::debug!("Destroying window");
    }
}
