//! Window system: initialization order, main loop and teardown
//!
//! Creation order is library, window, graphics instance, device list,
//! surface. Teardown is the exact reverse. The struct fields are declared
//! in teardown order, so dropping a `WindowSystem` without calling
//! [`WindowSystem::cleanup`] still releases everything correctly.
//!
//! If any initialization step fails, everything created by the earlier
//! steps is released before the error is returned, including the window
//! and the library bootstrap when graphics setup is what failed.

use thiserror::Error;

use super::backend::{NativeWindow, WindowDescriptor, WindowError, WindowingBackend, WindowingContext};
use crate::config::AppConfig;
use crate::foundation::time::Timer;
use crate::graphics::{GraphicsBackend, GraphicsError, GraphicsInstance, InstanceState};
use crate::render::{ClearColor, ColorCycle};

/// Native window type of a windowing backend
pub type WindowOf<W> = <<W as WindowingBackend>::Context as WindowingContext>::Window;

/// Why [`WindowSystem::initialize`] failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// `initialize` may only be attempted once
    #[error("window system was already initialized")]
    AlreadyInitialized,

    /// Zero size or empty title
    #[error("invalid window request: {0}")]
    InvalidDescriptor(WindowError),

    /// The windowing library could not start
    #[error("windowing library bootstrap failed: {0}")]
    Bootstrap(WindowError),

    /// No Vulkan presentation support
    #[error("Vulkan is not supported")]
    VulkanUnsupported,

    /// The native window could not be created
    #[error("could not create window: {0}")]
    WindowCreation(WindowError),

    /// Instance, device enumeration or surface creation failed
    #[error("could not init Vulkan: {0}")]
    Graphics(#[from] GraphicsError),
}

impl InitError {
    /// Name of the initialization step that failed
    pub const fn step(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized | Self::InvalidDescriptor(_) => "precondition",
            Self::Bootstrap(_) => "bootstrap",
            Self::VulkanUnsupported => "capability",
            Self::WindowCreation(_) => "window",
            Self::Graphics(GraphicsError::NoPresentationExtensions | GraphicsError::InstanceCreation { .. }) => {
                "instance"
            }
            Self::Graphics(GraphicsError::DeviceEnumeration(_) | GraphicsError::NoCapableDevice { .. }) => "devices",
            Self::Graphics(GraphicsError::SurfaceCreation { .. }) => "surface",
            Self::Graphics(GraphicsError::InvalidState { .. }) => "graphics",
        }
    }
}

/// Owner of the window lifecycle and the presentation loop
pub struct WindowSystem<W: WindowingBackend, G: GraphicsBackend> {
    // Field order is teardown order
    graphics: GraphicsInstance<G>,
    window: Option<WindowOf<W>>,
    context: Option<W::Context>,
    windowing: W,
    application_name: String,
    color: ColorCycle,
    timer: Timer,
}

impl<W: WindowingBackend, G: GraphicsBackend> WindowSystem<W, G> {
    /// Create an uninitialized window system with default settings
    pub fn new(windowing: W, graphics: G) -> Self {
        Self::from_config(windowing, graphics, &AppConfig::default())
    }

    /// Create an uninitialized window system using `config` for the
    /// application name and color step
    pub fn from_config(windowing: W, graphics: G, config: &AppConfig) -> Self {
        Self {
            graphics: GraphicsInstance::new(graphics),
            window: None,
            context: None,
            windowing,
            application_name: config.application_name.clone(),
            color: ColorCycle::new(config.color_step),
            timer: Timer::new(),
        }
    }

    /// Bring up the windowing library, the window and the graphics instance
    ///
    /// Steps run in order and stop at the first failure; see the module
    /// docs for what is rolled back. Once graphics setup has been attempted
    /// the system cannot be initialized again.
    pub fn initialize(&mut self, width: u32, height: u32, title: &str) -> Result<(), InitError> {
        if self.context.is_some() || self.graphics.state() != InstanceState::Uninitialized {
            log::error!("initialize: window system was already initialized");
            return Err(InitError::AlreadyInitialized);
        }

        let descriptor = WindowDescriptor::fixed(width, height, title);
        descriptor.validate().map_err(|e| {
            log::error!("initialize: {}", e);
            InitError::InvalidDescriptor(e)
        })?;

        let mut context = self.windowing.bootstrap().map_err(|e| {
            log::error!("initialize: glfwInit() error: {}", e);
            InitError::Bootstrap(e)
        })?;

        if !context.vulkan_supported() {
            log::error!("initialize: Vulkan is not supported");
            return Err(InitError::VulkanUnsupported);
        }

        let window = context.create_window(&descriptor).map_err(|e| {
            log::error!("initialize: Could not create window: {}", e);
            InitError::WindowCreation(e)
        })?;

        if let Err(e) = self.graphics.build(&self.application_name, &window) {
            log::error!("initialize: Could not init Vulkan: {}", e);
            // Instance and surface must go before the window they were bound to;
            // `window` and `context` then drop in reverse declaration order.
            self.graphics.destroy();
            return Err(InitError::Graphics(e));
        }

        self.window = Some(window);
        self.context = Some(context);
        log::info!("initialize: Window successfully initialized");
        Ok(())
    }

    /// Run until the window's close flag is set
    ///
    /// Each iteration polls events, advances the clear color and presents.
    /// Returns immediately if the system is not initialized.
    pub fn run_loop(&mut self) {
        let (Some(context), Some(window)) = (self.context.as_mut(), self.window.as_mut()) else {
            log::warn!("run_loop: window system is not initialized");
            return;
        };

        log::info!("Starting main loop...");
        while !window.should_close() {
            context.poll_events();
            window.drain_events();

            let level = self.color.advance();
            window.present(ClearColor::gray(level));
            self.timer.update();
        }

        log::info!(
            "Main loop finished after {} frames ({:.1} fps average)",
            self.timer.frame_count(),
            self.timer.average_fps()
        );
    }

    /// Tear down surface, instance, window and library, in that order
    ///
    /// Does nothing if the system was never successfully initialized or has
    /// already been cleaned up.
    pub fn cleanup(&mut self) {
        if self.context.is_none() {
            log::debug!("cleanup: nothing to tear down");
            return;
        }

        log::info!("cleanup: Terminating Window");
        self.graphics.destroy();
        drop(self.window.take());
        drop(self.context.take());
    }

    /// Whether `initialize` succeeded and `cleanup` has not run yet
    pub const fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    /// The graphics instance
    pub const fn graphics(&self) -> &GraphicsInstance<G> {
        &self.graphics
    }

    /// The native window while it exists
    pub const fn window(&self) -> Option<&WindowOf<W>> {
        self.window.as_ref()
    }

    /// Mutable access to the native window while it exists
    pub fn window_mut(&mut self) -> Option<&mut WindowOf<W>> {
        self.window.as_mut()
    }

    /// The windowing backend
    pub const fn windowing(&self) -> &W {
        &self.windowing
    }

    /// The cycling clear color
    pub const fn color(&self) -> &ColorCycle {
        &self.color
    }

    /// Frames presented by `run_loop` so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }
}
