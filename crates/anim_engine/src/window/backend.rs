//! Windowing library capability traits
//!
//! The windowing library is split into three owned values so that Rust's
//! drop order matches the teardown order the native APIs require:
//!
//! - [`WindowingBackend`] is a factory; `bootstrap` initializes the library
//!   and hands back the context.
//! - [`WindowingContext`] is the bootstrapped library. Dropping it shuts the
//!   library down.
//! - [`NativeWindow`] is one OS window. Dropping it destroys the window. It
//!   must be dropped before the context that created it.

use thiserror::Error;

use crate::graphics::SurfaceProvider;
use crate::render::ClearColor;

/// Window management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The windowing library could not be initialized
    #[error("windowing library initialization failed: {0}")]
    InitializationFailed(String),

    /// The window could not be created
    #[error("window creation failed: {0}")]
    CreationFailed(String),

    /// The requested window makes no sense
    #[error("invalid window descriptor: {0}")]
    InvalidDescriptor(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Everything needed to create a window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Whether the user may resize the window
    pub resizable: bool,
}

impl WindowDescriptor {
    /// A fixed-size window
    ///
    /// Windows are always created without a client API context; the
    /// graphics backend owns presentation.
    pub fn fixed(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            resizable: false,
        }
    }

    /// Reject zero dimensions and empty titles
    pub fn validate(&self) -> WindowResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WindowError::InvalidDescriptor(format!(
                "size {}x{} has a zero dimension",
                self.width, self.height
            )));
        }
        if self.title.is_empty() {
            return Err(WindowError::InvalidDescriptor("title is empty".to_string()));
        }
        Ok(())
    }
}

/// Factory for a bootstrapped windowing library
pub trait WindowingBackend {
    /// Bootstrapped library state
    type Context: WindowingContext;

    /// Initialize the library
    fn bootstrap(&mut self) -> WindowResult<Self::Context>;
}

/// A bootstrapped windowing library; shuts down on drop
pub trait WindowingContext {
    /// Window type created by this library
    type Window: NativeWindow;

    /// Whether a Vulkan loader with presentation support is present
    fn vulkan_supported(&self) -> bool;

    /// Create a window from `descriptor`
    fn create_window(&mut self, descriptor: &WindowDescriptor) -> WindowResult<Self::Window>;

    /// Process pending window system events without blocking
    fn poll_events(&mut self);
}

/// One native window; destroyed on drop
pub trait NativeWindow: SurfaceProvider {
    /// Whether the close flag has been set
    fn should_close(&self) -> bool;

    /// Set or clear the close flag
    fn set_should_close(&mut self, should_close: bool);

    /// Discard queued window events, returning how many there were
    fn drain_events(&mut self) -> usize;

    /// Clear to `color` and present the frame
    ///
    /// May block for a bounded time to pace frames.
    fn present(&mut self, color: ClearColor);
}
