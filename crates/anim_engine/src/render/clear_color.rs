//! Cycling clear color

use crate::config::DEFAULT_COLOR_STEP;

/// RGBA color used to clear a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl ClearColor {
    /// Opaque gray with all color channels at `level`
    pub const fn gray(level: f32) -> Self {
        Self { r: level, g: level, b: level, a: 1.0 }
    }

    /// Channels as an array, in the layout Vulkan clear values expect
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A scalar that ramps from 0 toward 1 by a fixed step and wraps to 0
///
/// The value always stays in `[0, 1)`: a step that would reach or pass 1
/// resets it to exactly 0 instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCycle {
    value: f32,
    step: f32,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR_STEP)
    }
}

impl ColorCycle {
    /// Start a cycle at 0 advancing by `step` each frame
    ///
    /// Steps outside `(0, 1)` would never move or never stay below 1, so they
    /// are replaced with the default step.
    pub fn new(step: f32) -> Self {
        let step = if step > 0.0 && step < 1.0 {
            step
        } else {
            log::warn!("Color step {} is outside (0, 1), using {}", step, DEFAULT_COLOR_STEP);
            DEFAULT_COLOR_STEP
        };
        Self { value: 0.0, step }
    }

    /// Current value
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Increment applied per frame
    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Move one step forward and return the new value
    pub fn advance(&mut self) -> f32 {
        let next = self.value + self.step;
        self.value = if next >= 1.0 { 0.0 } else { next };
        self.value
    }

    /// Current value as a clear color
    pub const fn color(&self) -> ClearColor {
        ClearColor::gray(self.value)
    }
}
