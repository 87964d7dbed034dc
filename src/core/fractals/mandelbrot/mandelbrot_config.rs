use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::data::viewport::Viewport;
use crate::core::navigation::limits::NavigationLimits;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const MAX_ITERATIONS_LIMIT: u32 = 100_000;

/// Coerces a raw iteration count from a UI control into a usable budget.
#[must_use]
pub fn coerce_max_iterations(raw: i64) -> u32 {
    let clamped = raw.clamp(1, i64::from(MAX_ITERATIONS_LIMIT));
    u32::try_from(clamped).unwrap_or(DEFAULT_MAX_ITERATIONS)
}

/// Session settings for exploring the Mandelbrot set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub viewport: Viewport,
    pub limits: NavigationLimits,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            viewport: Viewport::default(),
            limits: NavigationLimits::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn canvas(&self) -> Result<CanvasSize, CanvasSizeError> {
        CanvasSize::new(self.width, self.height)
    }

    pub fn render_config(&self) -> Result<RenderConfig, RenderConfigError> {
        RenderConfig::new(self.width, self.height, self.max_iterations)
    }

    pub fn reset_view(&mut self) {
        self.viewport = Viewport::default();
        self.max_iterations = DEFAULT_MAX_ITERATIONS;
    }
}
