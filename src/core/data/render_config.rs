use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RenderConfigError {
    #[error("invalid render configuration: {0}")]
    Canvas(#[from] CanvasSizeError),
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Parameters for one render pass: canvas size and iteration budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    canvas: CanvasSize,
    max_iterations: u32,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Result<Self, RenderConfigError> {
        let canvas = CanvasSize::new(width, height)?;

        Self::for_canvas(canvas, max_iterations)
    }

    pub fn for_canvas(canvas: CanvasSize, max_iterations: u32) -> Result<Self, RenderConfigError> {
        if max_iterations == 0 {
            return Err(RenderConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            canvas,
            max_iterations,
        })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
