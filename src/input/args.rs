//! Command-line view settings shared by the file renderer and the window.

use clap::Args;

use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, MandelbrotConfig,
    coerce_max_iterations,
};

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ViewArgs {
    /// Canvas width in pixels
    #[arg(long, env = "MANDELBROT_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, env = "MANDELBROT_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Iteration budget; values below 1 are raised to 1
    #[arg(
        short = 'i',
        long,
        env = "MANDELBROT_MAX_ITERATIONS",
        default_value_t = i64::from(DEFAULT_MAX_ITERATIONS),
        allow_negative_numbers = true
    )]
    pub max_iterations: i64,

    /// Real part of the view center
    #[arg(long, env = "MANDELBROT_CENTER_X", default_value_t = -0.6, allow_negative_numbers = true)]
    pub center_x: f64,

    /// Imaginary part of the view center
    #[arg(long, env = "MANDELBROT_CENTER_Y", default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_y: f64,

    /// Zoom factor, clamped to the supported range
    #[arg(long, env = "MANDELBROT_ZOOM", default_value_t = 1.0)]
    pub zoom: f64,
}

impl ViewArgs {
    #[must_use]
    pub fn to_config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            width: self.width,
            height: self.height,
            max_iterations: coerce_max_iterations(self.max_iterations),
            viewport: Viewport::new(self.center_x, self.center_y, self.zoom),
            ..MandelbrotConfig::default()
        }
    }
}
