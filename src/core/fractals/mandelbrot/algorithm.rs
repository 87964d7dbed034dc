use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Squared escape radius. `|z| > 2` guarantees divergence.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z ← z² + c` iterations before `|z|² > 4`, starting from `z = 0`.
///
/// Returns `max_iterations` when the orbit stays bounded for the whole budget.
/// A non-finite magnitude counts as escaped, so the loop always terminates
/// with a count in `[0, max_iterations]`.
#[must_use]
#[inline]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        // Negated comparison so NaN escapes too.
        if !(z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED) {
            return iteration;
        }
        z = z.square() + c;
    }

    max_iterations
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    config: RenderConfig,
    viewport: Viewport,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(config: RenderConfig, viewport: Viewport) -> Self {
        Self { config, viewport }
    }

    #[must_use]
    pub fn config(&self) -> RenderConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_complex_coords(
            f64::from(pixel.x),
            f64::from(pixel.y),
            self.config.canvas(),
            &self.viewport,
        );

        escape_time(c, self.config.max_iterations())
    }
}
