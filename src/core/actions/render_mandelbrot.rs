use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::raster_buffer::{RasterBuffer, RasterBufferError};
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::HslColourMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("failed to assemble raster: {0}")]
    Raster(#[from] RasterBufferError),
}

/// Renders one frame of the Mandelbrot set, rows computed in parallel.
///
/// The output depends only on `config` and `viewport`.
pub fn render_mandelbrot(
    config: &RenderConfig,
    viewport: &Viewport,
) -> Result<RasterBuffer, RenderError> {
    let started = Instant::now();
    let algorithm = MandelbrotAlgorithm::new(*config, *viewport);
    let iterations = generate_fractal_parallel_rayon(config.canvas(), &algorithm);
    let raster = colour_iterations(config, &iterations)?;

    debug!(
        "rendered {}x{} at ({}, {}) zoom {} with {} iterations in {:?}",
        config.width(),
        config.height(),
        viewport.center_x(),
        viewport.center_y(),
        viewport.zoom(),
        config.max_iterations(),
        started.elapsed()
    );

    Ok(raster)
}

/// Single-threaded counterpart of [`render_mandelbrot`]; produces the same bytes.
pub fn render_mandelbrot_serial(
    config: &RenderConfig,
    viewport: &Viewport,
) -> Result<RasterBuffer, RenderError> {
    let algorithm = MandelbrotAlgorithm::new(*config, *viewport);
    let iterations = generate_fractal_serial(config.canvas(), &algorithm);

    colour_iterations(config, &iterations)
}

fn colour_iterations(config: &RenderConfig, iterations: &[u32]) -> Result<RasterBuffer, RenderError> {
    let colour_map = HslColourMap::new(config.max_iterations());

    let raster = generate_pixel_buffer(iterations, &colour_map, config.canvas())?;

    Ok(raster)
}
