use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::info;
use thiserror::Error;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_mandelbrot::{RenderError, render_mandelbrot};
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::data::render_config::RenderConfigError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] RenderConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("no frame has been rendered yet")]
    NothingRendered,
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders a single frame and hands it to a file presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    raster: Option<RasterBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            raster: None,
        }
    }

    pub fn generate(&mut self, config: &MandelbrotConfig) -> Result<Duration, CliError> {
        let render_config = config.render_config()?;
        let viewport = config.viewport;

        info!(
            "rendering Mandelbrot set: {}x{}, {} iterations, center ({}, {}), zoom {}",
            render_config.width(),
            render_config.height(),
            render_config.max_iterations(),
            viewport.center_x(),
            viewport.center_y(),
            viewport.zoom()
        );

        let start = Instant::now();
        let raster = render_mandelbrot(&render_config, &viewport)?;
        let duration = start.elapsed();

        info!("render finished in {:?}", duration);

        self.raster = Some(raster);

        Ok(duration)
    }

    #[must_use]
    pub fn raster(&self) -> Option<&RasterBuffer> {
        self.raster.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), CliError> {
        let filepath = filepath.as_ref();
        let raster = self.raster.as_ref().ok_or(CliError::NothingRendered)?;
        let write_error = |source| CliError::Write {
            path: filepath.to_path_buf(),
            source,
        };

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        self.presenter.present(raster, filepath).map_err(write_error)?;
        info!("saved to {}", filepath.display());

        Ok(())
    }
}
