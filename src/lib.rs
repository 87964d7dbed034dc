pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::cli::cli_controller::{CliController, CliError};
pub use crate::controllers::interactive::InteractiveController;
pub use crate::core::actions::render_mandelbrot::{RenderError, render_mandelbrot, render_mandelbrot_serial};
pub use crate::core::data::render_config::RenderConfig;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::input::args::ViewArgs;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
