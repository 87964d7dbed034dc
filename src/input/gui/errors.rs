use thiserror::Error;

use crate::core::data::canvas_size::CanvasSizeError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("pixels texture error: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    Canvas(#[from] CanvasSizeError),
}
