use std::time::Duration;

use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::data::viewport::Viewport;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub raster: RasterBuffer,
    /// Viewport the raster was rendered for.
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub render_duration: Duration,
}
