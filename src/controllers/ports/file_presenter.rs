use std::path::Path;

use crate::core::data::raster_buffer::RasterBuffer;

pub trait FilePresenterPort {
    fn present(&self, raster: &RasterBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
