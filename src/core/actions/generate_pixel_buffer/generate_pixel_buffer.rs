use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::raster_buffer::{BYTES_PER_PIXEL, RasterBuffer, RasterBufferError, RasterData};

/// Generates an RGBA raster by mapping row-major input values to colours.
///
/// Fails with [`RasterBufferError::SizeMismatch`] when `input` does not hold
/// exactly one value per canvas pixel.
pub fn generate_pixel_buffer<T: Copy, CMap: ColourMap<T>>(
    input: &[T],
    mapper: &CMap,
    canvas: CanvasSize,
) -> Result<RasterBuffer, RasterBufferError> {
    let mut data: RasterData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for &value in input {
        data.extend_from_slice(&mapper.map(value).to_rgba());
    }

    RasterBuffer::from_data(canvas, data)
}
