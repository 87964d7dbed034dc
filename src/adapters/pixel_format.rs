//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::raster_buffer::BYTES_PER_PIXEL;

pub const RGB_BYTES_PER_PIXEL: usize = 3;

/// Copies RGBA pixel data to RGB format, dropping alpha.
///
/// # Arguments
/// * `src` - Source buffer with RGBA data (4 bytes per pixel)
/// * `dst` - Destination buffer for RGB data (3 bytes per pixel)
///
/// # Panics
/// Panics if `src` is not a multiple of 4 or if `dst.len()` is not
/// `src.len() / 4 * 3`.
pub fn copy_rgba_to_rgb(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % BYTES_PER_PIXEL == 0,
        "src length {} is not a multiple of {}",
        src.len(),
        BYTES_PER_PIXEL
    );
    let expected_dst_len = (src.len() / BYTES_PER_PIXEL) * RGB_BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGB_BYTES_PER_PIXEL))
    {
        dst_pixel.copy_from_slice(&src_pixel[..RGB_BYTES_PER_PIXEL]);
    }
}

/// Allocating form of [`copy_rgba_to_rgb`]. Trailing bytes that do not form
/// a whole pixel are ignored.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let whole_pixels = src.len() / BYTES_PER_PIXEL * BYTES_PER_PIXEL;
    let mut dst = vec![0; whole_pixels / BYTES_PER_PIXEL * RGB_BYTES_PER_PIXEL];

    copy_rgba_to_rgb(&src[..whole_pixels], &mut dst);

    dst
}
