use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterBufferError {
    #[error("canvas needs {expected} bytes but buffer holds {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type RasterData = Vec<u8>;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

/// Row-major RGBA pixels for one canvas, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    canvas: CanvasSize,
    data: RasterData,
}

impl RasterBuffer {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            data: vec![0; canvas_to_buffer_size(canvas)],
        }
    }

    pub fn from_data(canvas: CanvasSize, data: RasterData) -> Result<Self, RasterBufferError> {
        let expected = canvas_to_buffer_size(canvas);

        if expected != data.len() {
            return Err(RasterBufferError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { canvas, data })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 4]> {
        let index = self.index_of(pixel)?;
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.data[index..index + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if pixel.x >= self.canvas.width() || pixel.y >= self.canvas.height() {
            return None;
        }

        let row_start = pixel.y as usize * self.canvas.width() as usize;
        Some((row_start + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> CanvasSize {
        CanvasSize::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = RasterBuffer::new(canvas(10, 10));

        assert_eq!(buffer.data().len(), 400); // 10 * 10 * 4
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
        ];

        let buffer = RasterBuffer::from_data(canvas(2, 1), data.clone()).unwrap();

        assert_eq!(buffer.data(), data.as_slice());
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 1);
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some([0, 255, 0, 255]));
        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }), None);
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), None);
    }

    #[test]
    fn test_from_data_rejects_wrong_length() {
        let too_small = RasterBuffer::from_data(canvas(2, 2), vec![0; 12]);
        let too_large = RasterBuffer::from_data(canvas(2, 2), vec![0; 20]);

        assert_eq!(
            too_small,
            Err(RasterBufferError::SizeMismatch {
                expected: 16,
                actual: 12
            })
        );
        assert_eq!(
            too_large,
            Err(RasterBufferError::SizeMismatch {
                expected: 16,
                actual: 20
            })
        );
    }
}
