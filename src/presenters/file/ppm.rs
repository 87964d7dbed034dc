use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster_buffer::RasterBuffer;

/// Writes rasters as binary PPM (P6) images.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &RasterBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);

        write_ppm(raster, &mut writer)?;
        writer.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(raster: &RasterBuffer, writer: &mut W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", raster.width(), raster.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&rgba_to_rgb(raster.data()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;

    #[test]
    fn test_write_ppm_header_and_rgb_payload() {
        let canvas = CanvasSize::new(2, 1).unwrap();
        let raster =
            RasterBuffer::from_data(canvas, vec![255, 0, 0, 255, 0, 0, 0, 255]).unwrap();
        let mut out = Vec::new();

        write_ppm(&raster, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 0]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let canvas = CanvasSize::new(3, 2).unwrap();
        let raster = RasterBuffer::new(canvas);
        let path = std::env::temp_dir().join(format!(
            "mandelbrot_explorer_ppm_test_{}.ppm",
            std::process::id()
        ));

        PpmFilePresenter::new().present(&raster, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
