use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::PointerPosition;
use crate::core::data::viewport::Viewport;

/// Maps a canvas position to the complex plane.
///
/// The canvas center lands on the viewport center and each pixel spans
/// [`Viewport::scale`] in both axes. Positions are `f64` so the same mapping
/// serves integer pixel indices and fractional pointer positions.
#[must_use]
#[inline]
pub fn pixel_to_complex_coords(x: f64, y: f64, canvas: CanvasSize, viewport: &Viewport) -> Complex {
    let scale = viewport.scale(canvas);
    let offset_x = viewport.center_x() - (f64::from(canvas.width()) / 2.0) * scale;
    let offset_y = viewport.center_y() - (f64::from(canvas.height()) / 2.0) * scale;

    Complex {
        real: x * scale + offset_x,
        imag: y * scale + offset_y,
    }
}

/// Inverse of [`pixel_to_complex_coords`].
#[must_use]
pub fn complex_to_pixel_coords(point: Complex, canvas: CanvasSize, viewport: &Viewport) -> PointerPosition {
    let scale = viewport.scale(canvas);
    let offset_x = viewport.center_x() - (f64::from(canvas.width()) / 2.0) * scale;
    let offset_y = viewport.center_y() - (f64::from(canvas.height()) / 2.0) * scale;

    PointerPosition {
        x: (point.real - offset_x) / scale,
        y: (point.imag - offset_y) / scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn canvas_800x600() -> CanvasSize {
        CanvasSize::new(800, 600).unwrap()
    }

    #[test]
    fn test_canvas_center_maps_to_viewport_center() {
        let viewport = Viewport::new(-0.6, 0.0, 1.0);

        let point = pixel_to_complex_coords(400.0, 300.0, canvas_800x600(), &viewport);

        assert_approx_eq(point.real, -0.6);
        assert_approx_eq(point.imag, 0.0);
    }

    #[test]
    fn test_top_left_at_zoom_one_spans_four_units_wide() {
        let viewport = Viewport::new(0.0, 0.0, 1.0);

        let top_left = pixel_to_complex_coords(0.0, 0.0, canvas_800x600(), &viewport);
        let right_edge = pixel_to_complex_coords(800.0, 600.0, canvas_800x600(), &viewport);

        assert_approx_eq(top_left.real, -2.0);
        assert_approx_eq(top_left.imag, -1.5);
        assert_approx_eq(right_edge.real, 2.0);
        assert_approx_eq(right_edge.imag, 1.5);
    }

    #[test]
    fn test_pixels_are_square_in_complex_plane() {
        let canvas = CanvasSize::new(100, 50).unwrap();
        let viewport = Viewport::new(0.25, -0.5, 8.0);

        let origin = pixel_to_complex_coords(10.0, 10.0, canvas, &viewport);
        let step_x = pixel_to_complex_coords(11.0, 10.0, canvas, &viewport);
        let step_y = pixel_to_complex_coords(10.0, 11.0, canvas, &viewport);

        assert_approx_eq(step_x.real - origin.real, viewport.scale(canvas));
        assert_approx_eq(step_y.imag - origin.imag, viewport.scale(canvas));
        assert_approx_eq(step_x.imag, origin.imag);
        assert_approx_eq(step_y.real, origin.real);
    }

    #[test]
    fn test_zooming_in_shrinks_visible_region() {
        let near = Viewport::new(0.0, 0.0, 10.0);

        let top_left = pixel_to_complex_coords(0.0, 0.0, canvas_800x600(), &near);

        assert_approx_eq(top_left.real, -0.2);
        assert_approx_eq(top_left.imag, -0.15);
    }

    #[test]
    fn test_complex_to_pixel_inverts_mapping() {
        let canvas = canvas_800x600();
        let viewport = Viewport::new(-0.743, 0.131, 3500.0);

        let complex = pixel_to_complex_coords(123.5, 456.25, canvas, &viewport);
        let pixel = complex_to_pixel_coords(complex, canvas, &viewport);

        assert!((pixel.x - 123.5).abs() < 1e-6);
        assert!((pixel.y - 456.25).abs() < 1e-6);
    }
}
