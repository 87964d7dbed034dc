use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::PointerPosition;
use crate::core::data::viewport::{Viewport, scale_for_zoom};
use crate::core::navigation::limits::NavigationLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Wheel deltas follow the DOM convention: negative scrolls away from the
    /// user and zooms in. Zero and NaN deltas carry no direction.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Zooms one step while keeping the complex point under `pointer` on the
/// same pixel.
///
/// The requested zoom is clamped first and the recentering uses the clamped
/// value, so a saturated zoom leaves the center untouched.
#[must_use]
pub fn zoom_towards_pointer(
    viewport: Viewport,
    canvas: CanvasSize,
    pointer: PointerPosition,
    direction: ZoomDirection,
    limits: &NavigationLimits,
) -> Viewport {
    let old_zoom = viewport.zoom();
    let requested_zoom = match direction {
        ZoomDirection::In => old_zoom * limits.zoom_step,
        ZoomDirection::Out => old_zoom / limits.zoom_step,
    };
    let new_zoom = Viewport::clamp_zoom(requested_zoom);

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    let mouse_x = pointer.x / width;
    let mouse_y = pointer.y / height;

    let scale_delta = scale_for_zoom(canvas, old_zoom) - scale_for_zoom(canvas, new_zoom);
    let center_x = viewport.center_x() + (mouse_x - 0.5) * width * scale_delta;
    let center_y = viewport.center_y() + (mouse_y - 0.5) * height * scale_delta;

    Viewport::new(center_x, center_y, new_zoom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::{MAX_ZOOM, MIN_ZOOM};
    use crate::core::util::pixel_to_complex_coords::{complex_to_pixel_coords, pixel_to_complex_coords};

    fn canvas() -> CanvasSize {
        CanvasSize::new(800, 600).unwrap()
    }

    fn assert_relative_eq(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn assert_pointer_anchored(before: Viewport, after: Viewport, pointer: PointerPosition) {
        let old_point = pixel_to_complex_coords(pointer.x, pointer.y, canvas(), &before);
        let new_point = pixel_to_complex_coords(pointer.x, pointer.y, canvas(), &after);

        assert_relative_eq(new_point.real, old_point.real);
        assert_relative_eq(new_point.imag, old_point.imag);

        // The old point still lands under the pointer on the new view.
        let pixel = complex_to_pixel_coords(old_point, canvas(), &after);
        assert!((pixel.x - pointer.x).abs() < 1e-6, "x={} pointer={}", pixel.x, pointer.x);
        assert!((pixel.y - pointer.y).abs() < 1e-6, "y={} pointer={}", pixel.y, pointer.y);
    }

    #[test]
    fn wheel_delta_sign_selects_direction() {
        assert_eq!(ZoomDirection::from_wheel_delta(-120.0), Some(ZoomDirection::In));
        assert_eq!(ZoomDirection::from_wheel_delta(3.0), Some(ZoomDirection::Out));
        assert_eq!(ZoomDirection::from_wheel_delta(0.0), None);
        assert_eq!(ZoomDirection::from_wheel_delta(f64::NAN), None);
    }

    #[test]
    fn zoom_in_multiplies_by_step() {
        let viewport = Viewport::new(-0.6, 0.0, 1.0);
        let pointer = PointerPosition::new(400.0, 300.0);

        let zoomed = zoom_towards_pointer(
            viewport,
            canvas(),
            pointer,
            ZoomDirection::In,
            &NavigationLimits::default(),
        );

        assert_relative_eq(zoomed.zoom(), 1.1);
    }

    #[test]
    fn zoom_out_divides_by_step() {
        let viewport = Viewport::new(-0.6, 0.0, 11.0);
        let pointer = PointerPosition::new(400.0, 300.0);

        let zoomed = zoom_towards_pointer(
            viewport,
            canvas(),
            pointer,
            ZoomDirection::Out,
            &NavigationLimits::default(),
        );

        assert_relative_eq(zoomed.zoom(), 10.0);
    }

    #[test]
    fn zoom_at_canvas_center_keeps_center() {
        let viewport = Viewport::new(-0.6, 0.25, 3.0);
        let pointer = PointerPosition::new(400.0, 300.0);

        let zoomed = zoom_towards_pointer(
            viewport,
            canvas(),
            pointer,
            ZoomDirection::In,
            &NavigationLimits::default(),
        );

        assert_eq!(zoomed.center_x(), -0.6);
        assert_eq!(zoomed.center_y(), 0.25);
    }

    #[test]
    fn zoom_in_keeps_point_under_cursor_fixed() {
        let limits = NavigationLimits::default();
        let pointers = [
            PointerPosition::new(0.0, 0.0),
            PointerPosition::new(600.0, 150.0),
            PointerPosition::new(799.0, 599.0),
            PointerPosition::new(123.25, 456.75),
        ];

        for pointer in pointers {
            let before = Viewport::new(-0.6, 0.0, 1.0);
            let after =
                zoom_towards_pointer(before, canvas(), pointer, ZoomDirection::In, &limits);

            assert_pointer_anchored(before, after, pointer);
        }
    }

    #[test]
    fn zoom_out_keeps_point_under_cursor_fixed() {
        let limits = NavigationLimits::default();
        let pointer = PointerPosition::new(50.0, 520.0);
        let before = Viewport::new(-0.743_643_887, 0.131_825_904, 25_000.0);

        let after = zoom_towards_pointer(before, canvas(), pointer, ZoomDirection::Out, &limits);

        assert_pointer_anchored(before, after, pointer);
    }

    #[test]
    fn repeated_zoom_stays_anchored() {
        let limits = NavigationLimits::default();
        let pointer = PointerPosition::new(210.0, 90.0);
        let start = Viewport::new(-0.6, 0.0, 1.0);
        let mut viewport = start;

        for _ in 0..50 {
            viewport = zoom_towards_pointer(viewport, canvas(), pointer, ZoomDirection::In, &limits);
        }

        let anchor = pixel_to_complex_coords(pointer.x, pointer.y, canvas(), &start);
        let now = pixel_to_complex_coords(pointer.x, pointer.y, canvas(), &viewport);
        assert!((anchor.real - now.real).abs() < 1e-9);
        assert!((anchor.imag - now.imag).abs() < 1e-9);
    }

    #[test]
    fn repeated_zoom_in_never_exceeds_max() {
        let limits = NavigationLimits::default();
        let pointer = PointerPosition::new(700.0, 100.0);
        let mut viewport = Viewport::new(0.0, 0.0, MAX_ZOOM / 2.0);

        for _ in 0..200 {
            viewport = zoom_towards_pointer(viewport, canvas(), pointer, ZoomDirection::In, &limits);
            assert!(viewport.zoom() <= MAX_ZOOM);
        }

        assert_eq!(viewport.zoom(), MAX_ZOOM);
    }

    #[test]
    fn repeated_zoom_out_never_drops_below_min() {
        let limits = NavigationLimits::default();
        let pointer = PointerPosition::new(10.0, 590.0);
        let mut viewport = Viewport::new(0.0, 0.0, 1.0);

        for _ in 0..300 {
            viewport = zoom_towards_pointer(viewport, canvas(), pointer, ZoomDirection::Out, &limits);
            assert!(viewport.zoom() >= MIN_ZOOM);
        }

        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn saturated_zoom_does_not_drift_center() {
        let limits = NavigationLimits::default();
        let pointer = PointerPosition::new(790.0, 10.0);
        let viewport = Viewport::new(0.3, -0.2, MAX_ZOOM);

        let after = zoom_towards_pointer(viewport, canvas(), pointer, ZoomDirection::In, &limits);

        assert_eq!(after, viewport);
    }

    #[test]
    fn zoom_that_hits_the_clamp_recenters_with_clamped_zoom() {
        let limits = NavigationLimits::default();
        let pointer = PointerPosition::new(100.0, 500.0);
        let before = Viewport::new(0.3, -0.2, MAX_ZOOM / 1.05);

        let after = zoom_towards_pointer(before, canvas(), pointer, ZoomDirection::In, &limits);

        assert_eq!(after.zoom(), MAX_ZOOM);
        assert_pointer_anchored(before, after, pointer);
    }
}
