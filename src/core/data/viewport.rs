use crate::core::data::canvas_size::CanvasSize;

pub const MIN_ZOOM: f64 = 1e-5;
pub const MAX_ZOOM: f64 = 1e6;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Complex-plane span covered by the canvas width at zoom 1.
pub const BASE_SPAN: f64 = 4.0;

/// Visible region of the complex plane: a center point and a zoom factor.
///
/// Viewports are values. Gestures never edit one in place; they build a new
/// viewport through [`Viewport::new`], which keeps `zoom` inside
/// `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    zoom: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, zoom: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom: Self::clamp_zoom(zoom),
        }
    }

    /// Clamps a requested zoom into the supported range. NaN has no sensible
    /// ordering, so it falls back to [`DEFAULT_ZOOM`].
    #[must_use]
    pub fn clamp_zoom(zoom: f64) -> f64 {
        if zoom.is_nan() {
            return DEFAULT_ZOOM;
        }

        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Complex-plane distance spanned by one pixel.
    ///
    /// Rendering and both gestures go through this one formula; if they
    /// disagree the point under the cursor drifts while zooming.
    #[must_use]
    pub fn scale(&self, canvas: CanvasSize) -> f64 {
        scale_for_zoom(canvas, self.zoom)
    }

    #[must_use]
    pub fn with_center(&self, center_x: f64, center_y: f64) -> Self {
        Self::new(center_x, center_y, self.zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(-0.6, 0.0, DEFAULT_ZOOM)
    }
}

#[must_use]
pub fn scale_for_zoom(canvas: CanvasSize, zoom: f64) -> f64 {
    BASE_SPAN / (f64::from(canvas.width()) * zoom)
}
