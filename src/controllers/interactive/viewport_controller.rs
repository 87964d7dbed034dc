use log::debug;

use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::PointerPosition;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::limits::NavigationLimits;
use crate::core::navigation::pan::{PanState, step_pan};
use crate::core::navigation::zoom::{ZoomDirection, zoom_towards_pointer};

/// Cursor shape a display surface should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Grab,
    Grabbing,
}

/// Sole owner of the current viewport. Every gesture swaps in a new
/// [`Viewport`] value and returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    viewport: Viewport,
    canvas: CanvasSize,
    pan: PanState,
    limits: NavigationLimits,
}

impl ViewportController {
    #[must_use]
    pub fn new(viewport: Viewport, canvas: CanvasSize, limits: NavigationLimits) -> Self {
        Self {
            viewport,
            canvas,
            pan: PanState::Idle,
            limits,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn limits(&self) -> NavigationLimits {
        self.limits
    }

    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    pub fn zoom(&mut self, pointer: PointerPosition, direction: ZoomDirection) -> Viewport {
        self.viewport =
            zoom_towards_pointer(self.viewport, self.canvas, pointer, direction, &self.limits);

        debug!(
            "zoom {:?} at ({}, {}) -> center ({}, {}) zoom {}",
            direction,
            pointer.x,
            pointer.y,
            self.viewport.center_x(),
            self.viewport.center_y(),
            self.viewport.zoom()
        );

        self.viewport
    }

    /// Zooms for a wheel event. Returns `None` when the delta carries no
    /// direction.
    pub fn on_wheel(&mut self, delta_y: f64, pointer: PointerPosition) -> Option<Viewport> {
        let direction = ZoomDirection::from_wheel_delta(delta_y)?;

        Some(self.zoom(pointer, direction))
    }

    pub fn pointer_down(&mut self, pointer: PointerPosition) {
        self.pan = PanState::Panning { anchor: pointer };
    }

    pub fn pointer_move(&mut self, pointer: PointerPosition) -> Viewport {
        let report = step_pan(self.pan, self.viewport, self.canvas, pointer, &self.limits);
        self.pan = report.state;
        self.viewport = report.viewport;

        self.viewport
    }

    pub fn pointer_up(&mut self) {
        self.pan = PanState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.pan = PanState::Idle;
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        if self.is_panning() {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    /// Replaces the viewport and drops any drag in progress.
    pub fn reset(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.pan = PanState::Idle;
    }
}
