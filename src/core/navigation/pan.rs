use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::PointerPosition;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::limits::NavigationLimits;

/// Drag tracking. While panning, `anchor` holds the last pointer position a
/// move was applied from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanState {
    #[default]
    Idle,
    Panning {
        anchor: PointerPosition,
    },
}

impl PanState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanStepReport {
    pub state: PanState,
    pub viewport: Viewport,
}

/// Moves the center opposite to the pointer drag from `from` to `to`, scaled
/// by the current pixel size and the pan sensitivity.
#[must_use]
pub fn pan_viewport(
    viewport: Viewport,
    canvas: CanvasSize,
    from: PointerPosition,
    to: PointerPosition,
    limits: &NavigationLimits,
) -> Viewport {
    let scale = viewport.scale(canvas);
    let dx = (to.x - from.x) * scale;
    let dy = (to.y - from.y) * scale;

    viewport.with_center(
        viewport.center_x() - dx * limits.pan_sensitivity,
        viewport.center_y() - dy * limits.pan_sensitivity,
    )
}

/// Applies one pointer move. Idle moves leave everything untouched; panning
/// moves shift the viewport and re-anchor on the new position so the drag is
/// tracked incrementally.
#[must_use]
pub fn step_pan(
    state: PanState,
    viewport: Viewport,
    canvas: CanvasSize,
    pointer: PointerPosition,
    limits: &NavigationLimits,
) -> PanStepReport {
    match state {
        PanState::Idle => PanStepReport { state, viewport },
        PanState::Panning { anchor } => PanStepReport {
            state: PanState::Panning { anchor: pointer },
            viewport: pan_viewport(viewport, canvas, anchor, pointer, limits),
        },
    }
}
