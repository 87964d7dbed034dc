use crate::core::data::point::PointerPosition;

/// Pointer and wheel input in canvas pixel space, independent of any
/// windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Negative `delta_y` zooms in.
    Wheel {
        delta_y: f64,
        position: PointerPosition,
    },
    PointerDown(PointerPosition),
    PointerMove(PointerPosition),
    PointerUp,
    PointerLeave,
}
