/// Integer pixel index on the canvas, top-left origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Pointer location in canvas pixel space. Fractional because windowing
/// systems report sub-pixel cursor positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
