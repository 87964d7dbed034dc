use crate::core::data::point::Point;

/// Per-pixel computation driven by the fractal generators.
///
/// Implementations must be pure: the generators evaluate pixels in any order
/// and on any thread.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
