use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;

/// Evaluates every pixel of the canvas on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    canvas: CanvasSize,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    (0..canvas.height())
        .flat_map(|y| (0..canvas.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (u32, u32);

        fn compute(&self, pixel: Point) -> Self::Success {
            (pixel.x, pixel.y)
        }
    }

    #[test]
    fn test_serial_visits_pixels_in_row_major_order() {
        let canvas = CanvasSize::new(3, 2).unwrap();

        let results = generate_fractal_serial(canvas, &StubAlgorithm {});

        assert_eq!(
            results,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_serial_single_pixel() {
        let canvas = CanvasSize::new(1, 1).unwrap();

        let results = generate_fractal_serial(canvas, &StubAlgorithm {});

        assert_eq!(results, vec![(0, 0)]);
    }
}
