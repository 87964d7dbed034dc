use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// The output is allocated once and split into one chunk per row, so every
/// worker writes a disjoint slice and the result is row-major without a
/// flattening pass. Output is identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(
    canvas: CanvasSize,
    algorithm: &Alg,
) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
{
    let row_width = canvas.width() as usize;
    let mut results = vec![Alg::Success::default(); canvas.pixel_count()];

    results
        .par_chunks_mut(row_width)
        .enumerate()
        .for_each(|(y, row)| {
            // y < height, which itself came from a u32
            let y = y as u32;

            for (x, slot) in row.iter_mut().enumerate() {
                *slot = algorithm.compute(Point { x: x as u32, y });
            }
        });

    results
}
