use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsl_to_rgb::hsl_to_rgb;

const SATURATION: f64 = 1.0;
const LIGHTNESS: f64 = 0.5;

/// Spreads escape counts around the hue wheel; points that never escaped are
/// painted black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColourMap {
    max_iterations: u32,
}

impl HslColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl ColourMap<u32> for HslColourMap {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let hue = f64::from(iterations) / f64::from(self.max_iterations);
        hsl_to_rgb(hue, SATURATION, LIGHTNESS)
    }
}
