use crate::core::data::colour::Colour;

const ONE_SIXTH: f64 = 1.0 / 6.0;
const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Converts HSL (all components in `[0, 1]`) to an RGB colour.
///
/// Channels are rounded to the nearest integer. Zero saturation yields a grey
/// of the given lightness.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    if saturation == 0.0 {
        let grey = unit_to_byte(lightness);
        return Colour {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Colour {
        r: unit_to_byte(hue_to_channel(p, q, hue + ONE_THIRD)),
        g: unit_to_byte(hue_to_channel(p, q, hue)),
        b: unit_to_byte(hue_to_channel(p, q, hue - ONE_THIRD)),
    }
}

fn hue_to_channel(p: f64, q: f64, hue: f64) -> f64 {
    let mut t = hue;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_at_full_saturation() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn secondary_hues_at_full_saturation() {
        assert_eq!(hsl_to_rgb(1.0 / 6.0, 1.0, 0.5), Colour { r: 255, g: 255, b: 0 });
        assert_eq!(hsl_to_rgb(0.5, 1.0, 0.5), Colour { r: 0, g: 255, b: 255 });
        assert_eq!(hsl_to_rgb(5.0 / 6.0, 1.0, 0.5), Colour { r: 255, g: 0, b: 255 });
    }

    #[test]
    fn hue_of_one_wraps_to_red() {
        assert_eq!(hsl_to_rgb(1.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.5), Colour { r: 128, g: 128, b: 128 });
        assert_eq!(hsl_to_rgb(0.9, 0.0, 0.0), Colour::BLACK);
        assert_eq!(hsl_to_rgb(0.1, 0.0, 1.0), Colour { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn lightness_extremes_ignore_hue() {
        assert_eq!(hsl_to_rgb(0.4, 1.0, 0.0), Colour::BLACK);
        assert_eq!(hsl_to_rgb(0.4, 1.0, 1.0), Colour { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn partial_saturation_below_half_lightness() {
        // q = 0.25 * 1.5 = 0.375, p = 0.125
        assert_eq!(hsl_to_rgb(0.0, 0.5, 0.25), Colour { r: 96, g: 32, b: 32 });
    }
}
