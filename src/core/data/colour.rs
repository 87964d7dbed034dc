#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_rgba_is_always_opaque() {
        let colour = Colour { r: 10, g: 20, b: 30 };

        assert_eq!(colour.to_rgba(), [10, 20, 30, 255]);
        assert_eq!(Colour::BLACK.to_rgba(), [0, 0, 0, 255]);
    }
}
