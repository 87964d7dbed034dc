pub const DEFAULT_ZOOM_STEP: f64 = 1.1;
pub const DEFAULT_PAN_SENSITIVITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    /// Zoom multiplier applied per wheel notch.
    pub zoom_step: f64,
    /// Fraction of the pointer drag distance applied to the center.
    pub pan_sensitivity: f64,
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            pan_sensitivity: DEFAULT_PAN_SENSITIVITY,
        }
    }
}
