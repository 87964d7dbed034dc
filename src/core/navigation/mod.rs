pub mod limits;
pub mod pan;
pub mod zoom;

pub use limits::NavigationLimits;
pub use pan::{PanState, PanStepReport, pan_viewport, step_pan};
pub use zoom::{ZoomDirection, zoom_towards_pointer};
