//! Interactive controller for real-time fractal exploration.
//!
//! Follows the ports & adapters pattern:
//! - **Input**: [`InputEvent`]s in canvas pixel space
//! - **Output**: the [`InteractiveControllerPresenterPort`] trait receives rendered frames
//! - **Core**: viewport math and rendering come from `core/`

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod viewport_controller;

pub use controller::InteractiveController;
pub use events::input::InputEvent;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
pub use viewport_controller::{CursorHint, ViewportController};
