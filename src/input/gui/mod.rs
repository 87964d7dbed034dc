//! GUI input adapter for interactive exploration.
//!
//! A windowed interface using winit for window management, pixels for
//! framebuffer rendering and egui for the control panel.

pub mod app;
pub mod commands;
pub mod errors;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
