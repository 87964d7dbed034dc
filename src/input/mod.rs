//! Input adapters for the Mandelbrot explorer.
//!
//! Adapters that receive input from the command line or a window and
//! translate it into controller calls.

pub mod args;
#[cfg(feature = "gui")]
pub mod gui;
