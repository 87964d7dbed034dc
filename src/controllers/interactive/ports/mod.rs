//! Port definitions for the interactive controller.
//!
//! Traits the controller calls out through to reach the presentation layer.

pub mod presenter;
