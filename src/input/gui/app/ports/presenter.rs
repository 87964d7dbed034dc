use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::errors::GuiError;

/// Display surface for the window: receives frames from the controller and
/// draws them with the egui overlay on top.
pub trait GuiPresenterPort: InteractiveControllerPresenterPort {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;
    /// Resizes the surface. Returns `true` when the presented frame was
    /// discarded and a new one is needed.
    fn resize(&mut self, width: u32, height: u32) -> Result<bool, GuiError>;
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;
}
