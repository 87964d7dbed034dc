use egui::Context;
use egui_winit::State as EguiWinitState;
use log::debug;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::{CursorIcon, Window};

use crate::controllers::interactive::{CursorHint, InputEvent, InteractiveController};
use crate::core::fractals::mandelbrot::mandelbrot_config::MAX_ITERATIONS_LIMIT;
use crate::input::gui::app::pointer_input::PointerInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

/// Resizes the presenter surface and the controller's canvas together.
///
/// The controller skips rendering for an unchanged canvas, so a render is
/// forced whenever the presenter discarded its frame.
fn resize_surface<P: GuiPresenterPort>(
    controller: &mut InteractiveController<P>,
    width: u32,
    height: u32,
) -> Result<Option<u64>, GuiError> {
    let frame_discarded = controller.presenter_port_mut().resize(width, height)?;

    Ok(match controller.resize(width, height) {
        None if frame_discarded => controller.render(),
        rendered => rendered,
    })
}

/// What the control panel asked for during one egui pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PanelActions {
    max_iterations: Option<u32>,
    reset_view: bool,
}

pub struct GuiApp<P: GuiPresenterPort> {
    window: &'static Window,
    width: u32,
    height: u32,
    controller: InteractiveController<P>,
    pointer: PointerInput,
    max_iterations_input: u32,
    pub redraw_pending: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        controller: InteractiveController<P>,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let max_iterations_input = controller.max_iterations();

        Self {
            window,
            width: size.width,
            height: size.height,
            controller,
            pointer: PointerInput::default(),
            max_iterations_input,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Renders the first frame for the current window size.
    pub fn start(&mut self) {
        if self.controller.render().is_some() {
            self.redraw_pending = true;
        }
    }

    /// Forwards the event to egui. Returns whether egui consumed it.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.redraw_pending = true;
        }

        response.consumed
    }

    /// Feeds pointer events to the controller. Presses and wheel turns over
    /// the egui panel stay with egui; releases always reach the controller so
    /// a drag never sticks.
    pub fn handle_pointer_event(&mut self, event: &WindowEvent, egui_consumed: bool) {
        let input = match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.pointer.cursor_moved(*position)),
            WindowEvent::CursorLeft { .. } => Some(self.pointer.cursor_left()),
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => self.pointer.wheel(*delta),
            WindowEvent::MouseInput { state, button, .. } => {
                match self.pointer.mouse_button(*button, *state) {
                    Some(InputEvent::PointerDown(_)) if egui_consumed => None,
                    other => other,
                }
            }
            _ => None,
        };

        if let Some(input) = input {
            self.apply_input(input);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;

        if resize_surface(&mut self.controller, width, height)?.is_some() {
            self.redraw_pending = true;
        }

        Ok(())
    }

    pub fn redraw(&mut self) -> Result<(), GuiError> {
        self.redraw_pending = false;

        // Minimised: no surface to draw the panel on.
        if self.controller.is_suspended() {
            return Ok(());
        }

        let (egui_output, actions) = self.update_ui();
        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.apply_panel_actions(actions);
        self.update_cursor();

        self.controller
            .presenter_port_mut()
            .render(egui_output, &self.egui_ctx)
    }

    pub fn set_pixels_per_point(&mut self, scale_factor: f64) {
        self.egui_ctx.set_pixels_per_point(scale_factor as f32);
    }

    fn apply_input(&mut self, input: InputEvent) {
        let previous_hint = self.controller.cursor_hint();

        if let Some(generation) = self.controller.handle_input(input) {
            debug!("input {:?} produced generation {}", input, generation);
            self.redraw_pending = true;
        }

        if self.controller.cursor_hint() != previous_hint {
            self.update_cursor();
        }
    }

    fn apply_panel_actions(&mut self, actions: PanelActions) {
        if let Some(max_iterations) = actions.max_iterations {
            if self.controller.set_max_iterations(i64::from(max_iterations)).is_some() {
                self.redraw_pending = true;
            }
        }

        if actions.reset_view && self.controller.reset_view().is_some() {
            self.redraw_pending = true;
        }

        self.max_iterations_input = self.controller.max_iterations();
    }

    fn update_cursor(&self) {
        if self.egui_ctx.is_pointer_over_area() {
            return;
        }

        let icon = match self.controller.cursor_hint() {
            CursorHint::Grab => CursorIcon::Grab,
            CursorHint::Grabbing => CursorIcon::Grabbing,
        };

        self.window.set_cursor_icon(icon);
    }

    fn update_ui(&mut self) -> (egui::FullOutput, PanelActions) {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let mut actions = PanelActions::default();
        let mut max_iterations = self.max_iterations_input;
        let viewport = self.controller.viewport();
        let presenter = self.controller.presenter_port();
        let last_render_duration = presenter.last_render_duration();
        let last_error_message = presenter.last_error_message().map(str::to_owned);
        let generation = self.controller.last_completed_generation();
        let (width, height) = (self.width, self.height);

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 220.0])
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot Explorer");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        let response = ui.add(
                            egui::DragValue::new(&mut max_iterations)
                                .clamp_range(1..=MAX_ITERATIONS_LIMIT)
                                .speed(1.0),
                        );
                        if response.changed() {
                            actions.max_iterations = Some(max_iterations);
                        }
                    });

                    ui.separator();
                    ui.label("View:");
                    ui.label(format!("Center: {:.10}, {:.10}", viewport.center_x(), viewport.center_y()));
                    ui.label(format!("Zoom: {:.3e}", viewport.zoom()));

                    if ui.button("Reset view").clicked() {
                        actions.reset_view = true;
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", width, height));
                    ui.label(format!("Latest generation: {}", generation));
                    if let Some(render_duration) = last_render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = &last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        (output, actions)
    }
}
