use std::time::Instant;

use log::{debug, warn};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::interactive::viewport_controller::{CursorHint, ViewportController};
use crate::core::actions::render_mandelbrot::render_mandelbrot;
use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    MandelbrotConfig, coerce_max_iterations,
};

/// Drives the explorer: turns input into viewport changes and renders each
/// new state synchronously, handing frames to the presenter port.
///
/// Every render gets a fresh generation number. A render always completes
/// before the next input is applied.
pub struct InteractiveController<P: InteractiveControllerPresenterPort> {
    navigation: ViewportController,
    max_iterations: u32,
    presenter_port: P,
    generation: u64,
    last_completed_generation: u64,
    suspended: bool,
}

impl<P: InteractiveControllerPresenterPort> InteractiveController<P> {
    pub fn new(config: &MandelbrotConfig, presenter_port: P) -> Result<Self, CanvasSizeError> {
        let canvas = config.canvas()?;

        Ok(Self {
            navigation: ViewportController::new(config.viewport, canvas, config.limits),
            max_iterations: coerce_max_iterations(i64::from(config.max_iterations)),
            presenter_port,
            generation: 0,
            last_completed_generation: 0,
            suspended: false,
        })
    }

    /// Renders the current state. Returns the generation presented, or `None`
    /// while rendering is suspended by a zero-sized canvas.
    pub fn render(&mut self) -> Option<u64> {
        if self.suspended {
            debug!("render skipped while canvas is zero-sized");
            return None;
        }

        self.generation += 1;
        let generation = self.generation;
        let viewport = self.navigation.viewport();

        let start = Instant::now();
        let result = self.render_raster(&viewport);
        let render_duration = start.elapsed();

        let event = match result {
            Ok(raster) => RenderEvent::Frame(FrameData {
                generation,
                raster,
                viewport,
                max_iterations: self.max_iterations,
                render_duration,
            }),
            Err(message) => {
                warn!("render {} failed: {}", generation, message);
                RenderEvent::Error(RenderError {
                    generation,
                    message,
                })
            }
        };

        self.presenter_port.present(event);
        self.last_completed_generation = generation;

        Some(generation)
    }

    /// Applies one input event and re-renders if the viewport moved.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<u64> {
        match event {
            InputEvent::PointerUp => {
                self.navigation.pointer_up();
                return None;
            }
            InputEvent::PointerLeave => {
                self.navigation.pointer_leave();
                return None;
            }
            _ if self.suspended => return None,
            _ => {}
        }

        let before = self.navigation.viewport();

        match event {
            InputEvent::Wheel { delta_y, position } => {
                self.navigation.on_wheel(delta_y, position);
            }
            InputEvent::PointerDown(position) => self.navigation.pointer_down(position),
            InputEvent::PointerMove(position) => {
                self.navigation.pointer_move(position);
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {}
        }

        if self.navigation.viewport() == before {
            return None;
        }

        self.render()
    }

    /// Sets the iteration budget from a raw UI value, re-rendering on change.
    pub fn set_max_iterations(&mut self, raw: i64) -> Option<u64> {
        let max_iterations = coerce_max_iterations(raw);

        if max_iterations == self.max_iterations {
            return None;
        }

        self.max_iterations = max_iterations;
        self.render()
    }

    /// Adopts a new canvas size. A zero-sized canvas suspends rendering and
    /// gestures until a valid size arrives.
    pub fn resize(&mut self, width: u32, height: u32) -> Option<u64> {
        let canvas = match CanvasSize::new(width, height) {
            Ok(canvas) => canvas,
            Err(err) => {
                warn!("suspending rendering: {}", err);
                self.suspended = true;
                self.navigation.pointer_leave();
                return None;
            }
        };

        let was_suspended = std::mem::replace(&mut self.suspended, false);

        if !was_suspended && canvas == self.navigation.canvas() {
            return None;
        }

        self.navigation.set_canvas(canvas);
        self.render()
    }

    /// Returns to the default view and iteration budget.
    pub fn reset_view(&mut self) -> Option<u64> {
        let mut config = self.config();
        config.reset_view();

        self.navigation.reset(config.viewport);
        self.max_iterations = config.max_iterations;
        self.render()
    }

    /// Snapshot of the current session settings.
    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        let canvas = self.navigation.canvas();

        MandelbrotConfig {
            width: canvas.width(),
            height: canvas.height(),
            max_iterations: self.max_iterations,
            viewport: self.navigation.viewport(),
            limits: self.navigation.limits(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.navigation.viewport()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        self.navigation.cursor_hint()
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.last_completed_generation
    }

    #[must_use]
    pub fn presenter_port(&self) -> &P {
        &self.presenter_port
    }

    pub fn presenter_port_mut(&mut self) -> &mut P {
        &mut self.presenter_port
    }

    fn render_raster(&self, viewport: &Viewport) -> Result<RasterBuffer, String> {
        let config = RenderConfig::for_canvas(self.navigation.canvas(), self.max_iterations)
            .map_err(|err| err.to_string())?;

        render_mandelbrot(&config, viewport).map_err(|err| err.to_string())
    }
}
