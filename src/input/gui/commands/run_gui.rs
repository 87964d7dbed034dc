use std::marker::PhantomData;

use log::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::InteractiveController;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the explorer window and runs the event loop until it closes.
    ///
    /// `config` supplies the starting view; its canvas size sets the initial
    /// window size, after which the window's physical size wins.
    pub fn execute(&self, config: &MandelbrotConfig) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(
                    f64::from(config.width),
                    f64::from(config.height),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let initial_config = MandelbrotConfig {
            width: size.width,
            height: size.height,
            ..*config
        };

        info!(
            "opening {}x{} window, {} iterations",
            size.width, size.height, initial_config.max_iterations
        );

        let presenter: P = self.presenter_factory.build(window)?;
        let controller = InteractiveController::new(&initial_config, presenter)?;
        let mut app = GuiApp::new(window, &event_loop, controller);
        app.start();

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // Forward event to egui first
                let egui_consumed = app.handle_window_event(event);

                let result = match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                        Ok(())
                    }
                    WindowEvent::RedrawRequested => app.redraw(),
                    WindowEvent::Resized(size) => app.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.set_pixels_per_point(*scale_factor);
                        let size = window.inner_size();
                        app.resize(size.width, size.height)
                    }
                    _ => {
                        app.handle_pointer_event(event, egui_consumed);
                        Ok(())
                    }
                };

                if let Err(err) = result {
                    error!("gui error: {err}");
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                // Only request redraw if state changed
                if app.redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
