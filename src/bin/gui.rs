use clap::Parser;
use mandelbrot_explorer::{PixelsPresenterFactory, RunGuiCommand, ViewArgs};

#[derive(Parser, Debug)]
#[command(name = "gui", about = "Explore the Mandelbrot set in a window")]
struct GuiCli {
    #[command(flatten)]
    view: ViewArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = GuiCli::parse();
    let presenter_factory = PixelsPresenterFactory::new();
    let command = RunGuiCommand::new(presenter_factory);

    command.execute(&cli.view.to_config())?;

    Ok(())
}
