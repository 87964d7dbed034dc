use std::path::PathBuf;

use clap::Parser;
use mandelbrot_explorer::{CliController, PpmFilePresenter, ViewArgs};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer", about = "Render a Mandelbrot set view to a PPM image")]
struct Cli {
    #[command(flatten)]
    view: ViewArgs,

    /// Destination image path
    #[arg(short, long, env = "MANDELBROT_OUTPUT", default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.view.to_config();

    let presenter = PpmFilePresenter::new();
    let mut controller = CliController::new(presenter);

    controller.generate(&config)?;
    controller.write(&cli.output)?;

    Ok(())
}
