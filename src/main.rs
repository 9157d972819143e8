use anyhow::{bail, Context, Result};
use auto_driving_sim::interface;
use auto_driving_sim::simulation::SimField;
use clap::Parser;
use log::info;
use std::io;

#[derive(Parser)]
#[command(name = "auto_driving_sim")]
#[command(about = "Auto driving car simulation on a bounded grid")]
struct Cli {
    /// Field width; with --height, runs headless instead of the interactive menu
    #[arg(long, requires = "height")]
    width: Option<i32>,

    /// Field height
    #[arg(long, requires = "width")]
    height: Option<i32>,

    /// Car to add in headless mode, as "NAME X Y DIRECTION [COMMANDS]" (repeatable)
    #[arg(long = "car", value_name = "CAR")]
    cars: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match (cli.width, cli.height) {
        (Some(width), Some(height)) => run_headless(width, height, &cli.cars),
        _ => {
            if !cli.cars.is_empty() {
                bail!("--car needs --width and --height");
            }
            run_interactive()
        }
    }
}

/// Run the simulation once from command line arguments and print the result
fn run_headless(width: i32, height: i32, cars: &[String]) -> Result<()> {
    let mut field = SimField::new(width, height)?;
    for spec in cars {
        let car = interface::parse_car_spec(spec)?;
        field
            .add_car(car)
            .with_context(|| format!("Cannot add car '{}'", spec))?;
    }
    if field.cars().is_empty() {
        bail!("Please add at least one car with --car");
    }

    info!(
        "Running headless on a {} x {} field with {} cars",
        width,
        height,
        field.cars().len()
    );
    field.run_simulation()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    interface::write_results(&field, &mut out)
}

fn run_interactive() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = interface::Session::new(stdin.lock(), stdout.lock());
    session.run()
}
