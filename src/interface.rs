//! Console interface for the car simulation
//!
//! `Session` is the interactive menu loop. It works over any reader/writer
//! pair so it can be driven by stdin/stdout or by a scripted transcript.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use crate::simulation::{parse_commands, Direction, GridPos, SimCar, SimField};

const MAIN_MENU: &str =
    "\nPlease choose from the following options:\n[1] Add a car to field\n[2] Run simulation\n> ";
const RESTART_MENU: &str = "\nChoose:\n[1] Start over\n[2] Exit\n> ";

/// An answer to a two-option menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    First,
    Second,
}

/// An interactive simulation session
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a captured transcript
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks Exit. Running out of input is an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "Welcome to Auto Driving Car Simulation!")?;
            let mut field = self.prompt_field()?;
            writeln!(
                self.output,
                "\nYou have created a field of {} x {}.",
                field.width(),
                field.height()
            )?;

            loop {
                match self.prompt_menu(MAIN_MENU)? {
                    MenuChoice::First => {
                        self.add_car(&mut field)?;
                        write_car_list(&field, &mut self.output)?;
                    }
                    MenuChoice::Second => {
                        if field.cars().is_empty() {
                            writeln!(self.output, "Error: Please add at least one car first")?;
                            continue;
                        }
                        field.run_simulation()?;
                        write_results(&field, &mut self.output)?;
                        break;
                    }
                }
            }

            if self.prompt_menu(RESTART_MENU)? == MenuChoice::Second {
                writeln!(
                    self.output,
                    "\nThank you for running the simulation. Goodbye!"
                )?;
                return Ok(());
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }

    fn prompt_menu(&mut self, menu: &str) -> Result<MenuChoice> {
        loop {
            match self.prompt(menu)?.as_str() {
                "1" => return Ok(MenuChoice::First),
                "2" => return Ok(MenuChoice::Second),
                _ => writeln!(self.output, "Error: Please enter 1 or 2")?,
            }
        }
    }

    fn prompt_field(&mut self) -> Result<SimField> {
        loop {
            let answer = self.prompt(
                "\nPlease enter the width and height of the simulation field in x y format: ",
            )?;
            let Some((width, height)) = parse_pair(&answer) else {
                writeln!(self.output, "Error: Width and height must be integers")?;
                continue;
            };
            match SimField::new(width, height) {
                Ok(field) => return Ok(field),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    fn add_car(&mut self, field: &mut SimField) -> Result<()> {
        let name = loop {
            let name = self.prompt("\nPlease enter the name of the car: ")?;
            match field.check_name(&name) {
                Ok(()) => break name,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        };

        let (position, direction) = loop {
            let answer = self.prompt(&format!(
                "Please enter initial position of car {} in x y Direction format: ",
                name
            ))?;
            let tokens: Vec<&str> = answer.split_whitespace().collect();
            let &[x, y, direction] = tokens.as_slice() else {
                writeln!(
                    self.output,
                    "Error: Invalid input format, input should be like '1 2 N'."
                )?;
                continue;
            };
            let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
                writeln!(
                    self.output,
                    "Error: Invalid input format, input should be like '1 2 N'."
                )?;
                continue;
            };
            let position = GridPos::new(x, y);
            let checked = direction
                .to_ascii_uppercase()
                .parse::<Direction>()
                .and_then(|direction| field.check_start(position).map(|()| direction));
            match checked {
                Ok(direction) => break (position, direction),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        };

        loop {
            let commands = self.prompt(&format!("Please enter the commands for car {}: ", name))?;
            let car = parse_commands(&commands.to_ascii_uppercase())
                .map(|commands| SimCar::new(name.as_str(), position, direction, commands));
            match car.and_then(|car| field.add_car(car)) {
                Ok(()) => return Ok(()),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }
}

/// Parse `"a b"` into two integers
fn parse_pair(s: &str) -> Option<(i32, i32)> {
    let mut tokens = s.split_whitespace();
    let first = tokens.next()?.parse().ok()?;
    let second = tokens.next()?.parse().ok()?;
    match tokens.next() {
        Some(_) => None,
        None => Some((first, second)),
    }
}

/// Parse a car given as `NAME X Y DIRECTION [COMMANDS]`, e.g. `A 1 2 N FFRL`
pub fn parse_car_spec(spec: &str) -> Result<SimCar> {
    let tokens: Vec<&str> = spec.split_whitespace().collect();
    let (name, x, y, direction, commands) = match *tokens.as_slice() {
        [name, x, y, direction] => (name, x, y, direction, ""),
        [name, x, y, direction, commands] => (name, x, y, direction, commands),
        _ => bail!(
            "Invalid car '{}', expected NAME X Y DIRECTION [COMMANDS]",
            spec
        ),
    };
    let x = x
        .parse()
        .with_context(|| format!("Invalid x coordinate '{}' for car {}", x, name))?;
    let y = y
        .parse()
        .with_context(|| format!("Invalid y coordinate '{}' for car {}", y, name))?;

    SimCar::parse(
        name,
        x,
        y,
        &direction.to_ascii_uppercase(),
        &commands.to_ascii_uppercase(),
    )
    .with_context(|| format!("Invalid car '{}'", spec))
}

/// Print every car with its starting state and commands
pub fn write_car_list(field: &SimField, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nYour current list of cars are:")?;
    for car in field.cars() {
        writeln!(out, "- {}, {}", car, car.command_string())?;
    }
    Ok(())
}

/// Print the outcome of a run: the collision if one halted it, otherwise
/// the final state of every car.
pub fn write_results(field: &SimField, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nAfter simulation, the result is:")?;
    match field.collision() {
        Some(collision) => {
            for name in &collision.cars {
                let others: Vec<&str> = collision.others(name).collect();
                writeln!(
                    out,
                    "- {}, collides with {} at {} at step {}",
                    name,
                    others.join(", "),
                    collision.position,
                    collision.step
                )?;
            }
        }
        None => {
            for car in field.cars() {
                writeln!(out, "- {}", car)?;
            }
        }
    }
    Ok(())
}
