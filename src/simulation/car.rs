//! Car movement logic for the grid simulation

use std::fmt;

use super::error::SimResult;
use super::navigation::{parse_commands, Command, Direction};
use super::types::{Bounds, GridPos};

/// Where a car stands and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarState {
    pub position: GridPos,
    pub direction: Direction,
}

/// A car in the simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimCar {
    name: String,
    state: CarState,
    /// Fixed at creation; only read during a run
    commands: Vec<Command>,
}

impl SimCar {
    pub fn new(
        name: impl Into<String>,
        position: GridPos,
        direction: Direction,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            name: name.into(),
            state: CarState {
                position,
                direction,
            },
            commands,
        }
    }

    /// Build a car from raw direction and command text, e.g. `"N"` and `"FFRL"`
    pub fn parse(
        name: impl Into<String>,
        x: i32,
        y: i32,
        direction: &str,
        commands: &str,
    ) -> SimResult<Self> {
        let direction = direction.parse::<Direction>()?;
        let commands = parse_commands(commands)?;
        Ok(Self::new(name, GridPos::new(x, y), direction, commands))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> GridPos {
        self.state.position
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn state(&self) -> CarState {
        self.state
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Compute where this car will be after `step` without touching it.
    ///
    /// A car whose commands are exhausted stays put. A forward move that would
    /// leave `bounds` is absorbed and the car keeps its cell.
    pub fn plan_step(&self, step: usize, bounds: Bounds) -> CarState {
        let Some(&command) = self.commands.get(step) else {
            return self.state;
        };

        match command.as_turn() {
            Some(turn) => CarState {
                position: self.state.position,
                direction: self.state.direction.turn(turn),
            },
            None => {
                let candidate = self.state.position.offset(self.state.direction.delta());
                let position = if bounds.contains(candidate) {
                    candidate
                } else {
                    self.state.position
                };
                CarState {
                    position,
                    direction: self.state.direction,
                }
            }
        }
    }

    /// Apply a planned state. Only the field calls this, once every car of the
    /// step has been planned.
    pub(crate) fn commit(&mut self, next: CarState) {
        self.state = next;
    }

    /// The command sequence as typed, e.g. `FFRL`
    pub fn command_string(&self) -> String {
        self.commands.iter().map(|c| c.as_char()).collect()
    }
}

impl fmt::Display for SimCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.name, self.position(), self.direction())
    }
}
