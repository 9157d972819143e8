//! Direction model: compass headings, turn resolution and movement deltas.

use std::fmt;
use std::str::FromStr;

use super::error::{SimError, SimResult};

/// A compass heading on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Headings in clockwise order. Turning right moves one slot forward.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// A 90 degree rotation in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// One instruction in a car's command sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move one cell in the current heading
    Forward,
    TurnLeft,
    TurnRight,
}

impl Direction {
    /// Position of this heading in [`DIRECTIONS`]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn turn(self, turn: Turn) -> Direction {
        let step = match turn {
            Turn::Right => 1,
            Turn::Left => DIRECTIONS.len() - 1,
        };
        DIRECTIONS[(self.index() + step) % DIRECTIONS.len()]
    }

    /// Unit offset of one forward move, with y growing northwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

/// Resolve a turn against the clockwise heading cycle
pub fn turn(direction: Direction, turn: Turn) -> Direction {
    direction.turn(turn)
}

/// Movement offset for a heading
pub fn delta(direction: Direction) -> (i32, i32) {
    direction.delta()
}

impl TryFrom<char> for Direction {
    type Error = SimError;

    fn try_from(c: char) -> SimResult<Self> {
        match c {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            other => Err(SimError::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::try_from(c),
            _ => Err(SimError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Command {
    /// The rotation this command performs, if it is a turn
    pub fn as_turn(self) -> Option<Turn> {
        match self {
            Command::Forward => None,
            Command::TurnLeft => Some(Turn::Left),
            Command::TurnRight => Some(Turn::Right),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Forward => 'F',
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
        }
    }
}

impl TryFrom<char> for Command {
    type Error = SimError;

    fn try_from(c: char) -> SimResult<Self> {
        match c {
            'F' => Ok(Command::Forward),
            'L' => Ok(Command::TurnLeft),
            'R' => Ok(Command::TurnRight),
            other => Err(SimError::InvalidCommand(other)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a command string such as `"FFRFL"`. An empty string is a valid,
/// empty sequence.
pub fn parse_commands(commands: &str) -> SimResult<Vec<Command>> {
    commands.chars().map(Command::try_from).collect()
}
