//! Error type for the car simulation.
//!
//! Every variant is a caller precondition violation. Boundary clamps and
//! collisions are regular outcomes and never show up here.

use thiserror::Error;

use super::types::GridPos;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("width and height must be positive integers, got {width} x {height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("direction must be N, S, E, or W, got '{0}'")]
    InvalidDirection(String),

    #[error("commands can only be F, L, or R, got '{0}'")]
    InvalidCommand(char),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("a car named '{0}' already exists")]
    DuplicateName(String),

    #[error("position {pos} must be within field border (0-{max_x}, 0-{max_y})")]
    OutOfBounds { pos: GridPos, max_x: i32, max_y: i32 },

    #[error("position {pos} is already occupied by {occupant}")]
    PositionOccupied { pos: GridPos, occupant: String },

    #[error("cannot run a simulation without any cars")]
    NoCars,
}

/// Shorthand result type for the simulation core.
pub type SimResult<T> = Result<T, SimError>;
