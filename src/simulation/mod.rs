//! Standalone car simulation module
//!
//! This module contains the core grid simulation logic: the direction model,
//! the cars and the field that advances them step by step. It has no I/O and
//! can be driven from the console session, the headless CLI or tests.

mod car;
mod error;
mod field;
mod navigation;
mod types;

pub use car::{CarState, SimCar};
pub use error::{SimError, SimResult};
pub use field::{Collision, SimField};
pub use navigation::{delta, parse_commands, turn, Command, Direction, Turn, DIRECTIONS};
pub use types::{Bounds, GridPos};
