//! Auto Driving Car Simulation Library
//!
//! Discrete-step simulation of cars on a bounded grid that halts at the
//! first step in which two or more cars share a cell.

pub mod interface;
pub mod simulation;
