//! The simulation field and the step engine that drives it
//!
//! Every step runs in two phases: all cars plan their next state from the
//! same pre-step snapshot, then the whole plan is committed at once. Cars
//! that swap cells therefore never collide; cars that plan the same cell do.

use log::{debug, info, warn};
use std::collections::HashMap;

use super::car::{CarState, SimCar};
use super::error::{SimError, SimResult};
use super::types::{Bounds, GridPos};

/// The first step in which two or more cars planned the same cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// 1-indexed step number
    pub step: usize,
    pub position: GridPos,
    /// Names of the cars involved, in field order
    pub cars: Vec<String>,
}

impl Collision {
    /// The other cars `name` collided with
    pub fn others<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.cars
            .iter()
            .map(String::as_str)
            .filter(move |other| *other != name)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.cars.iter().any(|car| car == name)
    }
}

/// A bounded grid and the cars on it
#[derive(Debug, Clone)]
pub struct SimField {
    bounds: Bounds,
    /// Insertion order is kept for reporting and tie-breaks
    cars: Vec<SimCar>,
    collision: Option<Collision>,
    steps_completed: usize,
}

impl SimField {
    pub fn new(width: i32, height: i32) -> SimResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }
        Ok(Self {
            bounds: Bounds { width, height },
            cars: Vec::new(),
            collision: None,
            steps_completed: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn cars(&self) -> &[SimCar] {
        &self.cars
    }

    pub fn car(&self, name: &str) -> Option<&SimCar> {
        self.cars.iter().find(|car| car.name() == name)
    }

    pub fn collision(&self) -> Option<&Collision> {
        self.collision.as_ref()
    }

    /// True once a collision has been recorded; no further steps will run
    pub fn is_halted(&self) -> bool {
        self.collision.is_some()
    }

    /// Number of steps committed to the cars so far
    pub fn steps_completed(&self) -> usize {
        self.steps_completed
    }

    /// Check that `name` could be given to a new car
    pub fn check_name(&self, name: &str) -> SimResult<()> {
        if name.is_empty() {
            return Err(SimError::EmptyName);
        }
        if self.car(name).is_some() {
            return Err(SimError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Check that a new car could start on `pos`
    pub fn check_start(&self, pos: GridPos) -> SimResult<()> {
        if !self.bounds.contains(pos) {
            return Err(SimError::OutOfBounds {
                pos,
                max_x: self.bounds.width - 1,
                max_y: self.bounds.height - 1,
            });
        }
        if let Some(occupant) = self.cars.iter().find(|other| other.position() == pos) {
            return Err(SimError::PositionOccupied {
                pos,
                occupant: occupant.name().to_string(),
            });
        }
        Ok(())
    }

    /// Add a car after checking its name and starting cell
    pub fn add_car(&mut self, car: SimCar) -> SimResult<()> {
        self.check_name(car.name())?;
        self.check_start(car.position())?;

        debug!("Added car {} with {} commands", car, car.commands().len());
        self.cars.push(car);
        Ok(())
    }

    /// Run every car through its command sequence, stopping at the first
    /// collision.
    ///
    /// A field that already holds a collision is terminal and is left as is.
    pub fn run_simulation(&mut self) -> SimResult<()> {
        let max_steps = self
            .cars
            .iter()
            .map(|car| car.commands().len())
            .max()
            .ok_or(SimError::NoCars)?;

        if let Some(collision) = &self.collision {
            warn!(
                "Field already halted by a collision at step {}, not running again",
                collision.step
            );
            return Ok(());
        }

        for step in 0..max_steps {
            let plan = self.plan_step(step);

            if let Some(collision) = self.find_collision(step, &plan) {
                info!(
                    "Collision at step {} at {} between {}",
                    collision.step,
                    collision.position,
                    collision.cars.join(", ")
                );
                self.collision = Some(collision);
                return Ok(());
            }

            self.commit(plan);
            debug!("Step {} committed for {} cars", step + 1, self.cars.len());
        }

        info!(
            "Simulation finished after {} steps without collision",
            max_steps
        );
        Ok(())
    }

    /// Next state of every car, in field order, from the current snapshot
    fn plan_step(&self, step: usize) -> Vec<CarState> {
        self.cars
            .iter()
            .map(|car| car.plan_step(step, self.bounds))
            .collect()
    }

    /// Group the plan by destination cell and report the first shared one.
    /// Groups are kept in order of first appearance so the result does not
    /// depend on hash order.
    fn find_collision(&self, step: usize, plan: &[CarState]) -> Option<Collision> {
        let mut group_index: HashMap<GridPos, usize> = HashMap::new();
        let mut groups: Vec<(GridPos, Vec<usize>)> = Vec::new();

        for (car_index, next) in plan.iter().enumerate() {
            match group_index.get(&next.position) {
                Some(&group) => groups[group].1.push(car_index),
                None => {
                    group_index.insert(next.position, groups.len());
                    groups.push((next.position, vec![car_index]));
                }
            }
        }

        groups
            .into_iter()
            .find(|(_, members)| members.len() > 1)
            .map(|(position, members)| Collision {
                step: step + 1,
                position,
                cars: members
                    .into_iter()
                    .map(|index| self.cars[index].name().to_string())
                    .collect(),
            })
    }

    fn commit(&mut self, plan: Vec<CarState>) {
        for (car, next) in self.cars.iter_mut().zip(plan) {
            car.commit(next);
        }
        self.steps_completed += 1;
    }
}
