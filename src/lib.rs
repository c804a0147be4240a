//! # Langton's Ant
//!
//! Any number of ants walking a black-and-white board. Each ant flips the
//! cell it leaves and turns on the cell it reaches: right on white, left on
//! black.
//!
//! The board has no fixed edge. It starts as a small rectangle and doubles
//! along one axis whenever an ant would step off it, shifting every ant so
//! that it keeps standing on the same cell.

pub mod ant;
pub mod cli;
pub mod direction;
pub mod error;
pub mod simulation;
pub mod telemetry;
pub mod version;
pub mod world;

pub use ant::Ant;
pub use cli::Args;
pub use direction::Direction;
pub use error::{Error, Result};
pub use simulation::SimulationEngine;
pub use world::{Color, Coord, Grid, World};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Ant, Args, Color, Coord, Direction, Error, Result, SimulationEngine, World};
}
