pub mod grid;
pub mod parser;
pub mod world;

pub use grid::{Color, Coord, Grid};
pub use parser::{parse_world, parse_world_from_str};
pub use world::World;
