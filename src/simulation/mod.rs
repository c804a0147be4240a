pub mod engine;
pub mod harness;

pub use engine::SimulationEngine;
pub use harness::{check, run_suite, CheckOutcome, SuiteReport};
