use crate::error::Result;
use crate::simulation::engine::SimulationEngine;
use crate::world::{parse_world, World};
use colored::Colorize;
use std::path::Path;
use tracing::warn;

/// Stepped input world next to the world it was expected to become
#[derive(Debug)]
pub struct CheckOutcome {
    pub actual: World,
    pub expected: World,
}

impl CheckOutcome {
    #[inline]
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

/// Tally of a suite run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SuiteReport {
    pub passed: usize,
    pub failed: usize,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Step the world in `input` and compare it with the world in `expected`
pub fn check(input: &Path, expected: &Path, steps: u64) -> Result<CheckOutcome> {
    let mut actual = parse_world(input)?;
    SimulationEngine::new().run(&mut actual, steps)?;
    let expected = parse_world(expected)?;
    Ok(CheckOutcome { actual, expected })
}

/// Run `dir/in/test1`, `dir/in/test2`, ... against `dir/out/testN`, stopping
/// at the first number where either file is missing
pub fn run_suite(dir: &Path, steps: u64) -> Result<SuiteReport> {
    let mut report = SuiteReport::default();
    let engine = SimulationEngine::new();

    for n in 1usize.. {
        let input = dir.join("in").join(format!("test{}", n));
        let output = dir.join("out").join(format!("test{}", n));
        if !input.is_file() || !output.is_file() {
            break;
        }

        match check(&input, &output, steps) {
            Ok(outcome) if outcome.passed() => {
                println!("TEST: {} {}", n, "[OK]".green().bold());
                report.passed += 1;
            }
            Ok(outcome) => {
                println!("TEST: {} {}", n, "[ERROR]".red().bold());
                println!("{}", "GENERATED OUTPUT:".yellow());
                engine.print_world(&outcome.actual);
                println!("{}", "CORRECT OUTPUT:".yellow());
                engine.print_world(&outcome.expected);
                report.failed += 1;
            }
            Err(err) => {
                warn!(test = n, error = %err, "test case could not be run");
                println!("TEST: {} {} {}", n, "[ERROR]".red().bold(), err);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
