use crate::error::Result;
use crate::world::{Color, World};
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Drives a world for a number of ticks and reports on it
pub struct SimulationEngine {
    /// Log a progress line every this many ticks
    progress_every: u64,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self {
            progress_every: 100_000,
        }
    }

    /// Run `steps` ticks; stops at the first failed tick
    pub fn run(&self, world: &mut World, steps: u64) -> Result<Duration> {
        info!(
            steps,
            ants = world.ant_count(),
            rows = world.rows(),
            cols = world.cols(),
            "starting simulation"
        );
        let sim_start = Instant::now();

        for tick in 1..=steps {
            world.step()?;
            if tick % self.progress_every == 0 {
                debug!(
                    tick,
                    rows = world.rows(),
                    cols = world.cols(),
                    expansions = world.expansions(),
                    "progress"
                );
            }
        }

        let elapsed = sim_start.elapsed();
        info!(elapsed_ms = elapsed.as_secs_f64() * 1000.0, "simulation finished");
        Ok(elapsed)
    }

    /// Print ants and board, black cells highlighted
    pub fn print_world(&self, world: &World) {
        println!("{} {}", "NUM ANTS:".bold(), world.ant_count());
        for (i, ant) in world.ants().iter().enumerate() {
            println!(
                "{} {} {} {} {}",
                format!("ANT[{}]", i).yellow(),
                format!("ROW: {}", ant.pos.row).cyan(),
                format!("COL: {}", ant.pos.col).cyan(),
                format!("DIRECTION: {}", ant.dir.index()).cyan(),
                format!("({})", ant.dir.as_str()).dimmed(),
            );
        }
        println!(
            "{} {} {}",
            "BOARD".bold(),
            format!("ROWS: {}", world.rows()).cyan(),
            format!("COLS: {}", world.cols()).cyan(),
        );

        let mut line = String::with_capacity(world.cols() * 8);
        for r in 0..world.rows() {
            line.clear();
            for &cell in world.grid().row(r).into_iter().flatten() {
                let ch = cell.as_char().to_string();
                match cell {
                    Color::Black => line.push_str(&ch.black().on_white().to_string()),
                    Color::White => line.push_str(&ch.dimmed().to_string()),
                }
            }
            println!("{}", line);
        }
    }

    /// Print simulation summary
    pub fn print_summary(&self, world: &World, simulation_time: Duration) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("steps={}", world.steps()).cyan(),
            format!("ants={}", world.ant_count()).cyan(),
            format!("board={}x{}", world.rows(), world.cols()).cyan(),
            format!("black={}", world.grid().count(Color::Black)).cyan(),
            format!("expansions={}", world.expansions()).cyan(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::world::Coord;

    #[test]
    fn test_run_counts_steps() {
        let mut world = World::new(5, 5).unwrap();
        world.add_ant(Coord::new(2, 2), Direction::Up).unwrap();

        let engine = SimulationEngine::new();
        engine.run(&mut world, 12).unwrap();

        assert_eq!(world.steps(), 12);
    }

    #[test]
    fn test_run_zero_steps_is_noop() {
        let mut world = World::new(2, 2).unwrap();
        world.add_ant(Coord::new(0, 0), Direction::Left).unwrap();
        let before = world.clone();

        SimulationEngine::new().run(&mut world, 0).unwrap();

        assert_eq!(world, before);
        assert_eq!(world.steps(), 0);
    }

    #[test]
    fn test_highway_keeps_board_consistent() {
        // Past ~10k steps a single ant builds its diagonal highway
        let mut world = World::new(1, 1).unwrap();
        world.add_ant(Coord::new(0, 0), Direction::Up).unwrap();

        SimulationEngine::new().run(&mut world, 11_000).unwrap();

        let ant = world.ants()[0];
        assert!(world.grid().contains(ant.pos));
        assert!(world.expansions() >= 4);
        assert!(world.grid().count(Color::Black) > 0);
    }
}
