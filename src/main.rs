use langton_ant::prelude::*;
use langton_ant::simulation::{check, run_suite};
use langton_ant::world::parse_world;
use langton_ant::{telemetry, version};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> std::result::Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    telemetry::init(args.verbose);

    if let Some(dir) = &args.suite {
        println!("TESTING LANGTON'S ANT VERSION: {}", version::version_string());
        let report = run_suite(dir, args.steps)?;
        println!(
            "\n{} {}",
            "===".bright_blue().bold(),
            format!("passed={} failed={}", report.passed, report.failed).cyan()
        );
        return Ok(exit_code(report.all_passed()));
    }

    if let (Some(map), Some(expected)) = (&args.map, &args.expect) {
        let outcome = check(map, expected, args.steps)?;
        let engine = SimulationEngine::new();
        if outcome.passed() {
            println!("{}", "[OK]".green().bold());
        } else {
            println!("{}", "[ERROR]".red().bold());
            println!("{}", "GENERATED OUTPUT:".yellow());
            engine.print_world(&outcome.actual);
            println!("{}", "CORRECT OUTPUT:".yellow());
            engine.print_world(&outcome.expected);
        }
        return Ok(exit_code(outcome.passed()));
    }

    // Load or generate the world
    let mut world = match &args.map {
        Some(path) => parse_world(path)?,
        None => {
            let mut rng = match args.seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            let mut world = World::new(args.rows, args.cols)?;
            world.scatter_ants(args.ants, &mut rng)?;
            world
        }
    };

    let engine = SimulationEngine::new();
    let simulation_time = engine.run(&mut world, args.steps)?;

    if let Some(expected) = &args.expect {
        let expected = parse_world(expected)?;
        let passed = world == expected;
        println!("{}", if passed { "[OK]".green().bold() } else { "[ERROR]".red().bold() });
        return Ok(exit_code(passed));
    }

    if args.snapshot {
        print!("{}", world);
    } else {
        if !args.quiet {
            engine.print_world(&world);
        }
        engine.print_summary(&world, simulation_time);
    }

    Ok(ExitCode::SUCCESS)
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
