use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use launch_pad_sim::io::{self, DEFAULT_STORE};
use launch_pad_sim::logging::init_tracing;
use launch_pad_sim::physics::projectile;
use launch_pad_sim::vehicle::presets;
use launch_pad_sim::{EventLog, LaunchPad, PersistError, RunOutcome, Scheduler, SimConfig};

/// Configure, launch and track model rockets from the command line.
#[derive(Debug, Parser)]
#[command(name = "launch-pad", version)]
struct Cli {
    /// Load launch parameters from this JSON file instead of the demo salvo.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save launch parameters after the run (defaults to the launcher store).
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_STORE)]
    save: Option<PathBuf>,

    /// Extra rocket as `name,angle,velocity`. Repeatable.
    #[arg(long = "rocket", value_parser = parse_rocket)]
    rockets: Vec<(String, f64, f64)>,

    /// Stop after this many ticks even if rockets are still flying.
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Pace ticks on the configured wall-clock interval.
    #[arg(long)]
    realtime: bool,
}

fn parse_rocket(s: &str) -> Result<(String, f64, f64), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [name, angle, velocity] = parts.as_slice() else {
        return Err(format!("expected name,angle,velocity, got `{s}`"));
    };
    let angle = angle.parse::<f64>().map_err(|e| format!("bad angle `{angle}`: {e}"))?;
    let velocity = velocity
        .parse::<f64>()
        .map_err(|e| format!("bad velocity `{velocity}`: {e}"))?;
    Ok((name.to_string(), angle, velocity))
}

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let log = EventLog::shared();
    let result = run(&cli, &log);

    // Full history on shutdown, success or not.
    print_log(&log);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "launch session failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, log: &Arc<EventLog>) -> Result<(), PersistError> {
    let config = SimConfig::from_env();

    let mut pad = match &cli.load {
        Some(path) => {
            let pad = io::read_pad_file(path, config.clone(), Arc::clone(log))?;
            tracing::info!(path = %path.display(), rockets = pad.len(), "loaded launch parameters");
            pad
        }
        None => {
            let mut pad = LaunchPad::new(config.clone(), Arc::clone(log));
            if cli.rockets.is_empty() {
                for (name, angle, velocity) in presets::DEMO_SALVO {
                    if let Err(e) = pad.add_rocket(name, angle, velocity) {
                        tracing::warn!(rocket = name, error = %e, "preset rejected");
                    }
                }
            }
            pad
        }
    };

    for (name, angle, velocity) in &cli.rockets {
        if let Err(e) = pad.add_rocket(name.clone(), *angle, *velocity) {
            tracing::warn!(rocket = %name, error = %e, "rocket rejected");
        }
    }

    pad.launch_all();
    let mut scheduler = Scheduler::new(config.tick_interval);
    let outcome = if cli.realtime {
        scheduler.run_realtime(&mut pad, cli.max_ticks)
    } else {
        scheduler.run(&mut pad, cli.max_ticks)
    };

    print_report(&pad, outcome);

    if let Some(path) = &cli.save {
        io::write_pad_file(path, &pad)?;
        tracing::info!(path = %path.display(), "saved launch parameters");
    }
    Ok(())
}

fn print_report(pad: &LaunchPad, outcome: RunOutcome) {
    let config = pad.config();
    println!();
    println!("====================================================================");
    println!("  LAUNCH PAD REPORT");
    println!("====================================================================");
    println!(
        "  Anchor: ({:.1}, {:.1})   Region: {:.0} x {:.0} m   dt = {} s",
        pad.anchor().x,
        pad.anchor().y,
        config.bounds.width,
        config.bounds.height,
        config.tick_dt,
    );
    match outcome {
        RunOutcome::Settled { ticks } => println!("  All rockets settled after {ticks} ticks"),
        RunOutcome::TickLimit { ticks } => println!("  Stopped at tick limit ({ticks} ticks)"),
    }
    println!();
    println!(
        "  {:<12} {:>6} {:>8} {:>9} {:>9} {:>8} {:>8}  {}",
        "name", "angle", "vel", "x (m)", "y (m)", "t (s)", "apex", "phase"
    );
    println!("  {}", "─".repeat(76));
    for r in pad.rockets() {
        let c = r.config();
        println!(
            "  {:<12} {:>6.1} {:>8.1} {:>9.1} {:>9.1} {:>8.2} {:>8.1}  {:?}",
            r.name(),
            c.angle_deg(),
            c.velocity(),
            r.position().x,
            r.position().y,
            r.elapsed(),
            projectile::apex_height(c.angle_deg(), c.velocity(), config.gravity),
            r.phase(),
        );
    }
    println!();
}

fn print_log(log: &EventLog) {
    for event in log {
        println!("{event}\n\n");
    }
}
