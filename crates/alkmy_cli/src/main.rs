//! Alkmy CLI
//!
//! Inspect loop files, compute copy counts, and simulate logo loops and
//! flow-diagram schedules without a display.

use std::path::{Path, PathBuf};

use alkmy_animation::{ParticleSchedule, StaggerConfig, StepCycle, StepHighlight};
use alkmy_core::Size;
use alkmy_marquee::copy_count;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod simulate;

use config::LoopFile;

/// View box of the flow diagram
const FLOW_VIEW: Size = Size::new(600.0, 800.0);
/// Padding around the flow diagram inside its parent
const FLOW_PADDING: Size = Size::new(32.0, 64.0);

#[derive(Parser)]
#[command(name = "alkmy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Alkmy motion toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of copies needed to cover a container
    Copies {
        /// Container extent along the loop axis (pixels)
        #[arg(long)]
        container: f32,

        /// Measured sequence extent (pixels)
        #[arg(long)]
        sequence: f32,
    },

    /// Validate a loop file
    Check {
        /// Loop file (TOML)
        config: PathBuf,

        /// Print the file with every default filled in
        #[arg(long)]
        resolved: bool,
    },

    /// Run a loop with synthetic frames and print its motion
    Simulate {
        /// Loop file (TOML)
        config: PathBuf,

        /// Override the number of frames
        #[arg(long)]
        frames: Option<u32>,

        /// Override the refresh rate
        #[arg(long)]
        fps: Option<f32>,

        /// Override the container extent (pixels)
        #[arg(long)]
        container: Option<f32>,

        /// Override the sequence extent (pixels)
        #[arg(long)]
        sequence: Option<f32>,

        /// Frame at which the pointer enters
        #[arg(long)]
        hover_at: Option<u32>,

        /// Print one sample every N frames
        #[arg(long, default_value = "10")]
        every: u32,

        /// Print samples as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a particle schedule for the flow diagram
    Flow {
        /// Number of incoming paths
        #[arg(long, default_value = "5")]
        paths: usize,

        /// Seed for reproducible schedules
        #[arg(long)]
        seed: Option<u64>,

        /// Parent width used to fit the diagram (pixels)
        #[arg(long)]
        width: Option<f32>,

        /// Parent height used to fit the diagram (pixels)
        #[arg(long)]
        height: Option<f32>,
    },

    /// Show which process steps are highlighted over time
    Steps {
        /// Number of steps
        #[arg(long, default_value = "3")]
        steps: usize,

        /// Seconds to simulate
        #[arg(long, default_value = "15")]
        seconds: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Copies {
            container,
            sequence,
        } => cmd_copies(container, sequence),

        Commands::Check { config, resolved } => cmd_check(&config, resolved),

        Commands::Simulate {
            config,
            frames,
            fps,
            container,
            sequence,
            hover_at,
            every,
            json,
        } => {
            let mut file = LoopFile::load(&config)?;
            let sim = &mut file.simulation;
            sim.frames = frames.unwrap_or(sim.frames);
            sim.fps = fps.unwrap_or(sim.fps);
            sim.container = container.unwrap_or(sim.container);
            sim.sequence = sequence.unwrap_or(sim.sequence);
            if hover_at.is_some() {
                sim.hover_at = hover_at;
            }
            cmd_simulate(file, every, json)
        }

        Commands::Flow {
            paths,
            seed,
            width,
            height,
        } => cmd_flow(paths, seed, width, height),

        Commands::Steps { steps, seconds } => cmd_steps(steps, seconds),
    }
}

fn cmd_copies(container: f32, sequence: f32) -> Result<()> {
    let count = copy_count(container, sequence);
    info!(container, sequence, "Computed copy count");
    println!("{count}");
    Ok(())
}

fn cmd_check(path: &Path, resolved: bool) -> Result<()> {
    let file = LoopFile::load(path)?;
    file.logo_loop
        .validate()
        .with_context(|| format!("Invalid loop in {}", path.display()))?;

    let config = &file.logo_loop;
    info!(
        "{}: {} items ({} images), {} at {}px/s, hover speed {:?}, width {}",
        path.display(),
        config.items.len(),
        config.image_count(),
        config.direction,
        config.speed,
        config.effective_hover_speed(),
        config.width
    );
    if resolved {
        print!("{}", file.to_toml()?);
    } else {
        println!("ok");
    }
    Ok(())
}

fn cmd_simulate(file: LoopFile, every: u32, json: bool) -> Result<()> {
    file.logo_loop.validate()?;
    info!(
        frames = file.simulation.frames,
        fps = file.simulation.fps,
        container = file.simulation.container,
        sequence = file.simulation.sequence,
        "Simulating loop"
    );

    let samples = simulate::run(file.logo_loop, &file.simulation, every)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    println!(
        "{:>6} {:>8} {:>10} {:>10} {:>7} {:>6}",
        "frame", "time", "offset", "velocity", "hover", "copies"
    );
    for s in &samples {
        println!(
            "{:>6} {:>8.3} {:>10.2} {:>10.2} {:>7} {:>6}",
            s.frame, s.time, s.offset, s.velocity, s.hovered, s.copies
        );
    }
    Ok(())
}

fn cmd_flow(paths: usize, seed: Option<u64>, width: Option<f32>, height: Option<f32>) -> Result<()> {
    let config = StaggerConfig::default();
    let schedule = match seed {
        Some(seed) => ParticleSchedule::generate(paths, &config, &mut StdRng::seed_from_u64(seed)),
        None => ParticleSchedule::random(paths, &config),
    };

    println!("{:>5} {:>9} {:>7} {:>8}", "path", "duration", "delay", "arrival");
    for (i, t) in schedule.timings().iter().enumerate() {
        println!(
            "{:>5} {:>9.2} {:>7.2} {:>8.2}",
            i + 1,
            t.duration,
            t.delay,
            t.arrival(config.arrival_fraction)
        );
    }
    match schedule.insight_delay() {
        Some(delay) => println!("insight starts at {delay:.2}s"),
        None => println!("no incoming paths; insight never starts"),
    }

    if let (Some(w), Some(h)) = (width, height) {
        let scale = FLOW_VIEW.fit_scale(Size::new(w, h), FLOW_PADDING);
        println!("scale {scale:.3} ({w}x{h} parent)");
    }
    Ok(())
}

fn cmd_steps(steps: usize, seconds: u32) -> Result<()> {
    let mut cycle = StepCycle::new(steps);
    let describe = |cycle: &StepCycle| match cycle.highlight() {
        StepHighlight::Step(i) => format!("step {}", i + 1),
        StepHighlight::All => "all steps".to_string(),
    };

    println!("{:>4}s {}", 0, describe(&cycle));
    for second in 1..=seconds {
        if cycle.tick(1.0) {
            println!("{second:>4}s {}", describe(&cycle));
        }
    }
    Ok(())
}
