//! Soccer agent CLI
//!
//! Runs the agent core offline:
//! - `simulate`: a scripted drill for one role
//! - `replay`: recorded snapshot messages, one JSON object per line

mod runner;
mod scenario;
mod throttle;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use rc_core::wire::{decode_snapshot, encode_snapshot};
use rc_core::{Agent, DecisionConfig, PerceptionSnapshot, Role};

use crate::runner::RunStats;
use crate::scenario::Drill;
use crate::throttle::Throttle;

#[derive(Parser)]
#[command(name = "rc_agent")]
#[command(about = "Run the soccer agent core on scripted or recorded snapshots", long_about = None)]
#[command(version = rc_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoleArg {
    Striker,
    Dribbler,
    Passer,
    Receiver,
    Goalkeeper,
    Defender,
    StrikerGk,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Striker => Role::Striker,
            RoleArg::Dribbler => Role::Dribbler,
            RoleArg::Passer => Role::Passer,
            RoleArg::Receiver => Role::Receiver,
            RoleArg::Goalkeeper => Role::Goalkeeper,
            RoleArg::Defender => Role::Defender,
            RoleArg::StrikerGk => Role::StrikerGkVariant,
        }
    }
}

#[derive(clap::Args)]
struct EngineArgs {
    /// Decision preset (drill, match); defaults to RC_DECISION_PROFILE
    #[arg(long)]
    profile: Option<String>,

    /// Full decision config as JSON (overrides --profile)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum interval between sent commands
    #[arg(long, default_value = "75")]
    min_interval_ms: u64,

    /// Virtual time between snapshots
    #[arg(long, default_value = "100")]
    cycle_ms: u64,

    /// Write sent actions here, one JSON object per line
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted drill for one role
    Simulate {
        #[arg(long, value_enum, default_value = "striker")]
        role: RoleArg,

        /// Number of cycles (the last one ends the episode)
        #[arg(long, default_value = "20")]
        cycles: usize,

        /// Also write the drill snapshots here, replayable with `replay`
        #[arg(long)]
        emit: Option<PathBuf>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Replay recorded snapshot messages
    Replay {
        /// Snapshot file, one JSON message per line
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { role, cycles, emit, engine } => {
            let role = Role::from(role);
            println!("🏃 Scripted drill");
            println!("   Role:   {:?}", role);
            println!("   Cycles: {}", cycles);

            let snapshots = Drill::new(role, cycles).snapshots();
            if let Some(path) = emit {
                write_snapshots(&path, &snapshots)?;
                println!("   Snapshots written to: {}", path.display());
            }
            run_engine(&engine, snapshots)?;
        }

        Commands::Replay { input, engine } => {
            println!("📼 Replaying snapshots");
            println!("   Input: {}", input.display());

            let snapshots = read_snapshots(&input)?;
            run_engine(&engine, snapshots)?;
        }
    }

    Ok(())
}

fn load_config(args: &EngineArgs) -> Result<DecisionConfig> {
    let config = if let Some(path) = &args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?
    } else if let Some(profile) = &args.profile {
        match DecisionConfig::from_profile(profile) {
            Some(config) => config,
            None => anyhow::bail!("Unknown profile '{}' (expected drill or match)", profile),
        }
    } else {
        DecisionConfig::from_env_or_default()
    };

    config.validate().context("Invalid decision config")?;
    Ok(config)
}

fn run_engine(args: &EngineArgs, snapshots: Vec<PerceptionSnapshot>) -> Result<RunStats> {
    let config = load_config(args)?;
    let mut agent = Agent::new(config);
    let mut throttle = Throttle::new(Duration::from_millis(args.min_interval_ms));

    let stdout = io::stdout();
    let mut report = stdout.lock();
    let mut actions: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?,
        )),
        None => Box::new(io::sink()),
    };

    writeln!(report, "   Min interval: {:?}\n", throttle.min_interval())?;
    let stats = runner::run(
        &mut agent,
        snapshots,
        &mut throttle,
        Duration::from_millis(args.cycle_ms),
        &mut report,
        &mut actions,
    )?;
    actions.flush()?;

    print_stats(&stats);
    if let Some(path) = &args.output {
        println!("   Actions written to: {}", path.display());
    }
    Ok(stats)
}

fn print_stats(stats: &RunStats) {
    println!("\n✅ Run complete");
    println!("   Cycles:  {}", stats.cycles);
    println!("   Decided: {}", stats.decided);
    println!("   Skipped: {}", stats.skipped);
    println!("   Sent:    {}", stats.sent);
}

/// Read snapshot messages, skipping blank lines
fn read_snapshots(path: &Path) -> Result<Vec<PerceptionSnapshot>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut snapshots = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let snapshot = decode_snapshot(&line)
            .with_context(|| format!("{}:{}: bad snapshot", path.display(), index + 1))?;
        snapshots.push(snapshot);
    }
    Ok(snapshots)
}

fn write_snapshots(path: &Path, snapshots: &[PerceptionSnapshot]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for snapshot in snapshots {
        writeln!(writer, "{}", encode_snapshot(snapshot)?)?;
    }
    writer.flush()?;
    Ok(())
}
