use std::io::{self, Write};
use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

use bingo_caller::{
    display_state_json, Announcement, CallerConfig, CallerEngine, WriterAnnouncer,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() -> bingo_caller::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let mut engine = build_engine(&config);

    match cli.command {
        Commands::Call { count } => {
            run_call(&mut engine, count, &mut io::stdout())?;
            Ok(())
        }
        Commands::Play => run_play(&mut engine, &config),
        Commands::Board { calls } => {
            call_quietly(&mut engine, calls);
            print!("{}", engine.board());
            Ok(())
        }
        Commands::State { calls } => {
            call_quietly(&mut engine, calls);
            println!("{}", display_state_json(&engine)?);
            Ok(())
        }
    }
}

fn build_engine(config: &CallerConfig) -> CallerEngine {
    let announcement = Announcement::new(Box::new(WriterAnnouncer::new(std::io::stdout())))
        .enabled(config.announcements_enabled);
    CallerEngine::from_config(config).with_announcement(announcement)
}

/// Call up to `count` balls, writing one line each. Running out of balls ends
/// the run with the rejection message; it is not an error. Returns how many
/// balls were actually called.
fn run_call<W: Write>(engine: &mut CallerEngine, count: usize, out: &mut W) -> bingo_caller::Result<usize> {
    let mut called = 0;
    for _ in 0..count {
        match engine.call() {
            Ok(call) => {
                writeln!(out, "{:>5}  ({} called, {} left)", call.to_string(), call.called_count, call.total_remaining)?;
                called += 1;
            }
            Err(rejected) => {
                tracing::debug!(requested = count, called, "stopping early");
                writeln!(out, "{rejected}")?;
                break;
            }
        }
    }
    Ok(called)
}

fn run_play(engine: &mut CallerEngine, config: &CallerConfig) -> bingo_caller::Result<()> {
    tracing::info!(seed = ?config.rng_seed, interval_ms = config.call_interval_ms, "starting game");
    let interval = Duration::from_millis(config.call_interval_ms);

    loop {
        let call = engine.call()?;
        let progress = engine.progress();
        println!("{:>5}  [{:>3}%]", call.to_string(), progress.percent);

        if call.is_last_call {
            sleep(Duration::from_millis(config.completion_delay_ms));
            engine.retire_current();
            println!("DONE!");
            return Ok(());
        }
        if !interval.is_zero() {
            sleep(interval);
        }
    }
}

/// Advance the game without printing each ball.
fn call_quietly(engine: &mut CallerEngine, calls: usize) {
    for _ in 0..calls {
        if engine.call().is_err() {
            break;
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "75-ball bingo number caller", long_about = None)]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for a reproducible game.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print each call as the caller would say it.
    #[arg(long, global = true, overrides_with = "no_announce")]
    announce: bool,

    /// Keep announcements off even if the config file enables them.
    #[arg(long, global = true, overrides_with = "announce")]
    no_announce: bool,

    /// Pause between calls in `play`, in milliseconds.
    #[arg(long, global = true)]
    interval_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn resolve_config(&self) -> bingo_caller::Result<CallerConfig> {
        let mut config = match &self.config {
            Some(path) => CallerConfig::from_path(path)?,
            None => CallerConfig::default(),
        };
        if self.seed.is_some() {
            config.rng_seed = self.seed;
        }
        if self.announce {
            config.announcements_enabled = true;
        }
        if self.no_announce {
            config.announcements_enabled = false;
        }
        if let Some(ms) = self.interval_ms {
            config.call_interval_ms = ms;
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Call one or more numbers.
    Call {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Call every number until the game is over.
    Play,
    /// Show the master board after some calls.
    Board {
        #[arg(long, default_value_t = 0)]
        calls: usize,
    },
    /// Print the JSON display state after some calls.
    State {
        #[arg(long, default_value_t = 0)]
        calls: usize,
    },
}
