//! Maze agent sandbox.
//!
//! Run with: `cargo run -p maze-sim -- <command>`
//!
//! Agent thresholds come from `AGENT_*` environment variables (a `.env` file
//! is loaded first) and can be overridden per run with command-line flags.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use maze_agent::{Agent, AgentConfig, Direction};
use maze_sim::{EpisodeEnd, load_map, run_episode};

/// Maze agent sandbox
#[derive(Parser)]
#[command(name = "maze-sim")]
#[command(about = "Run the subsumption maze agent on ASCII mazes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    agent: AgentArgs,

    #[command(subcommand)]
    command: Command,
}

/// Overrides for the environment-derived agent configuration.
#[derive(Args)]
struct AgentArgs {
    /// Chase vulnerable ghosts closer than this
    #[arg(long, global = true, value_name = "DIST")]
    hunt_radius: Option<f64>,

    /// Flee dangerous ghosts closer than this
    #[arg(long, global = true, value_name = "DIST")]
    evade_radius: Option<f64>,

    /// Move used when no layer acts (up, right, down, left, neutral)
    #[arg(long, global = true, value_name = "DIR")]
    fallback: Option<Direction>,
}

impl AgentArgs {
    fn build_agent(&self) -> Result<Agent> {
        let mut config =
            AgentConfig::from_env().context("Invalid agent configuration in environment")?;
        if let Some(radius) = self.hunt_radius {
            config.hunt_radius = radius;
        }
        if let Some(radius) = self.evade_radius {
            config.evade_radius = radius;
        }
        if let Some(fallback) = self.fallback {
            config.fallback = fallback;
        }

        tracing::info!(
            hunt_radius = config.hunt_radius,
            evade_radius = config.evade_radius,
            fallback = %config.fallback,
            "agent configured"
        );
        Agent::from_config(config).context("Invalid agent configuration")
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the agent's decision for the maze as given
    Decide {
        /// Maze file (defaults to the built-in maze)
        #[arg(short, long, value_name = "FILE")]
        map: Option<PathBuf>,

        /// Decision time budget in milliseconds
        #[arg(long, value_name = "MS")]
        budget_ms: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,
    },

    /// Step the agent through the maze until it clears it, gets caught, or
    /// runs out of ticks
    Run {
        /// Maze file (defaults to the built-in maze)
        #[arg(short, long, value_name = "FILE")]
        map: Option<PathBuf>,

        /// Maximum number of ticks
        #[arg(short, long, default_value_t = 500)]
        ticks: u32,

        /// Per-tick decision time budget in milliseconds
        #[arg(long, value_name = "MS")]
        budget_ms: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for AGENT_* overrides)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let agent = cli.agent.build_agent()?;

    match cli.command {
        Command::Decide {
            map,
            budget_ms,
            format,
        } => {
            let maze = load_map(map.as_deref())?;
            let deadline = budget_ms.map(|ms| Instant::now() + Duration::from_millis(ms));
            let decision = agent.decide(&maze, deadline);

            match format {
                OutputFormat::Summary => {
                    println!("{}\n", maze.render());
                    println!("move:   {}", decision.direction);
                    println!("source: {:?}", decision.source);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decision)?),
            }
        }
        Command::Run {
            map,
            ticks,
            budget_ms,
            format,
        } => {
            let mut maze = load_map(map.as_deref())?;
            let summary = run_episode(
                &agent,
                &mut maze,
                ticks,
                budget_ms.map(Duration::from_millis),
            );

            match format {
                OutputFormat::Summary => {
                    println!("{}\n", maze.render());
                    let end = match summary.end {
                        EpisodeEnd::Cleared => "maze cleared".to_string(),
                        EpisodeEnd::Caught(id) => format!("caught by {id}"),
                        EpisodeEnd::Stuck => "agent stuck".to_string(),
                        EpisodeEnd::TickLimit => "tick limit reached".to_string(),
                    };
                    println!("result:      {end}");
                    println!("ticks:       {}", summary.ticks);
                    println!("left:        {}", summary.remaining_collectibles);
                    if !summary.ghosts_eaten.is_empty() {
                        let eaten: Vec<String> =
                            summary.ghosts_eaten.iter().map(ToString::to_string).collect();
                        println!("ghosts eaten: {}", eaten.join(", "));
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
    }

    Ok(())
}
