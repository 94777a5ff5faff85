//! Match engine CLI
//!
//! Plays single matches (full or minute by minute), parallel batches and JSON
//! requests, and lists the stored result history.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fm_core::data::{sample_team, sample_teams};
use fm_core::engine::{seed_range, simulate_batch, EngineConfig, MatchController, MatchPlan};
use fm_core::history::{JsonLinesHistory, MatchHistory, MatchRecord};
use fm_core::models::{TacticalSetup, Team};

#[derive(Parser)]
#[command(name = "fm_cli")]
#[command(about = "Simulate football matches minute by minute", long_about = None)]
struct Cli {
    /// Engine config JSON (overrides FM_ENGINE_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match and print the event log
    Play {
        /// Home team: JSON file or sample team name
        #[arg(long)]
        home: String,

        /// Away team: JSON file or sample team name
        #[arg(long)]
        away: String,

        /// Home tactics JSON file
        #[arg(long)]
        home_tactics: Option<PathBuf>,

        /// Away tactics JSON file
        #[arg(long)]
        away_tactics: Option<PathBuf>,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Print a report for every minute
        #[arg(long)]
        step: bool,

        /// Append the result to this JSON-lines history file
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Run many seeds of one fixture in parallel
    Batch {
        #[arg(long)]
        home: String,

        #[arg(long)]
        away: String,

        /// Number of matches
        #[arg(long, default_value_t = 100)]
        matches: usize,

        /// First seed; the rest follow consecutively
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Run a JSON match request and print the JSON response
    Json {
        /// Request file path
        #[arg(long)]
        request: PathBuf,
    },

    /// List results stored in a history file
    History {
        #[arg(long)]
        file: PathBuf,

        /// Only matches involving this team id
        #[arg(long)]
        team: Option<u32>,
    },

    /// List the built-in sample teams
    Teams,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Play { home, away, home_tactics, away_tactics, seed, step, record } => {
            let home_team = load_team(&home)?;
            let away_team = load_team(&away)?;
            let plan = MatchPlan::new(home_team.clone(), away_team.clone())
                .with_tactics(load_tactics(home_tactics.as_deref())?, load_tactics(away_tactics.as_deref())?)
                .with_config(config);

            let mut controller = MatchController::seeded(plan, seed).context("Invalid match setup")?;
            println!("{} vs {} (seed {})", home_team.name, away_team.name, seed);

            if step {
                while !controller.is_finished() {
                    let report = controller.tick();
                    let line = match &report.event {
                        Some(event) => event.to_string(),
                        None => format!("{}'", report.minute),
                    };
                    println!(
                        "{:<24} {}-{}  possession {}",
                        line, report.score.0, report.score.1, report.possession
                    );
                }
            } else {
                controller.run_to_completion();
                for event in controller.state().events() {
                    println!("{}  ({}, {})", event, event.player_name, event.team_name);
                }
            }

            let result = controller.into_result();
            println!();
            println!("Full time: {} {} - {} {}", home_team.name, result.home_score, result.away_score, away_team.name);
            println!("Possession: {}", result.statistics.possession);
            println!("Shots: {} - {}", result.statistics.shots.home, result.statistics.shots.away);

            if let Some(path) = record {
                let mut history = JsonLinesHistory::new(&path);
                let entry = MatchRecord::new(&home_team, &away_team, result, Some(seed));
                history
                    .record(&entry)
                    .with_context(|| format!("Failed to record result to {}", path.display()))?;
                println!("Recorded match {}", entry.match_id);
            }
        }

        Commands::Batch { home, away, matches, seed } => {
            let plan = MatchPlan::new(load_team(&home)?, load_team(&away)?).with_config(config);
            let summary = simulate_batch(&plan, &seed_range(seed, matches)).context("Batch simulation failed")?;

            println!("{} vs {} over {} matches", plan.home_team.name, plan.away_team.name, summary.matches());
            println!("  Home wins: {}", summary.home_wins);
            println!("  Draws:     {}", summary.draws);
            println!("  Away wins: {}", summary.away_wins);
            println!("  Avg goals: {:.2} - {:.2}", summary.avg_home_goals, summary.avg_away_goals);
            println!("  Avg shots: {:.2} - {:.2}", summary.avg_home_shots, summary.avg_away_shots);
        }

        Commands::Json { request } => {
            let body = fs::read_to_string(&request)
                .with_context(|| format!("Failed to read {}", request.display()))?;
            let response = fm_core::simulate_match_json(&body).context("Simulation request failed")?;
            println!("{}", response);
        }

        Commands::History { file, team } => {
            let history = JsonLinesHistory::new(&file);
            let records = match team {
                Some(id) => history.for_team(id)?,
                None => history.all()?,
            };
            if records.is_empty() {
                println!("No matches recorded in {}", file.display());
            }
            for record in records {
                println!("{}  {}", record.played_at.format("%Y-%m-%d %H:%M"), record.headline());
            }
        }

        Commands::Teams => {
            for team in sample_teams() {
                println!("{:>3}  {} ({} players)", team.id, team.name, team.players.len());
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::from_env()?,
    };
    log::debug!("Engine config: {:?}", config);
    Ok(config)
}

/// A path to a team JSON file, or the name of a sample team.
fn load_team(source: &str) -> Result<Team> {
    let path = Path::new(source);
    if path.is_file() {
        let body = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let team: Team =
            serde_json::from_str(&body).with_context(|| format!("Invalid team JSON in {}", path.display()))?;
        return Ok(team);
    }

    match sample_team(source) {
        Some(team) => Ok(team),
        None => bail!("'{}' is neither a team file nor a sample team (see `fm_cli teams`)", source),
    }
}

fn load_tactics(path: Option<&Path>) -> Result<Option<TacticalSetup>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let body = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let tactics =
        serde_json::from_str(&body).with_context(|| format!("Invalid tactics JSON in {}", path.display()))?;
    Ok(Some(tactics))
}
