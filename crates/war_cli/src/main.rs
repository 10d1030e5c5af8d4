mod console;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use war_core::{DiceSource, GameConfig, Session, SimulationRng};

use console::{Answer, Console};

#[derive(Parser)]
#[command(version, about = "Turn-based territory conquest in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register territories, draw a secret mission and play until it is done.
    Play(PlayArgs),
    /// List the missions a game can draw from.
    Missions(MissionsArgs),
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured seed and `WAR_SEED`.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct MissionsArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => handle_play(args),
        Commands::Missions(args) => handle_missions(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };
    init_tracing(config.trace_filter());
    Ok(config)
}

fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or("warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let seed = args.seed.unwrap_or_else(|| config.params().seed);
    let mut rng = SimulationRng::new(seed);
    let mission = config
        .catalog()?
        .draw(&mut rng)
        .context("no mission to draw")?;

    let run_id = format!("war-{}", Utc::now().format("%Y%m%dT%H%M%S"));
    info!(
        target: "war_cli",
        run_id = %run_id,
        seed = rng.seed(),
        mission = %mission,
        "session started"
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.say("\n=== WAR: TERRITORY CONQUEST ===")?;
    console.say(&format!("Your mission: {mission}\n"))?;

    let map = match config.map() {
        Some(map) => map,
        None => match console.register_territories()? {
            Some(map) => map,
            None => return farewell(&mut console),
        },
    };

    let mut session = Session::new(map, mission, rng);
    play(&mut console, &mut session)?;
    if !session.is_over() {
        console.say(&format!(
            "Mission progress: {}",
            render::mission_status(session.tracker(), session.map())
        ))?;
    }
    info!(
        target: "war_cli",
        run_id = %run_id,
        mission = %session.mission(),
        turns = session.turn() - 1,
        won = session.is_over(),
        "session ended"
    );
    farewell(&mut console)
}

fn play<R: BufRead, W: Write, D: DiceSource>(
    console: &mut Console<R, W>,
    session: &mut Session<D>,
) -> Result<()> {
    while !session.is_over() {
        console.say(&format!("\n=== TURN {} ===", session.turn()))?;
        console.say(&render::map_table(session.map()))?;

        let Answer::Value(attacker) = console.ask::<usize>("Attacking territory (q to quit): ")?
        else {
            return Ok(());
        };
        let Answer::Value(defender) = console.ask::<usize>("Defending territory (q to quit): ")?
        else {
            return Ok(());
        };

        match session.play_turn(attacker, defender) {
            Ok(report) => {
                console.say(&render::battle_report(&report.outcome, session.map()))?;
                if report.mission_complete {
                    console.say("\n=== MISSION ACCOMPLISHED! ===")?;
                    console.say("You won the game!")?;
                }
            }
            Err(err) => console.say(&format!("ERROR: {err}"))?,
        }
    }
    Ok(())
}

fn farewell<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("\nGame over.")
}

fn handle_missions(args: MissionsArgs) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let catalog = config.catalog()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.missions())?);
        return Ok(());
    }
    for (i, mission) in catalog.missions().iter().enumerate() {
        println!("{}. {mission}", i + 1);
    }
    Ok(())
}
