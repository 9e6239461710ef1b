use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect_four_3d::config::AppConfig;
use connect_four_3d::game::{ConnectFour3d, GameOutcome, GameState};
use connect_four_3d::playout;

/// Four-in-a-row on a 4x4x4 gravity cube.
#[derive(Parser)]
#[command(name = "connect-four-3d", about = "Play or simulate Connect Four 3D")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four_3d.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Two humans play at the terminal
    Play,
    /// Random self-play with consistency checks after every move
    Simulate {
        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Override random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the game's static metadata as JSON
    Info,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play => play(&config),
        Command::Simulate { games, seed, json } => {
            if let Some(games) = games {
                config.simulation.num_games = games;
            }
            if seed.is_some() {
                config.simulation.seed = seed;
            }
            config.validate()?;
            simulate(&config, json)
        }
        Command::Info => {
            let game = ConnectFour3d::new();
            let info = serde_json::json!({
                "type": game.game_type(),
                "info": game.info(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
    }
}

fn play(config: &AppConfig) -> Result<()> {
    let game = ConnectFour3d::new();
    let observer = game
        .make_observer(None, &config.observer.params)
        .context("building observer")?;
    let mut state = game.new_initial_state();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(player) = state.current_player().player() {
        println!("{}", observer.string_from(&state, player));
        prompt(&state, config)?;

        let Some(line) = lines.next() else {
            println!();
            tracing::info!("input closed, abandoning game");
            return Ok(());
        };
        let line = line.context("reading move")?;

        let Ok(action) = line.trim().parse::<usize>() else {
            continue;
        };
        if let Err(err) = state.apply_action(action) {
            tracing::debug!(%err, action, "rejected move");
        }
    }

    println!("{}", observer.string_from(&state, state.mover()));
    match state.outcome() {
        Some(GameOutcome::Winner(player)) => println!("{} wins!", player.name()),
        _ => println!("It's a draw!"),
    }
    Ok(())
}

fn prompt(state: &GameState, config: &AppConfig) -> Result<()> {
    let player = state.mover();
    let legal = state.legal_actions();
    let mut out = io::stdout().lock();

    if !config.play.show_legal_actions {
        write!(out, "{} next move:", player.name())?;
    } else if config.play.show_action_labels {
        let labels = legal
            .iter()
            .map(|&a| state.action_to_string(player, a))
            .collect::<Result<Vec<_>, _>>()?;
        write!(out, "{} next move among [{}]:", player.name(), labels.join(", "))?;
    } else {
        write!(out, "{} next move among {:?}:", player.name(), legal)?;
    }
    out.flush()?;
    Ok(())
}

fn simulate(config: &AppConfig, json: bool) -> Result<()> {
    let report = playout::simulate(&config.simulation).context("consistency check failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Games:       {}", report.games);
        println!("P0 wins:     {}", report.wins[0]);
        println!("P1 wins:     {}", report.wins[1]);
        println!("Draws:       {}", report.draws);
        println!(
            "Length:      {:.1} avg ({}..={})",
            report.mean_length(),
            report.shortest,
            report.longest
        );
    }
    Ok(())
}
