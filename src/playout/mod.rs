//! Random self-play with consistency checks after every move.

mod agent;
pub mod checks;
mod random;

pub use agent::Agent;
pub use random::RandomAgent;

use serde::Serialize;

use crate::config::SimulationConfig;
use crate::error::CheckError;
use crate::game::{GameOutcome, GameState, Player};

/// A finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub actions: Vec<usize>,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.final_state.outcome() {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }
}

/// Play one game between two agents, checking every transition.
pub fn play_game(first: &mut dyn Agent, second: &mut dyn Agent) -> Result<GameRecord, CheckError> {
    let mut state = GameState::initial();
    let mut actions = Vec::new();
    checks::check_state(&state)?;

    while let Some(player) = state.current_player().player() {
        let agent: &mut dyn Agent = match player {
            Player::O => &mut *first,
            Player::X => &mut *second,
        };
        let action = agent.select_action(&state);
        let before = state;
        state
            .apply_action(action)
            .map_err(|source| CheckError::IllegalAction {
                action,
                legal: before.legal_actions(),
                source,
            })?;
        actions.push(action);

        checks::check_transition(&before, &state)?;
        checks::check_state(&state)?;
    }

    Ok(GameRecord {
        actions,
        final_state: state,
    })
}

/// Aggregate results of a batch of random games.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationReport {
    pub games: usize,
    pub wins: [usize; 2],
    pub draws: usize,
    pub total_moves: usize,
    pub shortest: usize,
    pub longest: usize,
}

impl SimulationReport {
    fn record(&mut self, game: &GameRecord) {
        let length = game.actions.len();
        if self.games == 0 || length < self.shortest {
            self.shortest = length;
        }
        self.longest = self.longest.max(length);
        self.games += 1;
        self.total_moves += length;
        match game.winner() {
            Some(player) => self.wins[player.index()] += 1,
            None => self.draws += 1,
        }
    }

    pub fn mean_length(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }
}

/// Play `config.num_games` random games, failing on the first broken check.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport, CheckError> {
    let (mut first, mut second) = match config.seed {
        Some(seed) => (
            RandomAgent::with_seed(seed),
            RandomAgent::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomAgent::new(), RandomAgent::new()),
    };

    let mut report = SimulationReport::default();
    for game_index in 0..config.num_games {
        let game = play_game(&mut first, &mut second)?;
        tracing::debug!(
            game = game_index,
            moves = game.actions.len(),
            returns = ?game.final_state.returns(),
            "finished game"
        );
        report.record(&game);
    }

    tracing::info!(
        games = report.games,
        p0_wins = report.wins[0],
        p1_wins = report.wins[1],
        draws = report.draws,
        mean_length = report.mean_length(),
        "simulation complete"
    );
    Ok(report)
}
