use serde::Serialize;

use super::board::{NUM_ACTIONS, NUM_CELLS};
use super::GameState;
use crate::error::ObserverError;
use crate::observer::{ObservationType, ObserverParams, TensorObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dynamics {
    Sequential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChanceMode {
    Deterministic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Information {
    PerfectInformation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Utility {
    ZeroSum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RewardModel {
    Terminal,
}

/// Static description of the kind of game, as a game host registers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameType {
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub dynamics: Dynamics,
    pub chance_mode: ChanceMode,
    pub information: Information,
    pub utility: Utility,
    pub reward_model: RewardModel,
    pub min_num_players: usize,
    pub max_num_players: usize,
    pub provides_information_state_string: bool,
    pub provides_information_state_tensor: bool,
    pub provides_observation_string: bool,
    pub provides_observation_tensor: bool,
}

/// Size limits of the game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameInfo {
    pub num_distinct_actions: usize,
    pub max_chance_outcomes: usize,
    pub num_players: usize,
    pub min_utility: f64,
    pub max_utility: f64,
    pub utility_sum: f64,
    /// Reached only when every cell is filled without a winner.
    pub max_game_length: usize,
}

pub const NUM_PLAYERS: usize = 2;

pub const GAME_TYPE: GameType = GameType {
    short_name: "connect_four_3d",
    long_name: "Connect Four 3D",
    dynamics: Dynamics::Sequential,
    chance_mode: ChanceMode::Deterministic,
    information: Information::PerfectInformation,
    utility: Utility::ZeroSum,
    reward_model: RewardModel::Terminal,
    min_num_players: NUM_PLAYERS,
    max_num_players: NUM_PLAYERS,
    provides_information_state_string: true,
    provides_information_state_tensor: true,
    provides_observation_string: true,
    provides_observation_tensor: true,
};

pub const GAME_INFO: GameInfo = GameInfo {
    num_distinct_actions: NUM_ACTIONS,
    max_chance_outcomes: 0,
    num_players: NUM_PLAYERS,
    min_utility: -1.0,
    max_utility: 1.0,
    utility_sum: 0.0,
    max_game_length: NUM_CELLS,
};

/// Entry point a game host talks to: creates states and observers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectFour3d;

impl ConnectFour3d {
    pub fn new() -> Self {
        ConnectFour3d
    }

    pub fn game_type(&self) -> &'static GameType {
        &GAME_TYPE
    }

    pub fn info(&self) -> &'static GameInfo {
        &GAME_INFO
    }

    /// Empty board, player 0 to move.
    pub fn new_initial_state(&self) -> GameState {
        GameState::initial()
    }

    pub fn make_observer(
        &self,
        obs_type: Option<ObservationType>,
        params: &ObserverParams,
    ) -> Result<TensorObserver, ObserverError> {
        TensorObserver::for_type(obs_type, params)
    }
}
