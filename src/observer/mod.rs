//! Observations of a game for learning and evaluation agents.
//!
//! The game has perfect information, so both players see the same one-hot
//! tensor of shape `[3, 4, 4, 4]` (channel, row, file, rank):
//!
//! - Channel 0: empty cells
//! - Channel 1: player 0's pieces (`o`)
//! - Channel 2: player 1's pieces (`x`)

pub mod encoding;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ObserverError;
use crate::game::{Board, Coord, GameState, Player, FILES, HEIGHT, NUM_CELLS, RANKS};

pub const NUM_CHANNELS: usize = 3;
pub const OBSERVATION_SHAPE: [usize; 4] = [NUM_CHANNELS, HEIGHT, FILES, RANKS];
pub const OBSERVATION_SIZE: usize = NUM_CHANNELS * NUM_CELLS;

/// Extra observer options. The tensor observer accepts none.
pub type ObserverParams = BTreeMap<String, String>;

/// Which kind of observation a consumer asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationType {
    pub public_info: bool,
    pub perfect_recall: bool,
}

impl Default for ObservationType {
    fn default() -> Self {
        ObservationType {
            public_info: true,
            perfect_recall: false,
        }
    }
}

/// Flat index of `(channel, row, file, rank)` in row-major order.
pub fn index(channel: usize, coord: Coord) -> usize {
    ((channel * HEIGHT + coord.row) * FILES + coord.file) * RANKS + coord.rank
}

/// Produce the flat one-hot array for a board.
pub fn encode_board(board: &Board) -> [f32; OBSERVATION_SIZE] {
    let mut data = [0.0f32; OBSERVATION_SIZE];
    for coord in Board::coords() {
        data[index(board.get(coord).channel(), coord)] = 1.0;
    }
    data
}

/// Text grid of the board, highest row first.
pub fn render(board: &Board) -> String {
    board.to_string()
}

#[derive(Debug, Clone)]
pub struct TensorObserver {
    tensor: [f32; OBSERVATION_SIZE],
}

impl TensorObserver {
    /// Create an observer with an all-zero tensor. Any parameter is rejected.
    pub fn new(params: &ObserverParams) -> Result<Self, ObserverError> {
        if !params.is_empty() {
            return Err(ObserverError::UnsupportedParams(params.keys().cloned().collect()));
        }
        Ok(TensorObserver {
            tensor: [0.0; OBSERVATION_SIZE],
        })
    }

    /// Create an observer for the requested observation type. Only the
    /// public-information view without perfect recall is available.
    pub fn for_type(
        obs_type: Option<ObservationType>,
        params: &ObserverParams,
    ) -> Result<Self, ObserverError> {
        if let Some(ty) = obs_type {
            if !ty.public_info || ty.perfect_recall {
                return Err(ObserverError::UnsupportedObservationType {
                    public_info: ty.public_info,
                    perfect_recall: ty.perfect_recall,
                });
            }
        }
        Self::new(params)
    }

    /// Fill the tensor from `board`.
    pub fn build(&mut self, board: &Board) -> &[f32; OBSERVATION_SIZE] {
        self.tensor = encode_board(board);
        &self.tensor
    }

    /// Fill the tensor from `state`. The view does not depend on `player`.
    pub fn set_from(&mut self, state: &GameState, _player: Player) {
        self.build(state.board());
    }

    pub fn tensor(&self) -> &[f32; OBSERVATION_SIZE] {
        &self.tensor
    }

    pub fn get(&self, channel: usize, coord: Coord) -> f32 {
        self.tensor[index(channel, coord)]
    }

    /// Observation string of `state`, identical for both players.
    pub fn string_from(&self, state: &GameState, _player: Player) -> String {
        render(state.board())
    }
}
