//! Core game logic: board geometry, players, winning lines and the state
//! machine driven by a game host.

mod board;
mod info;
pub mod lines;
mod player;
mod state;

pub use board::{Board, Cell, Coord, Pole, FILES, HEIGHT, NUM_ACTIONS, NUM_CELLS, RANKS};
pub use info::{
    ChanceMode, ConnectFour3d, Dynamics, GameInfo, GameType, Information, RewardModel, Utility,
    GAME_INFO, GAME_TYPE, NUM_PLAYERS,
};
pub use lines::Direction;
pub use player::Player;
pub use state::{GameOutcome, GameState, LegalActions, Turn};
