use std::fmt;

use serde::Serialize;

use super::board::{Board, Coord, Pole};
use super::lines;
use super::Player;
use crate::error::MoveError;

/// Actions that can currently be played, in ascending order.
pub type LegalActions = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Net score of player 0.
    pub fn player0_score(self) -> f64 {
        match self {
            GameOutcome::Winner(Player::O) => 1.0,
            GameOutcome::Winner(Player::X) => -1.0,
            GameOutcome::Draw => 0.0,
        }
    }
}

/// Who moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player(Player),
    Terminal,
}

impl Turn {
    pub fn player(self) -> Option<Player> {
        match self {
            Turn::Player(player) => Some(player),
            Turn::Terminal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    move_count: usize,
    last_move: Option<Coord>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::O,
            outcome: None,
            move_count: 0,
            last_move: None,
        }
    }

    /// Player to move, or [`Turn::Terminal`] once the game is over.
    pub fn current_player(&self) -> Turn {
        if self.is_terminal() {
            Turn::Terminal
        } else {
            Turn::Player(self.current_player)
        }
    }

    /// The player whose turn it is, or who made the final move of a finished
    /// game.
    pub fn mover(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Cell filled by the most recent action.
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Poles whose top cell is still empty; nothing once the game is over.
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }

        Pole::all()
            .filter(|&pole| !self.board.is_pole_full(pole))
            .map(Pole::action)
            .collect()
    }

    pub fn is_legal(&self, action: usize) -> bool {
        self.check_action(action).is_ok()
    }

    fn check_action(&self, action: usize) -> Result<Pole, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pole = Pole::from_action(action).ok_or(MoveError::OutOfRange { action })?;
        if self.board.is_pole_full(pole) {
            return Err(MoveError::PoleFull { action });
        }
        Ok(pole)
    }

    /// Drop the current player's piece into the pole named by `action` and
    /// return the cell it landed on.
    ///
    /// Illegal actions are rejected without touching the state. A legal pole
    /// that turns out to have no empty cell means the board is corrupted and
    /// aborts.
    pub fn apply_action(&mut self, action: usize) -> Result<Coord, MoveError> {
        let pole = self.check_action(action)?;
        let player = self.current_player;

        let landed = self
            .board
            .drop_piece(pole, player.to_cell())
            .unwrap_or_else(|err| panic!("board invariant violated on action {action}: {err}"));
        self.move_count += 1;
        self.last_move = Some(landed);

        tracing::debug!(
            action,
            row = landed.row,
            file = landed.file,
            rank = landed.rank,
            player = player.index(),
            "applied action"
        );

        if lines::completes_line(&self.board, landed, player.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        if let Some(outcome) = self.outcome {
            tracing::debug!(?outcome, moves = self.move_count, "game over");
        }

        Ok(landed)
    }

    /// Apply an action and return the new state, leaving `self` untouched.
    pub fn with_action(&self, action: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_action(action)?;
        Ok(next)
    }

    /// `[player 0, player 1]` totals; zero until the game ends.
    pub fn returns(&self) -> [f64; 2] {
        let score = self.outcome.map_or(0.0, GameOutcome::player0_score);
        [score, -score]
    }

    /// Diagnostic label `action(row,file,rank)` using the row the piece would
    /// land on right now. The player does not change the label.
    pub fn action_to_string(&self, _player: Player, action: usize) -> Result<String, MoveError> {
        let pole = Pole::from_action(action).ok_or(MoveError::OutOfRange { action })?;
        let row = self
            .board
            .landing_row(pole)
            .map_err(|_| MoveError::PoleFull { action })?;
        Ok(format!("{action}({row},{},{})", pole.file, pole.rank))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn play(actions: &[usize]) -> GameState {
        let mut state = GameState::initial();
        for &action in actions {
            state.apply_action(action).unwrap();
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Turn::Player(Player::O));
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions(), (0..16).collect::<Vec<_>>());
        assert_eq!(state.returns(), [0.0, 0.0]);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_action() {
        let mut state = GameState::initial();
        let landed = state.apply_action(6).unwrap();

        assert_eq!(landed, Coord::new(0, 1, 2));
        assert_eq!(state.board().get(landed), Cell::O);
        assert_eq!(state.current_player(), Turn::Player(Player::X));

        let landed = state.apply_action(6).unwrap();
        assert_eq!(landed, Coord::new(1, 1, 2));
        assert_eq!(state.board().get(landed), Cell::X);
        assert_eq!(state.last_move(), Some(landed));
    }

    #[test]
    fn test_with_action_leaves_original() {
        let state = GameState::initial();
        let next = state.with_action(3).unwrap();
        assert_eq!(state.move_count(), 0);
        assert_eq!(next.move_count(), 1);
        assert_eq!(next.current_player(), Turn::Player(Player::X));
    }

    #[test]
    fn test_turn_alternates_until_terminal() {
        let mut state = GameState::initial();
        let mut expected = Player::O;
        for action in [0, 4, 0, 4, 0, 4] {
            assert_eq!(state.current_player(), Turn::Player(expected));
            state.apply_action(action).unwrap();
            expected = expected.other();
        }
        state.apply_action(0).unwrap();
        assert_eq!(state.current_player(), Turn::Terminal);
        assert_eq!(state.mover(), Player::O);
    }

    #[test]
    fn test_full_pole_is_not_legal() {
        let state = play(&[9, 9, 9, 9]);
        assert!(!state.legal_actions().contains(&9));
        assert_eq!(state.legal_actions().len(), 15);
        assert!(!state.is_legal(9));
    }

    #[test]
    fn test_illegal_actions_leave_state_untouched() {
        let mut state = play(&[9, 9, 9, 9]);
        let before = state;

        assert_eq!(state.apply_action(9), Err(MoveError::PoleFull { action: 9 }));
        assert_eq!(state.apply_action(16), Err(MoveError::OutOfRange { action: 16 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let mut state = play(&[0, 4, 0, 4, 0, 4, 0]);
        assert!(state.is_terminal());
        let before = state;

        assert_eq!(state.apply_action(1), Err(MoveError::GameOver));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_sets_returns() {
        let state = play(&[0, 4, 0, 4, 0, 4, 0]);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::O)));
        assert_eq!(state.returns(), [1.0, -1.0]);
    }

    #[test]
    fn test_second_player_win() {
        // Player 1 builds pole 4 while player 0 scatters.
        let state = play(&[0, 4, 1, 4, 2, 4, 8, 4]);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::X)));
        assert_eq!(state.returns(), [-1.0, 1.0]);
        assert_eq!(state.mover(), Player::X);
    }

    #[test]
    fn test_returns_zero_mid_game() {
        let state = play(&[0, 1, 2]);
        assert_eq!(state.returns(), [0.0, 0.0]);
    }

    #[test]
    fn test_action_to_string() {
        let state = play(&[7, 7]);
        assert_eq!(state.action_to_string(Player::O, 7).unwrap(), "7(2,1,3)");
        assert_eq!(state.action_to_string(Player::X, 0).unwrap(), "0(0,0,0)");
        assert_eq!(
            state.action_to_string(Player::O, 16),
            Err(MoveError::OutOfRange { action: 16 })
        );

        let full = play(&[7, 7, 7, 7]);
        assert_eq!(
            full.action_to_string(Player::O, 7),
            Err(MoveError::PoleFull { action: 7 })
        );
    }

    #[test]
    fn test_display_matches_board() {
        let state = play(&[0]);
        assert_eq!(state.to_string(), state.board().to_string());
        assert!(state.to_string().ends_with("o...\n....\n....\n....\n\n"));
    }
}
