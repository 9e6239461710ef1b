//! Properties every reachable state must satisfy, checked after each move of
//! a playout.

use crate::error::CheckError;
use crate::game::lines::winning_directions;
use crate::game::{Board, Cell, GameOutcome, GameState, Turn};
use crate::observer::{encode_board, index, NUM_CHANNELS};

/// Checks that depend on a single state.
pub fn check_state(state: &GameState) -> Result<(), CheckError> {
    if !state.board().satisfies_gravity() {
        return Err(CheckError::Gravity {
            move_number: state.move_count(),
        });
    }

    let legal = state.legal_actions();
    if legal.windows(2).any(|w| w[0] >= w[1]) {
        return Err(CheckError::UnorderedActions(legal));
    }

    let data = encode_board(state.board());
    for coord in Board::coords() {
        let hot: f32 = (0..NUM_CHANNELS).map(|c| data[index(c, coord)]).sum();
        if hot != 1.0 {
            return Err(CheckError::NotOneHot {
                row: coord.row,
                file: coord.file,
                rank: coord.rank,
            });
        }
    }

    let returns = state.returns();
    if returns[0] != -returns[1] || ![-1.0, 0.0, 1.0].contains(&returns[0]) {
        return Err(CheckError::Returns { returns });
    }

    check_outcome(state)
}

/// Checks on the step from `before` to `after`: exactly one piece was added
/// and the turn passed to the other player unless the game just ended.
pub fn check_transition(before: &GameState, after: &GameState) -> Result<(), CheckError> {
    let move_number = after.move_count();
    if move_number != before.move_count() + 1
        || after.board().occupied() != before.board().occupied() + 1
    {
        return Err(CheckError::PieceCount { move_number });
    }

    let alternated = match (before.current_player(), after.current_player()) {
        (Turn::Player(prev), Turn::Player(next)) => next == prev.other(),
        (Turn::Player(prev), Turn::Terminal) => after.mover() == prev,
        (Turn::Terminal, _) => false,
    };
    if !alternated {
        return Err(CheckError::TurnOrder { move_number });
    }
    Ok(())
}

/// A win must be backed by a full line through the last move; a draw needs a
/// full board with no line anywhere.
fn check_outcome(state: &GameState) -> Result<(), CheckError> {
    let Some(outcome) = state.outcome() else {
        if state.returns() != [0.0, 0.0] || state.board().is_full() {
            return Err(outcome_error(state, "none"));
        }
        return Ok(());
    };

    let consistent = match outcome {
        GameOutcome::Winner(player) => {
            state.returns()[player.index()] == 1.0
                && state.mover() == player
                && state.last_move().is_some_and(|at| {
                    !winning_directions(state.board(), at, player.to_cell()).is_empty()
                })
        }
        GameOutcome::Draw => {
            state.returns() == [0.0, 0.0]
                && state.board().is_full()
                && Board::coords().all(|at| {
                    [Cell::O, Cell::X]
                        .into_iter()
                        .all(|mark| winning_directions(state.board(), at, mark).is_empty())
                })
        }
    };
    if consistent {
        Ok(())
    } else {
        Err(outcome_error(state, &format!("{outcome:?}")))
    }
}

fn outcome_error(state: &GameState, outcome: &str) -> CheckError {
    CheckError::Outcome {
        moves: state.move_count(),
        outcome: outcome.to_string(),
    }
}
