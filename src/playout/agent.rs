use crate::game::GameState;

/// Anything that picks the next action for the player to move.
pub trait Agent {
    /// Select an action (pole) given the current game state.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
