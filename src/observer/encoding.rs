use burn::prelude::*;
use burn::tensor::TensorData;

use super::{encode_board, OBSERVATION_SHAPE, OBSERVATION_SIZE};
use crate::game::GameState;

/// Encode a game state as a tensor of shape [3, 4, 4, 4].
pub fn encode_state<B: Backend>(state: &GameState, device: &B::Device) -> Tensor<B, 4> {
    let data = encode_board(state.board());
    Tensor::<B, 4>::from_data(TensorData::new(data.to_vec(), OBSERVATION_SHAPE), device)
}

/// Encode multiple game states as a batched tensor of shape [batch, 3, 4, 4, 4].
pub fn encode_states_batch<B: Backend>(states: &[GameState], device: &B::Device) -> Tensor<B, 5> {
    let mut flat = Vec::with_capacity(states.len() * OBSERVATION_SIZE);
    for state in states {
        flat.extend_from_slice(&encode_board(state.board()));
    }
    let [c, h, f, r] = OBSERVATION_SHAPE;
    Tensor::<B, 5>::from_data(TensorData::new(flat, [states.len(), c, h, f, r]), device)
}
