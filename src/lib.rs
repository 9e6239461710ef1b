//! # Connect Four 3D
//!
//! Rules engine for four-in-a-row on a 4×4×4 cube of vertical poles. Pieces
//! fall to the lowest empty cell of the chosen pole; four identical marks on
//! any of the cube's 76 straight lines win.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, winning-line detection, state machine and game metadata
//! - [`observer`] — One-hot tensor observations and text rendering
//! - [`playout`] — Random self-play with consistency checks after every move
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod observer;
pub mod playout;
