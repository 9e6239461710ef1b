use std::path::PathBuf;

/// A caller submitted an action the engine cannot play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("action {action} is out of range (expected 0..16)")]
    OutOfRange { action: usize },

    #[error("pole of action {action} is already full")]
    PoleFull { action: usize },

    #[error("game is already over")]
    GameOver,
}

/// A pole that was reported playable has no empty cell left. The board
/// bookkeeping is corrupted; callers escalate this to a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no empty cell in pole (file {file}, rank {rank})")]
pub struct InvariantViolation {
    pub file: usize,
    pub rank: usize,
}

/// Errors that can occur when constructing an observer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserverError {
    #[error("observation parameters not supported; passed {0:?}")]
    UnsupportedParams(Vec<String>),

    #[error("observation type not supported (public_info: {public_info}, perfect_recall: {perfect_recall})")]
    UnsupportedObservationType {
        public_info: bool,
        perfect_recall: bool,
    },
}

/// A property that must hold for every reachable state was broken.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error("agent selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        action: usize,
        legal: Vec<usize>,
        source: MoveError,
    },

    #[error("gravity invariant broken after move {move_number}")]
    Gravity { move_number: usize },

    #[error("move {move_number} did not add exactly one piece")]
    PieceCount { move_number: usize },

    #[error("legal actions not strictly ascending: {0:?}")]
    UnorderedActions(Vec<usize>),

    #[error("turn did not alternate after move {move_number}")]
    TurnOrder { move_number: usize },

    #[error("observation is not one-hot at (row {row}, file {file}, rank {rank})")]
    NotOneHot { row: usize, file: usize, rank: usize },

    #[error("returns {returns:?} are not zero-sum in {{-1, 0, 1}}")]
    Returns { returns: [f64; 2] },

    #[error("game ended after {moves} moves but outcome {outcome} does not match the board")]
    Outcome { moves: usize, outcome: String },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
