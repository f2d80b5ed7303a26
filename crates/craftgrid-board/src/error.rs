//! Board error types.

use thiserror::Error;

/// Errors that can occur while setting up or driving the board.
///
/// Drag-and-drop noise (unknown ids, misses) is not an error; see
/// [`DropOutcome`](crate::engine::DropOutcome).
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid planner config: {0}")]
    Config(#[from] craft_core::ConfigError),

    #[error("state store error: {0}")]
    State(#[from] craftgrid_state::StateError),

    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
}

pub type BoardResult<T> = Result<T, BoardError>;
