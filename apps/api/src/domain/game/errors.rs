use thiserror::Error;

/// Numeric result code carried by each scoreboard operation
///
/// Success is always a positive code, every failure a negative one.
pub trait ResultCode {
    /// Code reported when the operation succeeds
    const SUCCESS: i32;

    /// Code reported for this failure
    fn code(&self) -> i32;
}

/// Maps an operation outcome to its numeric result code
///
/// # Example
/// ```
/// use scoreboard_api::domain::game::errors::{result_code, RemoveGameError};
///
/// let removed: Result<(), RemoveGameError> = Ok(());
/// assert_eq!(result_code(&removed), 1);
/// assert_eq!(result_code(&Err::<(), _>(RemoveGameError::GameIdNotExists)), -1);
/// ```
pub fn result_code<T, E: ResultCode>(result: &Result<T, E>) -> i32 {
    match result {
        Ok(_) => E::SUCCESS,
        Err(e) => e.code(),
    }
}

/// Reasons a game cannot be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddGameError {
    #[error("Team A is already playing in another game")]
    TeamAAlreadyExists,

    #[error("Team B is already playing in another game")]
    TeamBAlreadyExists,
}

impl ResultCode for AddGameError {
    const SUCCESS: i32 = 1;

    fn code(&self) -> i32 {
        match self {
            AddGameError::TeamAAlreadyExists => -1,
            AddGameError::TeamBAlreadyExists => -2,
        }
    }
}

/// Reasons a score update is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpdateScoreError {
    #[error("Team A score cannot decrease")]
    ScoreTeamALess,

    #[error("Team B score cannot decrease")]
    ScoreTeamBLess,

    #[error("Game not found")]
    GameIdNotExists,

    #[error("Score is above the maximum of {}", super::MAX_SCORE)]
    ScoreIsTooHigh,
}

impl ResultCode for UpdateScoreError {
    const SUCCESS: i32 = 1;

    fn code(&self) -> i32 {
        match self {
            UpdateScoreError::ScoreTeamALess => -1,
            UpdateScoreError::ScoreTeamBLess => -2,
            UpdateScoreError::GameIdNotExists => -3,
            UpdateScoreError::ScoreIsTooHigh => -4,
        }
    }
}

/// Reasons a game cannot be removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveGameError {
    #[error("Game not found")]
    GameIdNotExists,
}

impl ResultCode for RemoveGameError {
    const SUCCESS: i32 = 1;

    fn code(&self) -> i32 {
        match self {
            RemoveGameError::GameIdNotExists => -1,
        }
    }
}
