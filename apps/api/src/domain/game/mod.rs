// Game domain module
// Contains the game aggregate root, its value objects and result codes

#![allow(clippy::module_inception)]

pub mod errors;
pub mod game;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{result_code, AddGameError, RemoveGameError, ResultCode, UpdateScoreError};
pub use game::Game;
pub use value_objects::{GameId, Team, MAX_SCORE};
