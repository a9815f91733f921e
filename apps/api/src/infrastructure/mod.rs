// Infrastructure layer module
// Contains storage adapters and the shared scoreboard handle
// Follows Hexagonal Architecture

pub mod repositories;
pub mod shared_scoreboard;

pub use shared_scoreboard::SharedScoreboard;
