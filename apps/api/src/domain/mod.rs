// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod clock;
pub mod game;
pub mod repositories;
pub mod scoreboard;

pub use scoreboard::Scoreboard;
