//! Scoreboard API Library
//!
//! In-memory scoreboard for two-team games: creation with team title
//! uniqueness, monotonic score updates, removal and ranked listing, plus
//! the HTTP adapter that exposes them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
