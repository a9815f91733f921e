// Repository traits (ports)
// Implementations live in the infrastructure layer

pub mod game_repository;

pub use game_repository::GameRepository;
