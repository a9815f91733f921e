use crate::domain::game::{Game, GameId};

/// Repository trait for the Game aggregate
///
/// Storage for the active games. Business rules live in the scoreboard;
/// implementations only store, find and drop games.
pub trait GameRepository: Send {
    /// Append a game
    fn insert(&mut self, game: Game);

    /// Find a game by its ID
    fn find_by_id(&self, id: GameId) -> Option<&Game>;

    /// Find a game by its ID for mutation
    fn find_by_id_mut(&mut self, id: GameId) -> Option<&mut Game>;

    /// True if any active game has a team with this title, in either slot
    fn has_team(&self, title: &str) -> bool;

    /// Delete a game by ID, returning it if it existed
    fn delete(&mut self, id: GameId) -> Option<Game>;

    /// All active games, in insertion order
    fn all(&self) -> Vec<Game>;

    /// Drop every game
    fn clear(&mut self);

    /// Number of active games
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
