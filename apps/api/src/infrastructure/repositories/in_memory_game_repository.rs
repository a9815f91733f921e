use crate::domain::game::{Game, GameId};
use crate::domain::repositories::GameRepository;

/// In-memory implementation of GameRepository
///
/// Keeps games in insertion order and answers every lookup with a linear
/// scan.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: Vec<Game>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn insert(&mut self, game: Game) {
        self.games.push(game);
    }

    fn find_by_id(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id() == id)
    }

    fn find_by_id_mut(&mut self, id: GameId) -> Option<&mut Game> {
        self.games.iter_mut().find(|game| game.id() == id)
    }

    fn has_team(&self, title: &str) -> bool {
        self.games.iter().any(|game| game.has_team(title))
    }

    fn delete(&mut self, id: GameId) -> Option<Game> {
        let index = self.games.iter().position(|game| game.id() == id)?;
        Some(self.games.remove(index))
    }

    fn all(&self) -> Vec<Game> {
        self.games.clone()
    }

    fn clear(&mut self) {
        self.games.clear();
    }

    fn len(&self) -> usize {
        self.games.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn game(a: &str, b: &str) -> Game {
        Game::new(a, b, Utc::now())
    }

    #[test]
    fn insert_and_find() {
        let mut repo = InMemoryGameRepository::new();
        let game = game("asd", "qwe");
        let id = game.id();
        repo.insert(game);

        assert_eq!(repo.find_by_id(id).map(Game::id), Some(id));
        assert!(repo.find_by_id(GameId::new()).is_none());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn has_team_checks_every_game() {
        let mut repo = InMemoryGameRepository::new();
        repo.insert(game("asd", "qwe"));
        repo.insert(game("zxc", "vbn"));

        assert!(repo.has_team("asd"));
        assert!(repo.has_team("vbn"));
        assert!(!repo.has_team("rty"));
    }

    #[test]
    fn find_by_id_mut_edits_in_place() {
        let mut repo = InMemoryGameRepository::new();
        let game = game("asd", "qwe");
        let id = game.id();
        repo.insert(game);

        repo.find_by_id_mut(id).unwrap().update_score(2, 3).unwrap();

        assert_eq!(repo.find_by_id(id).unwrap().total_score(), 5);
    }

    #[test]
    fn delete_keeps_order_of_the_rest() {
        let mut repo = InMemoryGameRepository::new();
        let first = game("a", "b");
        let second = game("c", "d");
        let third = game("e", "f");
        let ids = [first.id(), second.id(), third.id()];
        repo.insert(first);
        repo.insert(second);
        repo.insert(third);

        assert_eq!(repo.delete(ids[1]).map(|g| g.id()), Some(ids[1]));
        assert!(repo.delete(ids[1]).is_none());

        let remaining: Vec<GameId> = repo.all().iter().map(Game::id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }

    #[test]
    fn clear_empties() {
        let mut repo = InMemoryGameRepository::new();
        repo.insert(game("asd", "qwe"));
        repo.clear();

        assert!(repo.is_empty());
        assert!(repo.all().is_empty());
    }
}
