use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use super::clock::Clock;
use super::game::{AddGameError, Game, GameId, RemoveGameError, UpdateScoreError};
use super::repositories::GameRepository;

/// Owner of the active games and the four operations over them
///
/// # Invariants
/// - A team title appears in at most one active game, in either slot
/// - Scores never decrease and never exceed `MAX_SCORE`
/// - Each `GameId` names exactly one active game
/// - Creation timestamps strictly increase within one scoreboard
///
/// Every failing operation leaves the collection untouched.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use scoreboard_api::domain::clock::SystemClock;
/// use scoreboard_api::domain::Scoreboard;
/// use scoreboard_api::infrastructure::repositories::InMemoryGameRepository;
///
/// let mut board = Scoreboard::new(InMemoryGameRepository::new(), Arc::new(SystemClock));
/// let id = board.create("asd", "qwe").expect("titles are free");
/// board.update_score(&id.to_string(), 1, 2).expect("valid score");
///
/// assert_eq!(board.list()[0].total_score(), 3);
/// ```
pub struct Scoreboard<R: GameRepository> {
    repository: R,
    clock: Arc<dyn Clock>,
    last_created_at: Option<DateTime<Utc>>,
}

impl<R: GameRepository> Scoreboard<R> {
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            last_created_at: None,
        }
    }

    /// Drops every game. Always succeeds.
    pub fn clear(&mut self) -> bool {
        let dropped = self.repository.len();
        self.repository.clear();
        info!(dropped, "Scoreboard cleared");
        true
    }

    /// Starts a game between two teams, both at zero
    ///
    /// Team A's title is checked before team B's, so when both collide the
    /// team A error is reported. Identical titles are refused as a team B
    /// collision.
    pub fn create(&mut self, title_a: &str, title_b: &str) -> Result<GameId, AddGameError> {
        if self.repository.has_team(title_a) {
            info!(title = title_a, "Team A already playing");
            return Err(AddGameError::TeamAAlreadyExists);
        }

        if title_a == title_b || self.repository.has_team(title_b) {
            info!(title = title_b, "Team B already playing");
            return Err(AddGameError::TeamBAlreadyExists);
        }

        let created_at = self.next_created_at();
        let game = Game::new(title_a, title_b, created_at);
        let id = game.id();
        self.repository.insert(game);

        debug!(game_id = %id, team_a = title_a, team_b = title_b, "Game added");
        Ok(id)
    }

    /// Records new scores for a game
    ///
    /// # Checks, first failure wins
    /// 1. Either score above `MAX_SCORE`: `ScoreIsTooHigh`
    /// 2. Unknown id: `GameIdNotExists`
    /// 3. Team A score lowered: `ScoreTeamALess`
    /// 4. Team B score lowered: `ScoreTeamBLess`
    ///
    /// The range check runs before the lookup, so an out-of-range score on
    /// an unknown id reports `ScoreIsTooHigh`.
    pub fn update_score(
        &mut self,
        id: &str,
        score_a: u32,
        score_b: u32,
    ) -> Result<(), UpdateScoreError> {
        if let Err(e) = Game::check_range(score_a, score_b) {
            info!(game_id = id, score_a, score_b, "Score rejected: too high");
            return Err(e);
        }

        let Some(game) = id
            .parse::<GameId>()
            .ok()
            .and_then(|game_id| self.repository.find_by_id_mut(game_id))
        else {
            info!(game_id = id, "Score rejected: unknown game");
            return Err(UpdateScoreError::GameIdNotExists);
        };

        game.update_score(score_a, score_b).map_err(|e| {
            info!(game_id = id, score_a, score_b, error = %e, "Score rejected");
            e
        })?;

        debug!(game_id = id, score_a, score_b, "Score updated");
        Ok(())
    }

    /// Deletes a game
    pub fn remove(&mut self, id: &str) -> Result<(), RemoveGameError> {
        let removed = id
            .parse::<GameId>()
            .ok()
            .and_then(|id| self.repository.delete(id));

        match removed {
            Some(game) => {
                debug!(game_id = %game.id(), "Game removed");
                Ok(())
            }
            None => {
                info!(game_id = id, "Remove rejected: unknown game");
                Err(RemoveGameError::GameIdNotExists)
            }
        }
    }

    /// Copy of one game, if it is active
    pub fn get(&self, id: &str) -> Option<Game> {
        let id = id.parse::<GameId>().ok()?;
        self.repository.find_by_id(id).cloned()
    }

    /// Every active game, highest total score first
    ///
    /// Equal totals put the most recently created game first. The stored
    /// order is left alone; callers get a fresh copy.
    pub fn list(&self) -> Vec<Game> {
        let mut games = self.repository.all();
        games.sort_by(|first, second| {
            second
                .total_score()
                .cmp(&first.total_score())
                .then_with(|| second.created_at().cmp(&first.created_at()))
        });
        games
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = self.clock.now();
        let created_at = match self.last_created_at {
            Some(last) if now <= last => last + Duration::nanoseconds(1),
            _ => now,
        };
        self.last_created_at = Some(created_at);
        created_at
    }
}
