use super::errors::UpdateScoreError;
use super::value_objects::{GameId, Team, MAX_SCORE};
use chrono::{DateTime, Utc};

/// Game aggregate root
///
/// One contest between two teams, each owned by the game.
///
/// # Invariants
/// - `id` and `created_at` never change after construction
/// - Neither score ever decreases
/// - Both scores stay within `0..=MAX_SCORE`
///
/// # Example
/// ```
/// use chrono::Utc;
/// use scoreboard_api::domain::game::Game;
///
/// let mut game = Game::new("asd", "qwe", Utc::now());
/// game.update_score(3, 1).expect("valid score");
///
/// assert_eq!(game.total_score(), 4);
/// assert!(game.update_score(2, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    created_at: DateTime<Utc>,
    team_a: Team,
    team_b: Team,
}

impl Game {
    /// Creates a new game with both scores at zero
    ///
    /// Title uniqueness across games is checked by the scoreboard, not here.
    pub fn new(
        title_a: impl Into<String>,
        title_b: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: GameId::new(),
            created_at,
            team_a: Team::new(title_a),
            team_b: Team::new(title_b),
        }
    }

    /// Sets both scores
    ///
    /// # Rules, in order
    /// - Either score above `MAX_SCORE` fails with `ScoreIsTooHigh`
    /// - A lower score for team A fails with `ScoreTeamALess`
    /// - A lower score for team B fails with `ScoreTeamBLess`
    ///
    /// Nothing changes on failure. Repeating the current scores succeeds.
    pub fn update_score(&mut self, score_a: u32, score_b: u32) -> Result<(), UpdateScoreError> {
        Self::check_range(score_a, score_b)?;

        if score_a < self.team_a.score() {
            return Err(UpdateScoreError::ScoreTeamALess);
        }

        if score_b < self.team_b.score() {
            return Err(UpdateScoreError::ScoreTeamBLess);
        }

        self.team_a.set_score(score_a);
        self.team_b.set_score(score_b);

        Ok(())
    }

    /// Fails with `ScoreIsTooHigh` when either score is above `MAX_SCORE`
    pub(crate) fn check_range(score_a: u32, score_b: u32) -> Result<(), UpdateScoreError> {
        if score_a > MAX_SCORE || score_b > MAX_SCORE {
            return Err(UpdateScoreError::ScoreIsTooHigh);
        }
        Ok(())
    }

    /// True if either team carries this title
    pub fn has_team(&self, title: &str) -> bool {
        self.team_a.title() == title || self.team_b.title() == title
    }

    /// Sum of both scores, the primary ranking key
    pub fn total_score(&self) -> u32 {
        self.team_a.score() + self.team_b.score()
    }

    // ===== Getters =====

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn team_a(&self) -> &Team {
        &self.team_a
    }

    pub fn team_b(&self) -> &Team {
        &self.team_b
    }
}
