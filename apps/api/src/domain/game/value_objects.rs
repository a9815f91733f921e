use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Highest score either team may hold
pub const MAX_SCORE: u32 = 100;

/// Unique identifier of a game
///
/// # Invariants
/// - Wraps a v4 UUID assigned at creation
/// - Renders as the 36-character hyphenated form
/// - Only the exact lowercase hyphenated form parses back
///
/// # Example
/// ```
/// use scoreboard_api::domain::game::value_objects::GameId;
///
/// let id = GameId::new();
/// assert_eq!(id.to_string().len(), 36);
/// assert_eq!(id.to_string().parse::<GameId>(), Ok(id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Length of the textual form
    pub const LEN: usize = 36;

    /// Generates a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for GameId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::LEN {
            return Err(format!("Invalid game id: {}", s));
        }

        let id = Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| format!("Invalid game id: {}", s))?;

        // Uuid parsing ignores case; only the issued text names a game
        if id.to_string() != s {
            return Err(format!("Invalid game id: {}", s));
        }

        Ok(id)
    }
}

/// One side of a game
///
/// The title is compared verbatim; no trimming or case folding happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    title: String,
    score: u32,
}

impl Team {
    /// Creates a team with a score of zero
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            score: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
