use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::game::{AddGameError, Game, GameId, RemoveGameError, UpdateScoreError};
use crate::domain::Scoreboard;
use crate::infrastructure::repositories::InMemoryGameRepository;

/// Cloneable handle to one scoreboard shared across threads
///
/// Every operation holds a single lock for its whole check-then-write
/// sequence, so no caller observes a collection changed mid-check.
#[derive(Clone)]
pub struct SharedScoreboard {
    inner: Arc<Mutex<Scoreboard<InMemoryGameRepository>>>,
}

impl SharedScoreboard {
    /// Creates an empty scoreboard on the wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Scoreboard::new(
                InMemoryGameRepository::new(),
                clock,
            ))),
        }
    }

    pub fn clear(&self) -> bool {
        self.inner.lock().clear()
    }

    pub fn create(&self, title_a: &str, title_b: &str) -> Result<GameId, AddGameError> {
        self.inner.lock().create(title_a, title_b)
    }

    pub fn update_score(
        &self,
        id: &str,
        score_a: u32,
        score_b: u32,
    ) -> Result<(), UpdateScoreError> {
        self.inner.lock().update_score(id, score_a, score_b)
    }

    pub fn remove(&self, id: &str) -> Result<(), RemoveGameError> {
        self.inner.lock().remove(id)
    }

    pub fn get(&self, id: &str) -> Option<Game> {
        self.inner.lock().get(id)
    }

    pub fn list(&self) -> Vec<Game> {
        self.inner.lock().list()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Default for SharedScoreboard {
    fn default() -> Self {
        Self::new()
    }
}
