use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::caller_engine::{
    announcer::{Announcement, Announcer},
    board::Board,
    config::CallerConfig,
    error::CallRejected,
    models::{letter_of, CallResult, EngineState, HistoryEntry, Progress},
    pool::{generate_pool, Pool},
};

/// Draws balls for one game at a time.
///
/// All state lives here: the remaining pool, the call history, the ball on
/// the caller display, and the optional announcement port. Every operation is
/// synchronous; timing (the pause before "DONE!") is left to the caller, who
/// reacts to [`CallResult::is_last_call`].
#[derive(Debug)]
pub struct CallerEngine<R: Rng = StdRng> {
    rng: R,
    pool: Pool,
    called: Vec<u8>,
    current: Option<u8>,
    announcement: Option<Announcement>,
}

impl CallerEngine<StdRng> {
    /// Engine seeded from OS entropy, without announcements.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic engine: the same seed calls the same sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &CallerConfig) -> Self {
        match config.rng_seed {
            Some(seed) => Self::with_seed(seed),
            None       => Self::new(),
        }
    }
}

impl Default for CallerEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CallerEngine<R> {
    pub fn from_rng(mut rng: R) -> Self {
        let pool = generate_pool(&mut rng);
        CallerEngine {
            rng,
            pool,
            called: Vec::new(),
            current: None,
            announcement: None,
        }
    }

    /// Attach an announcer, initially switched off.
    pub fn with_announcer(self, announcer: Box<dyn Announcer>) -> Self {
        self.with_announcement(Announcement::new(announcer))
    }

    pub fn with_announcement(mut self, announcement: Announcement) -> Self {
        self.announcement = Some(announcement);
        self
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Draw the next ball.
    ///
    /// Rejected without touching any state once the pool is empty.
    pub fn call(&mut self) -> Result<CallResult, CallRejected> {
        let Some(number) = self.pool.draw() else {
            tracing::debug!(called = self.called.len(), "call rejected: pool exhausted");
            return Err(CallRejected::PoolExhausted);
        };

        let letter = letter_of(number);
        self.called.push(number);
        self.current = Some(number);

        let result = CallResult {
            number,
            letter,
            called_count: self.called.len(),
            total_remaining: self.pool.len(),
            is_last_call: self.pool.is_empty(),
        };
        tracing::debug!(%letter, number, called = result.called_count, remaining = result.total_remaining, "ball called");

        if let Some(announcement) = self.announcement.as_mut() {
            announcement.announce(letter, number);
        }

        if result.is_last_call {
            tracing::info!(called = result.called_count, "all numbers called");
        }
        Ok(result)
    }

    /// Start a new game: fresh shuffle, empty history, nothing on display.
    pub fn reset(&mut self) {
        let previous = self.called.len();
        self.pool = generate_pool(&mut self.rng);
        self.called.clear();
        self.current = None;
        tracing::info!(previously_called = previous, "new game");
    }

    /// Move the displayed ball onto the history strip.
    ///
    /// Front ends call this after the last ball has been shown for a while;
    /// afterwards a finished game shows no current number.
    pub fn retire_current(&mut self) -> Option<u8> {
        self.current.take()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn state(&self) -> EngineState {
        if self.pool.is_empty() {
            EngineState::Finished
        } else {
            EngineState::Ready
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::from_called(self.called.len())
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Numbers in call order.
    pub fn called(&self) -> &[u8] {
        &self.called
    }

    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn is_called(&self, number: u8) -> bool {
        self.called.contains(&number)
    }

    /// Every called ball except the one on display, most recent first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.called
            .iter()
            .rev()
            .filter(|&&n| Some(n) != self.current)
            .map(|&n| HistoryEntry::new(n))
            .collect()
    }

    pub fn board(&self) -> Board {
        Board::snapshot(&self.called, self.current)
    }

    // -----------------------------------------------------------------------
    // Announcements
    // -----------------------------------------------------------------------

    pub fn has_announcer(&self) -> bool {
        self.announcement.is_some()
    }

    pub fn announcements_enabled(&self) -> bool {
        self.announcement.as_ref().is_some_and(Announcement::is_enabled)
    }

    /// Flip announcements on or off and return the new setting.
    /// Always `false` when no announcer was attached.
    pub fn toggle_announcements(&mut self) -> bool {
        match self.announcement.as_mut() {
            Some(a) => a.toggle(),
            None    => false,
        }
    }
}
