//! # bingo_caller
//!
//! A 75-ball bingo number caller.
//!
//! The engine draws balls from a shuffled pool, tags each with its B/I/N/G/O
//! column, keeps the call history, and tracks which cells on the master board
//! are marked. An announcer can be plugged in to speak (or print) each call.
//!
//! ## How it works
//!
//! 1. Build a [`CallerEngine`] — from OS entropy, a fixed seed, or a
//!    [`CallerConfig`].
//! 2. Call [`CallerEngine::call`] for each ball. It returns a [`CallResult`]
//!    with the number, its letter, progress counts, and `is_last_call`.
//!    Once the pool is empty further calls return [`CallRejected`] and
//!    change nothing.
//! 3. Render from [`CallerEngine::board`], [`CallerEngine::history`], or the
//!    JSON produced by [`display_state`].
//! 4. [`CallerEngine::reset`] starts a new game at any time.
//!
//! ## Quick start
//!
//! ```rust
//! use bingo_caller::{CallerEngine, EngineState, LogAnnouncer};
//!
//! let mut engine = CallerEngine::with_seed(42).with_announcer(Box::new(LogAnnouncer));
//! engine.toggle_announcements();
//!
//! let first = engine.call().unwrap();
//! println!("{first}  ({} left)", first.total_remaining);
//!
//! while let Ok(call) = engine.call() {
//!     if call.is_last_call {
//!         println!("last ball: {call}");
//!     }
//! }
//! assert_eq!(engine.state(), EngineState::Finished);
//! assert!(engine.call().is_err());
//!
//! engine.reset();
//! assert_eq!(engine.pool().len(), 75);
//! ```

pub mod caller_engine;
pub mod display_adapter;

// Convenience re-exports so callers can use `bingo_caller::CallerEngine`
// directly without reaching into `caller_engine::`.
pub use caller_engine::{
    checked_letter_of, generate_pool, letter_of, spoken_phrase, Announcement, Announcer,
    BingoError, Board, BoardCell, BoardRow, CallRejected, CallResult, CallerConfig, CallerEngine,
    EngineState, HistoryEntry, Letter, LogAnnouncer, Pool, Progress, Result, WriterAnnouncer,
    MAX_NUMBER, POOL_SIZE,
};
pub use display_adapter::{display_state, display_state_json};
