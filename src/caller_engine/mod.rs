//! Core caller engine: ball pool, call state machine, and its side channels.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: letters, call results, progress, history entries |
//! | `pool`      | 75-ball pool with Fisher-Yates shuffle, drawn from the end |
//! | `engine`    | `CallerEngine` — call / reset / progress state machine |
//! | `announcer` | Optional announcement port injected into the engine |
//! | `board`     | 5 x 15 master board snapshot with called/current marks |
//! | `config`    | JSON-loadable session settings |
//! | `error`     | Call rejection and crate error types |

pub mod announcer;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod pool;

pub use announcer::{spoken_phrase, Announcement, Announcer, LogAnnouncer, WriterAnnouncer};
pub use board::{Board, BoardCell, BoardRow};
pub use config::CallerConfig;
pub use engine::CallerEngine;
pub use error::{BingoError, CallRejected, Result};
pub use models::{
    checked_letter_of, letter_of, CallResult, EngineState, HistoryEntry, Letter, Progress,
    MAX_NUMBER, NUMBERS_PER_LETTER, POOL_SIZE,
};
pub use pool::{generate_pool, Pool};
