/// Result alias that carries [`BingoError`].
pub type Result<T> = std::result::Result<T, BingoError>;

/// Why a call did not produce a number.
///
/// This is a defined outcome of [`CallerEngine::call`](super::CallerEngine::call),
/// not a fault: the engine state is untouched when it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CallRejected {
    #[error("no more numbers: all 75 have been called")]
    PoolExhausted,
}

/// Errors surfaced outside the call loop: configuration, parsing, IO.
#[derive(Debug, thiserror::Error)]
pub enum BingoError {
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// Writing the display state out failed; config parsing uses `Config`.
    #[error("could not render output: {0}")]
    Render(#[source] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Bingo numbers live in 1..=75.
    #[error("{0} is not a bingo number (expected 1..=75)")]
    NumberOutOfRange(u8),
    #[error("unknown column letter {0:?} (expected one of B, I, N, G, O)")]
    UnknownLetter(String),
    #[error(transparent)]
    Rejected(#[from] CallRejected),
}
