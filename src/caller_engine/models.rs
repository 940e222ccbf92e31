use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::caller_engine::error::BingoError;

/// Highest ball number; the pool always starts with 1..=MAX_NUMBER.
pub const MAX_NUMBER: u8 = 75;

/// Total balls in a game.
pub const POOL_SIZE: usize = MAX_NUMBER as usize;

/// Numbers per column band.
pub const NUMBERS_PER_LETTER: u8 = 15;

// ---------------------------------------------------------------------------
// Column letters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    B,
    I,
    N,
    G,
    O,
}

impl Letter {
    /// All five columns in board order.
    pub const ALL: [Letter; 5] = [Letter::B, Letter::I, Letter::N, Letter::G, Letter::O];

    /// The band of numbers belonging to this column.
    pub fn range(self) -> RangeInclusive<u8> {
        let min = self.index() * NUMBERS_PER_LETTER + 1;
        min..=min + NUMBERS_PER_LETTER - 1
    }

    /// Checked letter lookup; `None` outside 1..=75.
    pub fn for_number(n: u8) -> Option<Letter> {
        match n {
            1..=15  => Some(Letter::B),
            16..=30 => Some(Letter::I),
            31..=45 => Some(Letter::N),
            46..=60 => Some(Letter::G),
            61..=75 => Some(Letter::O),
            _ => None,
        }
    }

    fn index(self) -> u8 {
        match self {
            Letter::B => 0,
            Letter::I => 1,
            Letter::N => 2,
            Letter::G => 3,
            Letter::O => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::B => "B",
            Letter::I => "I",
            Letter::N => "N",
            Letter::G => "G",
            Letter::O => "O",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(Letter::B),
            "I" => Ok(Letter::I),
            "N" => Ok(Letter::N),
            "G" => Ok(Letter::G),
            "O" => Ok(Letter::O),
            _ => Err(BingoError::UnknownLetter(s.to_string())),
        }
    }
}

/// Column letter for a ball number.
///
/// Only defined for 1..=75. The pool never yields anything else, so this is
/// an assertion in debug builds; release builds clamp to the nearest band.
pub fn letter_of(n: u8) -> Letter {
    debug_assert!((1..=MAX_NUMBER).contains(&n), "ball number {n} out of range");
    match n {
        0..=15  => Letter::B,
        16..=30 => Letter::I,
        31..=45 => Letter::N,
        46..=60 => Letter::G,
        _       => Letter::O,
    }
}

/// Checked form of [`letter_of`] for numbers coming from outside the engine.
pub fn checked_letter_of(n: u8) -> Result<Letter, BingoError> {
    Letter::for_number(n).ok_or(BingoError::NumberOutOfRange(n))
}

// ---------------------------------------------------------------------------
// Engine outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Numbers remain in the pool.
    Ready,
    /// Every number has been called.
    Finished,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Ready    => write!(f, "Ready"),
            EngineState::Finished => write!(f, "Finished"),
        }
    }
}

/// Outcome of one successful call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallResult {
    pub number: u8,
    pub letter: Letter,
    pub called_count: usize,
    pub total_remaining: usize,
    /// True exactly when this call emptied the pool.
    pub is_last_call: bool,
}

impl fmt::Display for CallResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.letter, self.number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub called_count: usize,
    /// Whole percent of the 75 balls called.
    pub percent: u8,
}

impl Progress {
    pub fn from_called(called_count: usize) -> Self {
        let percent = (called_count as f64 / POOL_SIZE as f64 * 100.0).round() as u8;
        Progress { called_count, percent }
    }
}

/// One chip on the history strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub letter: Letter,
    pub number: u8,
}

impl HistoryEntry {
    /// For numbers that came out of the pool.
    pub(crate) fn new(number: u8) -> Self {
        HistoryEntry { letter: letter_of(number), number }
    }

    /// Checked constructor for numbers from outside the engine.
    pub fn try_new(number: u8) -> Result<Self, BingoError> {
        Ok(HistoryEntry { letter: checked_letter_of(number)?, number })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_one_to_seventy_five() {
        let mut all: Vec<u8> = Letter::ALL.iter().flat_map(|l| l.range()).collect();
        all.sort_unstable();
        assert_eq!(all, (1..=MAX_NUMBER).collect::<Vec<_>>());
        assert_eq!(Letter::N.range(), 31..=45);
    }

    #[test]
    fn letter_of_agrees_with_ranges() {
        for letter in Letter::ALL {
            for n in letter.range() {
                assert_eq!(letter_of(n), letter, "{n}");
                assert_eq!(Letter::for_number(n), Some(letter));
            }
        }
    }

    #[test]
    fn checked_lookup_rejects_out_of_range() {
        assert_eq!(Letter::for_number(0), None);
        assert_eq!(Letter::for_number(76), None);
        assert!(matches!(checked_letter_of(99), Err(BingoError::NumberOutOfRange(99))));
    }

    #[test]
    fn letter_parses_case_insensitively() {
        assert_eq!("g".parse::<Letter>().unwrap(), Letter::G);
        assert_eq!(" O ".parse::<Letter>().unwrap(), Letter::O);
        assert!(matches!("X".parse::<Letter>(), Err(BingoError::UnknownLetter(_))));
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        assert_eq!(Progress::from_called(0).percent, 0);
        assert_eq!(Progress::from_called(1).percent, 1);
        assert_eq!(Progress::from_called(2).percent, 3);
        assert_eq!(Progress::from_called(38).percent, 51);
        assert_eq!(Progress::from_called(75).percent, 100);
    }

    #[test]
    fn history_entry_rejects_numbers_off_the_board() {
        assert!(matches!(HistoryEntry::try_new(0), Err(BingoError::NumberOutOfRange(0))));
        assert!(matches!(HistoryEntry::try_new(76), Err(BingoError::NumberOutOfRange(76))));
        let entry = HistoryEntry::try_new(75).unwrap();
        assert_eq!(entry, HistoryEntry { letter: Letter::O, number: 75 });
    }

    #[test]
    fn call_result_displays_as_letter_dash_number() {
        let r = CallResult {
            number: 42,
            letter: Letter::N,
            called_count: 1,
            total_remaining: 74,
            is_last_call: false,
        };
        assert_eq!(r.to_string(), "N-42");
    }
}
