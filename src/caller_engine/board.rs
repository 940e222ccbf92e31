//! The 5 x 15 master board: one row per column letter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::caller_engine::models::Letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCell {
    pub number: u8,
    pub called: bool,
    /// The ball currently on the caller display.
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRow {
    pub letter: Letter,
    pub cells: Vec<BoardCell>,
}

/// Snapshot of every cell's marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub rows: Vec<BoardRow>,
}

impl Board {
    /// Build the board from the called list and the current ball.
    pub fn snapshot(called: &[u8], current: Option<u8>) -> Self {
        let rows = Letter::ALL
            .iter()
            .map(|&letter| BoardRow {
                letter,
                cells: letter
                    .range()
                    .map(|number| BoardCell {
                        number,
                        called: called.contains(&number),
                        current: current == Some(number),
                    })
                    .collect(),
            })
            .collect();
        Board { rows }
    }

    pub fn cell(&self, number: u8) -> Option<&BoardCell> {
        self.rows.iter().flat_map(|r| r.cells.iter()).find(|c| c.number == number)
    }

    pub fn marked_count(&self) -> usize {
        self.rows.iter().flat_map(|r| r.cells.iter()).filter(|c| c.called).count()
    }
}

/// Text grid: called numbers in brackets, the current ball in asterisks.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            write!(f, "{} ", row.letter)?;
            for cell in &row.cells {
                match (cell.current, cell.called) {
                    (true, _)      => write!(f, " *{:>2}*", cell.number)?,
                    (false, true)  => write!(f, " [{:>2}]", cell.number)?,
                    (false, false) => write!(f, "  {:>2} ", cell.number)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
