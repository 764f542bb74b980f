use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tic-tac-toe marker. `O` renders as the digit zero, matching the
/// classic exercise alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "0"),
        }
    }
}

/// A board is rows of cells; an empty cell is `None`. Rows may be ragged.
pub type Board = Vec<Vec<Option<Player>>>;

// The owner of a line, if every cell is filled by the same player.
fn line_owner(mut cells: impl Iterator<Item = Option<Player>>) -> Option<Player> {
    cells.all_equal_value().ok().flatten()
}

/// Winner of the position, if any row, column, or diagonal is uniformly
/// owned.
///
/// The side length is the larger of the row count and the longest row,
/// so ragged boards are tolerated: a missing cell breaks every line
/// through it. An empty board has no winner.
pub fn evaluate(board: &[Vec<Option<Player>>]) -> Option<Player> {
    let size = board.len().max(board.iter().map(Vec::len).max().unwrap_or(0));
    if size == 0 {
        return None;
    }

    let cell = |r: usize, c: usize| board.get(r).and_then(|row| row.get(c)).copied().flatten();

    let rows = (0..size).find_map(|r| line_owner((0..size).map(|c| cell(r, c))));
    let columns = (0..size).find_map(|c| line_owner((0..size).map(|r| cell(r, c))));
    let main_diagonal = line_owner((0..size).map(|i| cell(i, i)));
    let minor_diagonal = line_owner((0..size).map(|i| cell(size - 1 - i, i)));

    rows.or(columns).or(main_diagonal).or(minor_diagonal)
}
