use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::moves::Move;
use crate::types::{GameStatus, Mark};

/// A rectangular tic-tac-toe board. Cells are stored in a flat row-major
/// buffer of `width * height` marks; dimensions are fixed at construction.
///
/// Every mutation validates before writing, so a failed call leaves the
/// grid exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cells: Vec<Mark>,
    width: usize,
    height: usize,
}

/// Wire shape of a board. Deserialization goes through `TryFrom` so a
/// decoded board upholds the same invariants `Board::new` enforces.
#[derive(Deserialize)]
struct BoardRepr {
    cells: Vec<Mark>,
    width: usize,
    height: usize,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let board = Board::new(repr.width, repr.height)?;
        if repr.cells.len() != repr.width * repr.height {
            return Err(GameError::InvalidArgument(format!(
                "cell buffer must hold {} marks, got {}",
                repr.width * repr.height,
                repr.cells.len()
            )));
        }
        Ok(Self {
            cells: repr.cells,
            ..board
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: vec![Mark::Empty; 9],
            width: 3,
            height: 3,
        }
    }
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 {
            return Err(GameError::InvalidArgument(
                "width must be greater than zero".to_string(),
            ));
        }
        if height == 0 {
            return Err(GameError::InvalidArgument(
                "height must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            cells: vec![Mark::Empty; width * height],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GameError> {
        if x >= self.width {
            return Err(GameError::OutOfRange(format!(
                "x must be between 0 and {}",
                self.width - 1
            )));
        }
        if y >= self.height {
            return Err(GameError::OutOfRange(format!(
                "y must be between 0 and {}",
                self.height - 1
            )));
        }
        Ok(())
    }

    pub fn tile(&self, x: usize, y: usize) -> Result<Mark, GameError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Raw cell write. Bounds are checked, turn order and emptiness are not;
    /// callers that need the game rules go through `apply_move`.
    pub fn set_tile(&mut self, x: usize, y: usize, value: Mark) -> Result<(), GameError> {
        self.check_bounds(x, y)?;
        let index = self.index(x, y);
        self.cells[index] = value;
        Ok(())
    }

    /// The player whose move is next, derived from cell counts: X moves
    /// first, so X is to move exactly when the counts are equal.
    pub fn current_turn(&self) -> Mark {
        let x_count = self.cells.iter().filter(|&&cell| cell == Mark::X).count();
        let o_count = self.cells.iter().filter(|&&cell| cell == Mark::O).count();
        if x_count == o_count { Mark::X } else { Mark::O }
    }

    /// Validates and applies a move: the target cell must be in bounds and
    /// empty, and the mover must be the current turn. The occupied check
    /// runs before the turn check.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), GameError> {
        let target = self.tile(mv.x(), mv.y())?;
        if target != Mark::Empty {
            return Err(GameError::IllegalMove(
                "cell is already marked".to_string(),
            ));
        }
        if mv.player() != self.current_turn() {
            return Err(GameError::IllegalMove("not your turn".to_string()));
        }

        self.set_tile(mv.x(), mv.y(), mv.player())
    }

    /// Non-mutating variant of `apply_move`: returns a fresh board with the
    /// move applied, leaving the receiver untouched. The clone owns its own
    /// cell buffer, so neither board can observe writes to the other.
    pub fn apply_move_cloning(&self, mv: &Move) -> Result<Board, GameError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    pub fn moves_available(&self) -> bool {
        self.cells.iter().any(|&cell| cell == Mark::Empty)
    }

    /// All legal moves for the side to move, one per empty cell, in
    /// row-major scan order (y outer, x inner).
    pub fn available_moves(&self) -> Vec<Move> {
        let player = self.current_turn();
        let mut moves = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[self.index(x, y)] == Mark::Empty {
                    moves.push(Move::new_unchecked(x, y, player));
                }
            }
        }
        moves
    }

    /// Line-sum win detection. A fully owned line of length `len` sums to
    /// `value * len` because marks are signed (-1 for X, 1 for O). Rows are
    /// checked first, then columns, then the main diagonal.
    ///
    /// Only the top-left to bottom-right diagonal is evaluated; a full
    /// anti-diagonal never counts as a win.
    pub fn check_winner(&self) -> Option<Mark> {
        for y in 0..self.height {
            let sum: i32 = (0..self.width)
                .map(|x| i32::from(self.cells[self.index(x, y)].value()))
                .sum();
            if let Some(mark) = line_owner(sum, self.width) {
                return Some(mark);
            }
        }

        for x in 0..self.width {
            let sum: i32 = (0..self.height)
                .map(|y| i32::from(self.cells[self.index(x, y)].value()))
                .sum();
            if let Some(mark) = line_owner(sum, self.height) {
                return Some(mark);
            }
        }

        let diagonal_len = self.width.min(self.height);
        let sum: i32 = (0..diagonal_len)
            .map(|i| i32::from(self.cells[self.index(i, i)].value()))
            .sum();
        line_owner(sum, diagonal_len)
    }

    /// Terminal status derived on demand; the board keeps no flag.
    pub fn status(&self) -> GameStatus {
        match self.check_winner() {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            Some(Mark::Empty) => unreachable!(),
            None => {
                if self.moves_available() {
                    GameStatus::InProgress
                } else {
                    GameStatus::Draw
                }
            }
        }
    }
}

fn line_owner(sum: i32, len: usize) -> Option<Mark> {
    let len = len as i32;
    if sum == i32::from(Mark::X.value()) * len {
        Some(Mark::X)
    } else if sum == i32::from(Mark::O.value()) * len {
        Some(Mark::O)
    } else {
        None
    }
}
