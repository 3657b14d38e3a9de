use crate::board::Board;
use crate::error::GameError;
use crate::moves::Move;
use crate::settings::BoardSettings;
use crate::types::{GameStatus, Mark};

/// Session-level wrapper over `Board`: tracks a cached status and the last
/// move, and refuses further play once the game is over. The raw board
/// leaves that policy to its caller; this is that caller.
#[derive(Debug)]
pub struct TicTacToeGame {
    board: Board,
    status: GameStatus,
    last_move: Option<(usize, usize)>,
}

impl TicTacToeGame {
    pub fn new(settings: &BoardSettings) -> Result<Self, GameError> {
        settings.validate()?;
        let board = Board::new(settings.width, settings.height)?;

        Ok(Self {
            board,
            status: GameStatus::InProgress,
            last_move: None,
        })
    }

    /// Places a mark for the side to move at (x, y).
    pub fn place(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::IllegalMove("game is already over".to_string()));
        }

        let mark = self.board.current_turn();
        let mv = Move::new(x, y, mark)?;
        self.board.apply_move(&mv)?;

        self.last_move = Some((x, y));
        self.status = self.board.status();
        crate::log!("{:?} placed at ({}, {}), status {:?}", mark, x, y, self.status);

        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
