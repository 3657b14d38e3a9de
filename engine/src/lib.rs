mod board;
mod error;
mod game_state;
pub mod logger;
mod moves;
mod settings;
mod types;

pub use board::Board;
pub use error::GameError;
pub use game_state::TicTacToeGame;
pub use moves::Move;
pub use settings::{BoardSettings, MAX_DIMENSION, MIN_DIMENSION};
pub use types::{GameStatus, Mark};
