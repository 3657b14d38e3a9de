use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::types::Mark;

/// A validated "player plays at (x, y)" value. Coordinates are unsigned, so
/// negative positions are unrepresentable; bounds against a concrete board
/// are checked by the board itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoveRepr")]
pub struct Move {
    x: usize,
    y: usize,
    player: Mark,
}

/// Wire shape of a move. Deserialization funnels through `Move::new` so a
/// decoded move carries a valid player.
#[derive(Deserialize)]
struct MoveRepr {
    x: usize,
    y: usize,
    player: Mark,
}

impl TryFrom<MoveRepr> for Move {
    type Error = GameError;

    fn try_from(repr: MoveRepr) -> Result<Self, Self::Error> {
        Move::new(repr.x, repr.y, repr.player)
    }
}

impl Move {
    pub fn new(x: usize, y: usize, player: Mark) -> Result<Self, GameError> {
        if player == Mark::Empty {
            return Err(GameError::InvalidArgument(
                "player must be X or O".to_string(),
            ));
        }
        Ok(Self { x, y, player })
    }

    // Callers must guarantee player is X or O.
    pub(crate) fn new_unchecked(x: usize, y: usize, player: Mark) -> Self {
        debug_assert_ne!(player, Mark::Empty);
        Self { x, y, player }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn player(&self) -> Mark {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_returns_inputs() {
        let mv = Move::new(1, 2, Mark::X).unwrap();

        assert_eq!(mv.x(), 1);
        assert_eq!(mv.y(), 2);
        assert_eq!(mv.player(), Mark::X);
    }

    #[test]
    fn test_move_rejects_empty_player() {
        let result = Move::new(0, 0, Mark::Empty);

        assert!(matches!(result, Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_deserialize_rejects_empty_player() {
        let result: Result<Move, _> =
            serde_yaml_ng::from_str("x: 0\ny: 0\nplayer: Empty\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_move_serde_round_trip() {
        let mv = Move::new(2, 1, Mark::O).unwrap();

        let yaml = serde_yaml_ng::to_string(&mv).unwrap();
        let restored: Move = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(restored, mv);
    }

    #[test]
    fn test_move_accepts_coordinates_beyond_any_board() {
        // Bounds are a board concern, not a move concern.
        let mv = Move::new(100, 100, Mark::O).unwrap();
        assert_eq!(mv.x(), 100);
        assert_eq!(mv.y(), 100);
    }
}
