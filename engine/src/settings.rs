use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const MIN_DIMENSION: usize = 1;
pub const MAX_DIMENSION: usize = 20;

/// Board dimensions as loaded from configuration. Defaults to the classic
/// 3x3 game; `validate` applies the same bounds the lobby settings use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
        }
    }
}

impl BoardSettings {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width < MIN_DIMENSION || self.width > MAX_DIMENSION {
            return Err(GameError::InvalidArgument(format!(
                "width must be between {} and {}",
                MIN_DIMENSION, MAX_DIMENSION
            )));
        }
        if self.height < MIN_DIMENSION || self.height > MAX_DIMENSION {
            return Err(GameError::InvalidArgument(format!(
                "height must be between {} and {}",
                MIN_DIMENSION, MAX_DIMENSION
            )));
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, GameError> {
        let settings: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| GameError::InvalidArgument(format!("invalid settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String, GameError> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| GameError::InvalidArgument(format!("serialization failed: {}", e)))
    }
}
