// src/config/game.rs
//! ページから渡される JSON で1試合分の設定を作るよ。

use serde::{Serialize, Deserialize};

use crate::config::layout::{
    DEFAULT_HEIGHT, DEFAULT_PLAYER1_COLOR, DEFAULT_PLAYER2_COLOR, DEFAULT_WIDTH, MAX_DIMENSION,
};
use crate::error::GameError;

/// 1試合分の設定。
///
/// JSON で省略されたフィールドはデフォルト値 (7 列 x 6 行, red vs blue) になるよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub player1_color: String,
    pub player2_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            player1_color: DEFAULT_PLAYER1_COLOR.to_string(),
            player2_color: DEFAULT_PLAYER2_COLOR.to_string(),
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読み込んで、中身もチェックする。
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| GameError::InvalidConfig(format!("failed to parse JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 設定値のチェック。
    pub fn validate(&self) -> Result<(), GameError> {
        let in_range = |side: usize| (1..=MAX_DIMENSION).contains(&side);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.player1_color.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "player1_color must not be empty".into(),
            ));
        }
        if self.player2_color.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "player2_color must not be empty".into(),
            ));
        }
        Ok(())
    }
}
