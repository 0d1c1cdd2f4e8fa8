// src/error.rs
//! クレート全体で使うエラー型だよ。

use wasm_bindgen::JsValue;

/// ゲームのロジックや設定で起きるエラー。
///
/// 「列が埋まっている」「もうゲームが終わっている」はエラーにしないで、
/// 何もしない (NoPlacement) で返すよ。ここに来るのは呼び出し側の契約違反だけ！
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {col} is out of range (board width is {width})")]
    ColumnOutOfRange { col: usize, width: usize },

    #[error("board dimensions must be positive (got width {width}, height {height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("player id {0} is not a seat (expected 0 or 1)")]
    InvalidPlayerId(u8),
}

// JS 側には Error オブジェクトとして渡す (catch した側で e.message が読める)。
impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_out_of_range_display() {
        let err = GameError::ColumnOutOfRange { col: 9, width: 7 };
        assert_eq!(err.to_string(), "column 9 is out of range (board width is 7)");
    }

    #[test]
    fn invalid_dimensions_display() {
        let err = GameError::InvalidDimensions { width: 0, height: 6 };
        assert_eq!(
            err.to_string(),
            "board dimensions must be positive (got width 0, height 6)"
        );
    }

    #[test]
    fn invalid_player_id_display() {
        let err = GameError::InvalidPlayerId(2);
        assert_eq!(err.to_string(), "player id 2 is not a seat (expected 0 or 1)");
    }

    #[test]
    fn invalid_config_display() {
        let err = GameError::InvalidConfig("player1_color must not be empty".to_string());
        assert_eq!(err.to_string(), "invalid config: player1_color must not be empty");
    }
}
