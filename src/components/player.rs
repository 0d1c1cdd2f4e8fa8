// src/components/player.rs

// serde を使う宣言！プレイヤー情報を JSON にして JS 側に渡すよ！
use serde::{Serialize, Deserialize};

use crate::error::GameError;

/// プレイヤーを識別するための ID だよ！👤
///
/// 色は好きな文字列を選べるから、2人が同じ色を選ぶこともありえる。
/// だからプレイヤーの区別は色じゃなくて、この ID (席番号 0 か 1) でやるんだ。
/// 作れるのは `FIRST` と `SECOND` だけ。JSON からも 0 と 1 以外は読めないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl TryFrom<u8> for PlayerId {
    type Error = GameError;

    fn try_from(seat: u8) -> Result<Self, Self::Error> {
        match seat {
            0 => Ok(PlayerId::FIRST),
            1 => Ok(PlayerId::SECOND),
            other => Err(GameError::InvalidPlayerId(other)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> u8 {
        id.0
    }
}

impl PlayerId {
    /// 先手 (最初に操作するプレイヤー)
    pub const FIRST: PlayerId = PlayerId(0);
    /// 後手
    pub const SECOND: PlayerId = PlayerId(1);

    /// もう一人のプレイヤーを返すよ。2人対戦なのでトグルするだけ！
    pub fn other(self) -> PlayerId {
        if self == PlayerId::FIRST {
            PlayerId::SECOND
        } else {
            PlayerId::FIRST
        }
    }

    /// `[Player; 2]` の添字として使う値。
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 画面表示用の 1 始まりの番号 ("Player 1 won!" みたいに使う)。
    pub fn number(self) -> u8 {
        self.0 + 1
    }
}

/// プレイヤーを表す構造体だよ！
///
/// 持っているのは表示用の色だけ。ID は GameState が席順で割り当てる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// CSS の色文字列 ("red" とか "#ff0000" とか)。中身はチェックしないよ。
    pub color: String,
}

impl Player {
    pub fn new(color: impl Into<String>) -> Self {
        Self { color: color.into() }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_player_toggles() {
        assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.other().other(), PlayerId::FIRST);
        println!("PlayerId::other テスト、成功！🎉");
    }

    #[test]
    fn player_numbers_are_one_based() {
        assert_eq!(PlayerId::FIRST.number(), 1);
        assert_eq!(PlayerId::SECOND.number(), 2);
        assert_eq!(PlayerId::SECOND.index(), 1);
    }

    #[test]
    fn only_two_seats_exist() {
        assert_eq!(PlayerId::try_from(0), Ok(PlayerId::FIRST));
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::SECOND));
        assert_eq!(PlayerId::try_from(2), Err(GameError::InvalidPlayerId(2)));
        assert_eq!(u8::from(PlayerId::SECOND), 1);
    }

    #[test]
    fn player_id_json_is_the_seat_number() {
        assert_eq!(serde_json::to_string(&PlayerId::SECOND).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::FIRST);
        // 3人目の席は読めない
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<crate::components::Cell>(r#"{"Occupied":7}"#).is_err());
    }

    #[test]
    fn create_player() {
        let red = Player::new("red");
        let also_red = Player::new(String::from("red"));

        // 同じ色でも Player としては等しいけど、区別は PlayerId でやるので問題なし！
        assert_eq!(red, also_red);
        assert_eq!(red.color, "red");
        println!("作成したプレイヤー: {:?}", red);
    }
}
