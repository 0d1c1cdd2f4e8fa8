// src/app/mod.rs
//! ブラウザ側との接着剤を役割ごとに分割して置くモジュールだよ！
//! ゲームのルールは logic にあって、ここは DOM を組み立てたりクリックを拾ったりするだけ。

use std::sync::{Arc, Mutex, MutexGuard};

use crate::logic::GameState;

pub mod browser_event_manager;
pub mod console_logger;
pub mod event_handler;
pub mod game_app;
pub mod init_handler;
pub mod renderer;
pub mod state_getter;

/// 1試合分のゲーム状態。クリックのコールバックと GameApp で共有するよ。
/// 1手の処理 (落とす → 勝利判定 → 引き分け判定 → 手番交代) はロックを握ったまま最後までやる。
pub type SharedGame = Arc<Mutex<GameState>>;

/// ロックを取る。poison されていても中身を取り出して続行するよ。
pub(crate) fn lock_game(game: &SharedGame) -> MutexGuard<'_, GameState> {
    match game.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::error!("game mutex was poisoned, recovering: {:?}", poisoned);
            poisoned.into_inner()
        }
    }
}
