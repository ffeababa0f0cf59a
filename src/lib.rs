#![warn(rust_2018_idioms)]
// 構造的な意味合いや一貫性を保つために以下の警告は無効化
#![allow(clippy::needless_range_loop)]
#![allow(clippy::too_many_arguments)]

// 立直麻雀のルールエンジン
// 手牌の分解, 役の判定, 卓の進行 (ツモ, 打牌, 鳴き, 槓, リーチ, 流局)
pub mod actor;
pub mod config;
pub mod control;
pub mod error;
pub mod hand;
pub mod listener;
pub mod model;
pub mod util;

pub use actor::{Agent, DiscardResponse, DrawResponse, MeldSpec, RandomAgent, TsumogiriAgent};
pub use config::TableConfig;
pub use control::{Phase, Table, Wall};
pub use error::{MahjongError, Res};
pub use listener::{EventPrinter, Listener};
