// 麻雀のデータモデル
mod define;
mod event;
mod meld;
mod seat;
mod tile;
mod view;

pub use define::*;
pub use event::*;
pub use meld::*;
pub use seat::*;
pub use tile::*;
pub use view::*;
