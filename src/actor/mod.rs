mod random;
mod tsumogiri;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::*;

pub use random::RandomAgent;
pub use tsumogiri::TsumogiriAgent;

// [DrawResponse]
// ツモ後 (嶺上ツモを含む) の選択
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawResponse {
    SelfWin,      // ツモ和了
    Kan(Tile),    // 暗槓 or 加槓
    Riichi(Tile), // リーチ宣言 + 宣言牌
    Discard(Tile),
    NineKinds, // 九種九牌
}

// [MeldSpec]
// 鳴きに使用する手牌 (鳴いた牌は含まない)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldSpec {
    pub meld_type: MeldType,
    pub tiles: Vec<Tile>,
}

impl MeldSpec {
    pub fn new(meld_type: MeldType, tiles: &[Tile]) -> Self {
        Self {
            meld_type,
            tiles: tiles.to_vec(),
        }
    }
}

// [DiscardResponse]
// 他家の打牌に対する選択
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardResponse {
    Win, // ロン
    Call(MeldSpec),
    Pass,
}

// Agent trait
// 卓から各場面で呼び出される. 選択肢の外の応答は卓側でエラーになる
pub trait Agent: Send {
    fn name(&self) -> String;

    // ツモ後の選択 tileはツモ牌
    fn draw_response(&mut self, view: &View<'_>, tile: Tile, is_replacement: bool)
        -> DrawResponse;

    // 他家の打牌に対する選択
    // 和了または鳴きが可能な場合のみ呼び出される
    fn discard_response(&mut self, view: &View<'_>, tile: Tile) -> DiscardResponse;

    // 他家の加槓(国士無双の場合は暗槓)に対して槍槓するか
    // 槍槓が可能な場合のみ呼び出される
    fn meld_response(&mut self, view: &View<'_>, meld: &Meld) -> bool;

    // チー・ポン後の打牌
    fn call_discard(&mut self, view: &View<'_>, meld: &Meld) -> Tile;
}

impl fmt::Debug for dyn Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// 鳴いた後に捨てることができる手牌
pub(crate) fn discardable_after_call(view: &View<'_>, meld: &Meld) -> Vec<Tile> {
    let prohibited = crate::control::prohibited_discards(meld);
    view.hand()
        .iter()
        .copied()
        .filter(|t| !prohibited.contains(t))
        .collect()
}
