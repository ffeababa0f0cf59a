use std::fmt;

use serde::{Deserialize, Serialize};

use super::*;
use crate::util::misc::{vec_count, vec_to_string};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discard {
    pub tile: Tile,
    pub drawn: bool,  // ツモ切りフラグ
    pub riichi: bool, // リーチ宣言牌
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tile)?;
        if self.riichi {
            write!(f, "*")?;
        }
        Ok(())
    }
}

// [SeatRecord]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatRecord {
    pub wind: Rank,             // 自風 (WE~WN)
    pub score: Score,           // 得点
    pub hand: Vec<Tile>,        // 門前の手牌 (表示順)
    pub melds: Vec<Meld>,       // 鳴き一覧
    pub discards: Vec<Discard>, // 捨て牌一覧 (追加のみ)
}

impl SeatRecord {
    pub fn count(&self, t: Tile) -> usize {
        vec_count(&self.hand, &t)
    }

    pub fn has(&self, t: Tile) -> bool {
        self.hand.contains(&t)
    }

    pub fn add_tile(&mut self, t: Tile) {
        let k = t.sort_key();
        let i = self.hand.partition_point(|h| h.sort_key() <= k);
        self.hand.insert(i, t);
    }

    // 赤ドラの有無まで一致する牌を優先して取り除く
    pub fn remove_tile(&mut self, t: Tile) -> Option<Tile> {
        let i = self
            .hand
            .iter()
            .position(|h| h.is_identical(&t))
            .or_else(|| self.hand.iter().position(|h| *h == t))?;
        Some(self.hand.remove(i))
    }

    pub fn tile_table(&self) -> TileTable {
        tiles_to_tile_table(&self.hand)
    }

    // 門前 (暗槓のみ許容)
    pub fn is_concealed(&self) -> bool {
        self.melds.iter().all(|m| !m.is_open())
    }

    pub fn kan_count(&self) -> usize {
        self.melds.iter().filter(|m| m.is_kan()).count()
    }
}

impl fmt::Display for SeatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "wind: {}, score: {}", self.wind, self.score)?;
        writeln!(f, "hand: {}", tiles_to_string(&self.hand))?;
        writeln!(f, "melds: {}", vec_to_string(&self.melds))?;
        write!(f, "discards: {}", vec_to_string(&self.discards))
    }
}
