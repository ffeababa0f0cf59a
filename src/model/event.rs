use std::fmt;

use serde::{Deserialize, Serialize};

use super::*;
use crate::hand::YakuId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    New(EventNew),         // 局開始
    Deal(EventDeal),       // ツモ
    Discard(EventDiscard), // 打牌
    Meld(EventMeld),       // 鳴き
    Dora(EventDora),       // 新ドラ
    Riichi(EventRiichi),   // リーチ成立 (供託)
    End(HandResult),       // 局終了
}

impl Event {
    #[inline]
    pub fn new(
        round_wind: Rank,
        dealer: Seat,
        riichi_sticks: usize,
        doras: Vec<Tile>,
        scores: [Score; SEAT],
        wall_count: usize,
    ) -> Self {
        Self::New(EventNew {
            round_wind,
            dealer,
            riichi_sticks,
            doras,
            scores,
            wall_count,
        })
    }

    #[inline]
    pub fn deal(seat: Seat, tile: Tile, is_replacement: bool) -> Self {
        Self::Deal(EventDeal {
            seat,
            tile,
            is_replacement,
        })
    }

    #[inline]
    pub fn discard(seat: Seat, tile: Tile, is_drawn: bool, is_riichi: bool) -> Self {
        Self::Discard(EventDiscard {
            seat,
            tile,
            is_drawn,
            is_riichi,
        })
    }

    #[inline]
    pub fn meld(seat: Seat, meld: Meld) -> Self {
        Self::Meld(EventMeld { seat, meld })
    }

    #[inline]
    pub fn dora(tile: Tile) -> Self {
        Self::Dora(EventDora { tile })
    }

    #[inline]
    pub fn riichi(seat: Seat, riichi_sticks: usize) -> Self {
        Self::Riichi(EventRiichi {
            seat,
            riichi_sticks,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventNew {
    pub round_wind: Rank,      // 場風
    pub dealer: Seat,          // 親
    pub riichi_sticks: usize,  // 供託(リーチ棒)
    pub doras: Vec<Tile>,      // ドラ表示牌
    pub scores: [Score; SEAT], // 各プレイヤーの所持点
    pub wall_count: usize,     // 牌山残り枚数
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDeal {
    pub seat: Seat,
    pub tile: Tile, // ツモ牌
    pub is_replacement: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDiscard {
    pub seat: Seat,
    pub tile: Tile,
    pub is_drawn: bool,  // ツモ切り
    pub is_riichi: bool, // リーチ宣言
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMeld {
    pub seat: Seat,
    pub meld: Meld,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDora {
    pub tile: Tile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRiichi {
    pub seat: Seat,
    pub riichi_sticks: usize,
}

// [DrawType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawType {
    Kouhaiheikyoku, // 荒廃平局 (牌山切れ)
    Kyushukyuhai,   // 九種九牌
    Suufuurenda,    // 四風連打
    Suukansanra,    // 四槓散了
    Suuchariichi,   // 四家立直
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DrawType::Kouhaiheikyoku => "荒廃平局",
                DrawType::Kyushukyuhai => "九種九牌",
                DrawType::Suufuurenda => "四風連打",
                DrawType::Suukansanra => "四槓散了",
                DrawType::Suuchariichi => "四家立直",
            }
        )
    }
}

// [HandEndReason]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandEndReason {
    SelfDraw,     // ツモ和了
    Discard,      // ロン和了
    RobbedKan,    // 槍槓
    Draw(DrawType),
}

// [WinRecord]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinRecord {
    pub seat: Seat,
    pub from: Option<Seat>, // 放銃者 (ツモの場合はNone)
    pub tile: Tile,         // 和了牌
    pub hand: Vec<Tile>,    // 和了牌を含む門前の手牌
    pub melds: Vec<Meld>,
    pub yaku: Vec<YakuId>,
}

// [HandResult]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandResult {
    pub reason: HandEndReason,
    pub wins: Vec<WinRecord>,
    pub tenpai: [bool; SEAT],     // 流局時の聴牌 (和了時はすべてfalse)
    pub riichi_sticks: usize,     // 供託 (和了時は和了者が受け取る)
    pub scores: [Score; SEAT],    // リーチ棒の支払い後の所持点
    pub doras: Vec<Tile>,         // ドラ表示牌
    pub ura_doras: Vec<Tile>,     // 裏ドラ表示牌 (リーチ者の和了時のみ)
}

impl HandResult {
    pub fn is_win(&self) -> bool {
        !self.wins.is_empty()
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            HandEndReason::Draw(d) => write!(f, "draw({}) tenpai: {:?}", d, self.tenpai),
            _ => {
                let ws: Vec<String> = self
                    .wins
                    .iter()
                    .map(|w| format!("seat {} {} {:?}", w.seat, w.tile, w.yaku))
                    .collect();
                write!(f, "{:?} {}", self.reason, ws.join(", "))
            }
        }
    }
}
