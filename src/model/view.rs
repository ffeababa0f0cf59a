use serde::{Deserialize, Serialize};

use super::*;

// 直前の操作の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Draw,            // ツモ
    ReplacementDraw, // 嶺上ツモ
    Discard,         // 打牌
    Call,            // チー・ポン (鳴いた牌)
    Ankan,           // 暗槓
    Kakan,           // 加槓
}

// [RoundState]
// 局全体で共有される状態
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundState {
    pub round_wind: Rank,             // 場風
    pub dealer: Seat,                 // 親
    pub dora_indicators: Vec<Tile>,   // ドラ表示牌
    pub wall_count: usize,            // 牌山残り枚数
    pub riichi: [bool; SEAT],         // リーチ (ダブルリーチを含む)
    pub double_riichi: [bool; SEAT],  // ダブルリーチ
    pub ippatsu: [bool; SEAT],        // 一発 立直後にセットして次の打牌または鳴きでfalseをセット
    pub riichi_sticks: usize,         // 供託(リーチ棒)
}

impl RoundState {
    pub fn riichi_count(&self) -> usize {
        self.riichi.iter().filter(|&&r| r).count()
    }
}

// [View]
// 座席seatから見た卓の読み取り専用の射影
// 他家の手牌にはアクセスできない
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    seat: Seat,
    actor: Seat,
    action: ActionKind,
    tile: Tile,
    seats: &'a [SeatRecord; SEAT],
    round: &'a RoundState,
}

impl<'a> View<'a> {
    pub fn new(
        seat: Seat,
        actor: Seat,
        action: ActionKind,
        tile: Tile,
        seats: &'a [SeatRecord; SEAT],
        round: &'a RoundState,
    ) -> Self {
        Self {
            seat,
            actor,
            action,
            tile,
            seats,
            round,
        }
    }

    #[inline]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[inline]
    pub fn actor(&self) -> Seat {
        self.actor
    }

    #[inline]
    pub fn action(&self) -> ActionKind {
        self.action
    }

    #[inline]
    pub fn tile(&self) -> Tile {
        self.tile
    }

    // 自分のツモ (嶺上ツモを含む)
    pub fn is_self_draw(&self) -> bool {
        self.actor == self.seat
            && matches!(self.action, ActionKind::Draw | ActionKind::ReplacementDraw)
    }

    pub fn hand(&self) -> &'a [Tile] {
        &self.seats[self.seat].hand
    }

    pub fn melds(&self, s: Seat) -> &'a [Meld] {
        &self.seats[s].melds
    }

    pub fn discards(&self, s: Seat) -> &'a [Discard] {
        &self.seats[s].discards
    }

    pub fn score(&self, s: Seat) -> Score {
        self.seats[s].score
    }

    pub fn seat_wind(&self, s: Seat) -> Rank {
        self.seats[s].wind
    }

    pub fn round_wind(&self) -> Rank {
        self.round.round_wind
    }

    pub fn dealer(&self) -> Seat {
        self.round.dealer
    }

    pub fn dora_indicators(&self) -> &'a [Tile] {
        &self.round.dora_indicators
    }

    pub fn wall_count(&self) -> usize {
        self.round.wall_count
    }

    pub fn is_riichi(&self, s: Seat) -> bool {
        self.round.riichi[s]
    }

    pub fn is_double_riichi(&self, s: Seat) -> bool {
        self.round.double_riichi[s]
    }

    pub fn is_ippatsu(&self, s: Seat) -> bool {
        self.round.ippatsu[s]
    }

    pub fn riichi_sticks(&self) -> usize {
        self.round.riichi_sticks
    }

    // 卓上に副露が1つも存在しない
    pub fn no_melds_on_table(&self) -> bool {
        self.seats.iter().all(|r| r.melds.is_empty())
    }

    // 和了判定に用いる門前の手牌
    // ツモの場合は手牌に和了牌が含まれているのでそのまま, それ以外はtileを加える
    pub fn winning_hand(&self) -> Vec<Tile> {
        let mut hand = self.hand().to_vec();
        if !self.is_self_draw() {
            hand.push(self.tile);
            sort_tiles(&mut hand);
        }
        hand
    }
}
