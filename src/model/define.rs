// 型エイリアス
pub type Seat = usize; // 座席
pub type Rank = u8; // 牌の数字部分 (数牌: 1~9, 風牌: 0~3, 三元牌: 0~2)
pub type Index = usize; // その他Index
pub type Score = i32; // 得点

// Number
pub const SEAT: usize = 4; // 座席の数
pub const TYPE: usize = 5; // 牌の種別の数 (萬子,筒子,索子,風牌,三元牌)
pub const TNUM: usize = 10; // 牌の数字部分の配列長 (0~9)
pub const TILE: usize = 4; // 同種の牌の数
pub const KIND: usize = 34; // 牌の種類の数
pub const TILE_TOTAL: usize = KIND * TILE; // 牌の総数

// Wind Rank
pub const WE: Rank = 0; // Wind:   East  (東)
pub const WS: Rank = 1; // Wind:   South (南)
pub const WW: Rank = 2; // Wind:   West  (西)
pub const WN: Rank = 3; // Wind:   North (北)

// Dragon Rank
pub const DW: Rank = 0; // Dragon: White (白)
pub const DG: Rank = 1; // Dragon: Green (發)
pub const DR: Rank = 2; // Dragon: Red   (中)

// 王牌
pub const DORA_INDICATORS: usize = 5; // ドラ表示牌 (裏ドラも同数)
pub const REPLACEMENTS: usize = 4; // 嶺上牌
pub const DEAD_WALL: usize = DORA_INDICATORS * 2 + REPLACEMENTS;
pub const HAND: usize = 13; // 配牌の枚数
pub const MAX_KAN: usize = 4;

#[inline]
pub fn next_seat(s: Seat) -> Seat {
    (s + 1) % SEAT
}

// 上家 (チーの供給元)
#[inline]
pub fn left_seat(s: Seat) -> Seat {
    (s + SEAT - 1) % SEAT
}
