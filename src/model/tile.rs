use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use serde::{de, ser, Deserialize, Serialize};

use super::*;
use crate::error::{MahjongError, Res};

// [Category]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Man,    // 萬子
    Pin,    // 筒子
    Suo,    // 索子
    Wind,   // 風牌
    Dragon, // 三元牌
}

impl Category {
    pub const ALL: [Category; TYPE] = [
        Category::Man,
        Category::Pin,
        Category::Suo,
        Category::Wind,
        Category::Dragon,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    // 数牌
    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, Category::Man | Category::Pin | Category::Suo)
    }

    // 有効なRankの範囲
    pub fn ranks(self) -> RangeInclusive<Rank> {
        match self {
            Category::Man | Category::Pin | Category::Suo => 1..=9,
            Category::Wind => WE..=WN,
            Category::Dragon => DW..=DR,
        }
    }

    fn symbol(self) -> char {
        ['m', 'p', 's', 'z', 'z'][self.index()]
    }
}

// [Tile]
// 等価性とHashは赤ドラの有無を無視する
#[derive(Clone, Copy)]
pub struct Tile {
    category: Category,
    rank: Rank,
    red: bool,
}

impl Tile {
    pub fn new(category: Category, rank: Rank, red: bool) -> Res<Self> {
        if !category.ranks().contains(&rank) {
            return Err(MahjongError::construction(format!(
                "rank {} is out of range for {:?}",
                rank, category
            )));
        }
        if red && !(category.is_number() && rank == 5) {
            return Err(MahjongError::construction(format!(
                "only number fives can be red: {:?} {}",
                category, rank
            )));
        }
        Ok(Self::raw(category, rank, red))
    }

    // 範囲検査済みの値からの生成
    #[inline]
    pub(crate) const fn raw(category: Category, rank: Rank, red: bool) -> Self {
        Self {
            category,
            rank,
            red,
        }
    }

    #[inline]
    pub(crate) const fn kind(category: Category, rank: Rank) -> Self {
        Self::raw(category, rank, false)
    }

    // "m1", "m0"(赤5), "z1"~"z4"(東南西北), "z5"~"z7"(白發中)
    pub fn from_symbol(s: &str) -> Res<Self> {
        let err = || MahjongError::construction(format!("invalid tile symbol: {:?}", s));
        let mut cs = s.chars();
        let (c, n) = match (cs.next(), cs.next(), cs.next()) {
            (Some(c), Some(n), None) => (c, n.to_digit(10).ok_or_else(err)? as Rank),
            _ => return Err(err()),
        };
        match c {
            'm' | 'p' | 's' => {
                let cat = match c {
                    'm' => Category::Man,
                    'p' => Category::Pin,
                    _ => Category::Suo,
                };
                if n == 0 {
                    Self::new(cat, 5, true)
                } else {
                    Self::new(cat, n, false)
                }
            }
            'z' => match n {
                1..=4 => Self::new(Category::Wind, n - 1, false),
                5..=7 => Self::new(Category::Dragon, n - 5, false),
                _ => Err(err()),
            },
            _ => Err(err()),
        }
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.red
    }

    // 赤5の場合,通常の5を返却. それ以外の場合はコピーをそのまま返却.
    #[inline]
    pub fn to_normal(self) -> Self {
        Self::kind(self.category, self.rank)
    }

    // 数牌
    #[inline]
    pub fn is_number(&self) -> bool {
        self.category.is_number()
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        !self.is_number()
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_number() && (self.rank == 1 || self.rank == 9)
    }

    // 么九牌
    #[inline]
    pub fn is_end(&self) -> bool {
        self.is_honor() || self.is_terminal()
    }

    // 中張牌
    #[inline]
    pub fn is_simple(&self) -> bool {
        !self.is_end()
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        self.category == Category::Wind
    }

    // 三元牌
    #[inline]
    pub fn is_dragon(&self) -> bool {
        self.category == Category::Dragon
    }

    // 同じ種別で数字がdだけ離れた牌 (数牌のみ)
    pub fn offset(&self, d: i32) -> Option<Self> {
        if !self.is_number() {
            return None;
        }
        let r = self.rank as i32 + d;
        if (1..=9).contains(&r) {
            Some(Self::kind(self.category, r as Rank))
        } else {
            None
        }
    }

    // ドラ表示牌からドラへの変換
    pub fn dora_successor(&self) -> Self {
        let r = self.rank;
        let next = match self.category {
            Category::Man | Category::Pin | Category::Suo => {
                if r == 9 {
                    1
                } else {
                    r + 1
                }
            }
            Category::Wind => (r + 1) % 4,
            Category::Dragon => (r + 1) % 3,
        };
        Self::kind(self.category, next)
    }

    // 表示順のキー. 赤5は通常の5の後に並ぶ
    #[inline]
    pub fn sort_key(&self) -> (Category, Rank, bool) {
        (self.category, self.rank, self.red)
    }

    // 同一の牌 (赤ドラの有無も一致)
    #[inline]
    pub fn is_identical(&self, other: &Tile) -> bool {
        self == other && self.red == other.red
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.rank == other.rank
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self.category {
            _ if self.red => 0,
            Category::Wind => self.rank + 1,
            Category::Dragon => self.rank + 5,
            _ => self.rank,
        };
        write!(f, "{}{}", self.category.symbol(), n)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// 么九牌13種 (国士無双)
pub const ORPHANS: [Tile; 13] = [
    Tile::kind(Category::Man, 1),
    Tile::kind(Category::Man, 9),
    Tile::kind(Category::Pin, 1),
    Tile::kind(Category::Pin, 9),
    Tile::kind(Category::Suo, 1),
    Tile::kind(Category::Suo, 9),
    Tile::kind(Category::Wind, WE),
    Tile::kind(Category::Wind, WS),
    Tile::kind(Category::Wind, WW),
    Tile::kind(Category::Wind, WN),
    Tile::kind(Category::Dragon, DW),
    Tile::kind(Category::Dragon, DG),
    Tile::kind(Category::Dragon, DR),
];

// 34種の牌 (赤なし) を表示順で列挙
pub fn all_kinds() -> impl Iterator<Item = Tile> {
    Category::ALL
        .into_iter()
        .flat_map(|c| c.ranks().map(move |r| Tile::kind(c, r)))
}

// 136枚の牌一式. 各数牌の5のうちred_fives枚を赤にする
pub fn full_set(red_fives: usize) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_TOTAL);
    for t in all_kinds() {
        for n in 0..TILE {
            let red = t.is_number() && t.rank == 5 && n < red_fives;
            tiles.push(Tile::raw(t.category, t.rank, red));
        }
    }
    tiles
}

pub fn sort_tiles(tiles: &mut [Tile]) {
    tiles.sort_by_key(|t| t.sort_key());
}

// "m123p406s789z1155" 形式の文字列から牌を生成
pub fn tiles_from_string(s: &str) -> Res<Vec<Tile>> {
    let mut res = vec![];
    let mut c = None;
    for ch in s.chars() {
        match ch {
            'm' | 'p' | 's' | 'z' => c = Some(ch),
            ' ' | ',' => {}
            _ => {
                let c = c.ok_or_else(|| {
                    MahjongError::construction(format!("missing tile type in {:?}", s))
                })?;
                res.push(Tile::from_symbol(&format!("{}{}", c, ch))?);
            }
        }
    }
    Ok(res)
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut res = String::new();
    let mut prev = None;
    for t in tiles {
        let s = t.to_string();
        let (c, n) = s.split_at(1);
        if prev != Some(c.to_string()) {
            res.push_str(c);
            prev = Some(c.to_string());
        }
        res.push_str(n);
    }
    res
}

// [TileTable]
// [種別][数字] の枚数表. 赤ドラは通常の牌として数える
pub type TileRow = [u8; TNUM];
pub type TileTable = [TileRow; TYPE];

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for t in tiles {
        tt[t.category.index()][t.rank as usize] += 1;
    }
    tt
}

pub fn tiles_from_tile_table(tt: &TileTable) -> Vec<Tile> {
    let mut res = vec![];
    for (ti, row) in tt.iter().enumerate() {
        let cat = Category::ALL[ti];
        for r in cat.ranks() {
            for _ in 0..row[r as usize] {
                res.push(Tile::kind(cat, r));
            }
        }
    }
    res
}

#[inline]
pub fn table_count(tt: &TileTable, t: Tile) -> u8 {
    tt[t.category.index()][t.rank as usize]
}

#[inline]
pub fn table_inc(tt: &mut TileTable, t: Tile, n: u8) {
    tt[t.category.index()][t.rank as usize] += n;
}

#[inline]
pub fn table_dec(tt: &mut TileTable, t: Tile, n: u8) {
    tt[t.category.index()][t.rank as usize] -= n;
}
