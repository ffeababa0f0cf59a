use std::fmt;

use serde::{Deserialize, Serialize};

use super::*;
use crate::error::{MahjongError, Res};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldType {
    Chi,    // チー
    Pon,    // ポン
    Minkan, // 大明槓
    Ankan,  // 暗槓
    Kakan,  // 加槓
}

impl MeldType {
    #[inline]
    pub fn is_kan(self) -> bool {
        matches!(self, MeldType::Minkan | MeldType::Ankan | MeldType::Kakan)
    }

    // 他家の捨て牌に対する鳴き
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, MeldType::Chi | MeldType::Pon | MeldType::Minkan)
    }
}

// [Meld]
// 一度生成した副露は不変. 加槓はpromoteで新しい副露を生成する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    seat: Seat,
    meld_type: MeldType,
    tiles: Vec<Tile>,      // 表示順
    called: Option<Index>, // tilesにおける鳴いた牌のindex (暗槓はNone)
    from: Seat,            // 鳴いた牌の供給元 (暗槓は自分)
}

impl Meld {
    pub fn new(
        seat: Seat,
        meld_type: MeldType,
        mut tiles: Vec<Tile>,
        called: Option<Tile>,
        from: Seat,
    ) -> Res<Self> {
        if seat >= SEAT || from >= SEAT {
            return Err(MahjongError::construction("seat out of range"));
        }
        sort_tiles(&mut tiles);

        match meld_type {
            MeldType::Chi => {
                if tiles.len() != 3 || !tiles[0].is_number() {
                    return Err(MahjongError::construction("chi needs 3 number tiles"));
                }
                let ok = tiles
                    .windows(2)
                    .all(|w| w[0].category() == w[1].category() && w[0].rank() + 1 == w[1].rank());
                if !ok {
                    return Err(MahjongError::construction(format!(
                        "not a run: {}",
                        tiles_to_string(&tiles)
                    )));
                }
                if from != left_seat(seat) {
                    return Err(MahjongError::construction("chi must be called from the left seat"));
                }
            }
            MeldType::Pon | MeldType::Minkan | MeldType::Ankan => {
                let n = if meld_type == MeldType::Pon { 3 } else { 4 };
                if tiles.len() != n || tiles.iter().any(|t| *t != tiles[0]) {
                    return Err(MahjongError::construction(format!(
                        "{:?} needs {} identical tiles: {}",
                        meld_type,
                        n,
                        tiles_to_string(&tiles)
                    )));
                }
                if (meld_type == MeldType::Ankan) != (from == seat) {
                    return Err(MahjongError::construction("invalid source seat"));
                }
            }
            MeldType::Kakan => {
                return Err(MahjongError::construction(
                    "added kan can only be made by promoting a pon",
                ));
            }
        }

        let called = match (meld_type, called) {
            (MeldType::Ankan, None) => None,
            (MeldType::Ankan, Some(_)) => {
                return Err(MahjongError::construction("concealed kan has no called tile"));
            }
            (_, Some(c)) => match tiles.iter().position(|t| t.is_identical(&c)) {
                Some(i) => Some(i),
                None => return Err(MahjongError::construction("called tile is not in the meld")),
            },
            (_, None) => return Err(MahjongError::construction("called tile is missing")),
        };

        Ok(Self {
            seat,
            meld_type,
            tiles,
            called,
            from,
        })
    }

    // ポンに1枚加えて加槓を生成
    pub fn promote(&self, tile: Tile) -> Res<Self> {
        if self.meld_type != MeldType::Pon {
            return Err(MahjongError::construction("only a pon can be promoted"));
        }
        if tile != self.tiles[0] {
            return Err(MahjongError::construction(format!(
                "{} does not match the pon",
                tile
            )));
        }
        let called = self.called.map(|i| self.tiles[i]);
        let mut tiles = self.tiles.clone();
        tiles.push(tile);
        sort_tiles(&mut tiles);
        let called = called.and_then(|c| tiles.iter().position(|t| t.is_identical(&c)));
        Ok(Self {
            meld_type: MeldType::Kakan,
            tiles,
            called,
            ..*self
        })
    }

    #[inline]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[inline]
    pub fn meld_type(&self) -> MeldType {
        self.meld_type
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn called_index(&self) -> Option<Index> {
        self.called
    }

    pub fn called_tile(&self) -> Option<Tile> {
        self.called.map(|i| self.tiles[i])
    }

    #[inline]
    pub fn from(&self) -> Seat {
        self.from
    }

    // 最も小さい牌 (順子の場合は先頭)
    #[inline]
    pub fn head(&self) -> Tile {
        self.tiles[0]
    }

    #[inline]
    pub fn is_kan(&self) -> bool {
        self.meld_type.is_kan()
    }

    // 暗槓以外は副露 (門前を崩す)
    #[inline]
    pub fn is_open(&self) -> bool {
        self.meld_type != MeldType::Ankan
    }

    #[inline]
    pub fn is_run(&self) -> bool {
        self.meld_type == MeldType::Chi
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<String> = self
            .tiles
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if Some(i) == self.called {
                    format!("{}({})", t, self.from)
                } else {
                    t.to_string()
                }
            })
            .collect();
        write!(f, "{}", s.join("|"))
    }
}
