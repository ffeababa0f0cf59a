use std::collections::VecDeque;

use rand::prelude::*;

use crate::error::{MahjongError, Res};
use crate::model::*;

// [Wall]
// 牌山 (ツモ山 + 王牌)
// 王牌はドラ表示牌5枚, 裏ドラ表示牌5枚, 嶺上牌4枚
// 槓のたびにツモ山の最後の牌を王牌に移動して王牌を14枚に保つ
#[derive(Debug, Clone)]
pub struct Wall {
    live: VecDeque<Tile>,
    dora: Vec<Tile>,
    ura: Vec<Tile>,
    replacement: VecDeque<Tile>,
    kan_count: usize,
}

impl Wall {
    // [0, 5): ドラ表示牌, [5, 10): 裏ドラ表示牌, [10, 14): 嶺上牌, [14, 136): ツモ山 (配牌を含む)
    pub fn from_tiles(tiles: Vec<Tile>) -> Res<Self> {
        if tiles.len() != TILE_TOTAL {
            return Err(MahjongError::construction(format!(
                "wall must have {} tiles: {}",
                TILE_TOTAL,
                tiles.len()
            )));
        }
        let tt = tiles_to_tile_table(&tiles);
        if let Some(t) = all_kinds().find(|&t| table_count(&tt, t) as usize != TILE) {
            return Err(MahjongError::construction(format!(
                "wall must have {} copies of {}",
                TILE, t
            )));
        }

        Ok(Self::build(tiles))
    }

    pub fn shuffled(seed: u64, red_fives: usize) -> Self {
        let mut tiles = full_set(red_fives.min(TILE));
        let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
        tiles.shuffle(&mut rng);
        Self::build(tiles)
    }

    // 作為的な牌山を生成 指定がない場所はシード値に従ってランダムに生成
    // hands: 各座席の配牌 (最大13枚), draws: ツモ山の先頭 (最初の牌は親の14枚目)
    pub fn arranged(
        hands: &[Vec<Tile>; SEAT],
        draws: &[Tile],
        replacements: &[Tile],
        doras: &[Tile],
        seed: u64,
        red_fives: usize,
    ) -> Res<Self> {
        if hands.iter().any(|h| h.len() > HAND)
            || draws.len() > TILE_TOTAL - DEAD_WALL - HAND * SEAT
            || replacements.len() > REPLACEMENTS
            || doras.len() > DORA_INDICATORS
        {
            return Err(MahjongError::construction("too many arranged tiles"));
        }

        let mut remain = full_set(red_fives.min(TILE));
        let mut take = |t: &Tile| -> Res<Tile> {
            let i = remain
                .iter()
                .position(|r| r.is_identical(t))
                .ok_or_else(|| MahjongError::construction(format!("no tile left for {}", t)))?;
            Ok(remain.swap_remove(i))
        };
        let mut specified = |ts: &[Tile]| -> Res<Vec<Tile>> { ts.iter().map(&mut take).collect() };
        let doras = specified(doras)?;
        let replacements = specified(replacements)?;
        let mut hs = vec![];
        for h in hands {
            hs.push(specified(h)?);
        }
        let draws = specified(draws)?;

        let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
        remain.shuffle(&mut rng);

        let mut tiles = vec![];
        let mut fill = |v: Vec<Tile>, n: usize, tiles: &mut Vec<Tile>| {
            let k = v.len();
            tiles.extend(v);
            tiles.extend(remain.drain(..n - k));
        };
        fill(doras, DORA_INDICATORS, &mut tiles);
        fill(vec![], DORA_INDICATORS, &mut tiles);
        fill(replacements, REPLACEMENTS, &mut tiles);
        for h in hs {
            fill(h, HAND, &mut tiles);
        }
        tiles.extend(draws);
        tiles.append(&mut remain);
        Self::from_tiles(tiles)
    }

    fn build(tiles: Vec<Tile>) -> Self {
        let mut it = tiles.into_iter();
        Self {
            dora: it.by_ref().take(DORA_INDICATORS).collect(),
            ura: it.by_ref().take(DORA_INDICATORS).collect(),
            replacement: it.by_ref().take(REPLACEMENTS).collect(),
            live: it.collect(),
            kan_count: 0,
        }
    }

    // ツモ山の残り枚数
    #[inline]
    pub fn remaining(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn kan_count(&self) -> usize {
        self.kan_count
    }

    pub fn draw(&mut self) -> Option<Tile> {
        self.live.pop_front()
    }

    // 嶺上牌と新ドラ表示牌 (槓の上限に達している場合はNone)
    pub fn draw_replacement(&mut self) -> Option<(Tile, Tile)> {
        if self.kan_count >= MAX_KAN {
            return None;
        }
        let t = self.replacement.pop_front()?;
        if let Some(last) = self.live.pop_back() {
            self.replacement.push_back(last);
        }
        self.kan_count += 1;
        Some((t, self.dora[self.kan_count]))
    }

    // 公開済みのドラ表示牌
    pub fn dora_indicators(&self) -> &[Tile] {
        &self.dora[..=self.kan_count]
    }

    // 公開済みのドラ表示牌に対応する裏ドラ表示牌
    pub fn ura_indicators(&self) -> &[Tile] {
        &self.ura[..=self.kan_count]
    }
}
