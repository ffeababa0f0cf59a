use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::*;

// [面子分解]

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupType {
    Pair,    // 雀頭
    Run,     // 順子
    Triplet, // 刻子
}

// (種別, 先頭の牌) 順子の場合は最も小さい牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group(pub GroupType, pub Tile);

impl Group {
    pub fn tiles(&self) -> Vec<Tile> {
        let t = self.1;
        match self.0 {
            GroupType::Pair => vec![t, t],
            GroupType::Triplet => vec![t, t, t],
            GroupType::Run => (0..3).filter_map(|d| t.offset(d)).collect(),
        }
    }

    pub fn contains(&self, t: Tile) -> bool {
        match self.0 {
            GroupType::Run => {
                t.category() == self.1.category()
                    && self.1.rank() <= t.rank()
                    && t.rank() <= self.1.rank() + 2
            }
            _ => t == self.1,
        }
    }

    // 么九牌を含む
    pub fn has_end(&self) -> bool {
        match self.0 {
            GroupType::Run => self.1.rank() == 1 || self.1.rank() == 7,
            _ => self.1.is_end(),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", tiles_to_string(&self.tiles()))
    }
}

// 門前の手牌の分解 (面子 + 雀頭1つ)
pub type Split = Vec<Group>;

// [SplitIter]
// 残りの牌のうち最も小さい牌を含む面子(または雀頭)を取り除く操作を再帰的に行う
// 取り除く牌が常に最小の牌なので同じ分解を2度列挙することはない
#[derive(Debug, Clone)]
pub struct SplitIter {
    stack: Vec<SplitFrame>,
}

#[derive(Debug, Clone)]
struct SplitFrame {
    tt: TileTable,
    groups: Split,
    has_pair: bool,
}

impl SplitIter {
    fn new(tiles: &[Tile]) -> Self {
        let stack = if tiles.is_empty() {
            vec![]
        } else {
            vec![SplitFrame {
                tt: tiles_to_tile_table(tiles),
                groups: vec![],
                has_pair: false,
            }]
        };
        Self { stack }
    }
}

impl Iterator for SplitIter {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        while let Some(f) = self.stack.pop() {
            let t = match lowest_tile(&f.tt) {
                Some(t) => t,
                None => {
                    if f.has_pair {
                        return Some(f.groups);
                    }
                    continue;
                }
            };

            let n = table_count(&f.tt, t);
            let mut push = |g: Group, has_pair: bool| {
                let mut tt = f.tt;
                for gt in g.tiles() {
                    table_dec(&mut tt, gt, 1);
                }
                let mut groups = f.groups.clone();
                groups.push(g);
                self.stack.push(SplitFrame {
                    tt,
                    groups,
                    has_pair,
                });
            };

            if is_run_available(&f.tt, t) {
                push(Group(GroupType::Run, t), f.has_pair);
            }
            if n >= 3 {
                push(Group(GroupType::Triplet, t), f.has_pair);
            }
            if n >= 2 && !f.has_pair {
                push(Group(GroupType::Pair, t), true);
            }
        }
        None
    }
}

fn lowest_tile(tt: &TileTable) -> Option<Tile> {
    for cat in Category::ALL {
        for r in cat.ranks() {
            if tt[cat.index()][r as usize] > 0 {
                return Some(Tile::kind(cat, r));
            }
        }
    }
    None
}

fn is_run_available(tt: &TileTable, t: Tile) -> bool {
    match (t.offset(1), t.offset(2)) {
        (Some(t1), Some(t2)) => table_count(tt, t1) > 0 && table_count(tt, t2) > 0,
        _ => false,
    }
}

// 通常形(4面子1雀頭,副露がある場合は面子の数が減る)の分解をすべて列挙
// 空の手牌や枚数が3n+2でない手牌は何も返さない
pub fn normal_form_split(tiles: &[Tile]) -> SplitIter {
    SplitIter::new(tiles)
}

// [完成形判定]

// 面子のみで構成されているかの判定
fn is_sets(tr: &TileRow, cat: Category) -> bool {
    if !cat.is_number() {
        return tr.iter().all(|n| n % 3 == 0);
    }
    let (mut n0, mut n1) = (tr[1], tr[2]);
    for i in 1..8 {
        let n2 = tr[i + 2];
        let n = n0 % 3;
        if n1 < n || n2 < n {
            return false;
        }
        n0 = n1 - n;
        n1 = n2 - n;
    }
    n0 % 3 == 0 && n1 % 3 == 0
}

// 雀頭候補となる数字のリスト
// 数牌の場合, 面子の数字の和は3で割り切れるので余りの値によって雀頭候補を絞り込める
fn pair_candidate_ranks(tr: &TileRow, cat: Category) -> Vec<Rank> {
    if !cat.is_number() {
        return cat.ranks().filter(|&r| tr[r as usize] >= 2).collect();
    }
    let sum: usize = (1..TNUM).map(|i| i * tr[i] as usize).sum();
    let mod3 = sum % 3;
    (1..4)
        .map(|i| (3 * i - mod3) as Rank)
        .filter(|&r| (1..=9).contains(&r) && tr[r as usize] >= 2)
        .collect()
}

fn is_sets_pair(tr: &TileRow, cat: Category) -> bool {
    let mut tr = *tr;
    pair_candidate_ranks(&tr, cat).into_iter().any(|r| {
        tr[r as usize] -= 2;
        let ok = is_sets(&tr, cat);
        tr[r as usize] += 2;
        ok
    })
}

// 雀頭+面子形で構成されているか
// 枚数を3で割った余りが2の牌種がちょうど1つで,それ以外の牌種は余り0である必要がある
pub fn is_normal_form(tiles: &[Tile]) -> bool {
    if tiles.is_empty() {
        return false;
    }
    let tt = tiles_to_tile_table(tiles);
    let mut pair_category = None;
    for cat in Category::ALL {
        let sum: usize = tt[cat.index()].iter().map(|&n| n as usize).sum();
        match sum % 3 {
            0 => {}
            2 if pair_category.is_none() => pair_category = Some(cat),
            _ => return false,
        }
    }
    let pair_category = match pair_category {
        Some(c) => c,
        None => return false,
    };

    Category::ALL.into_iter().all(|cat| {
        let tr = &tt[cat.index()];
        if cat == pair_category {
            is_sets_pair(tr, cat)
        } else {
            is_sets(tr, cat)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Vec<Tile> {
        tiles_from_string(s).unwrap()
    }

    #[test]
    fn test_split_simple() {
        let hand = ts("m123234p456s55789");
        let splits: Vec<Split> = normal_form_split(&hand).collect();
        assert_eq!(splits.len(), 1);
        let s = &splits[0];
        assert_eq!(s.len(), 5);
        assert_eq!(s.iter().filter(|g| g.0 == GroupType::Run).count(), 4);
        assert!(s.contains(&Group(GroupType::Pair, Tile::from_symbol("s5").unwrap())));
        assert!(is_normal_form(&hand));
    }

    #[test]
    fn test_split_multiple() {
        // 111222333m + 雀頭: 3刻子 / 3順子 の2通り
        let hand = ts("m11122233345699");
        let splits: Vec<Split> = normal_form_split(&hand[..14]).collect();
        assert_eq!(splits.len(), 2);
        for s in &splits {
            let tiles: usize = s.iter().map(|g| g.tiles().len()).sum();
            assert_eq!(tiles, 14);
        }
    }

    #[test]
    fn test_split_restartable() {
        let hand = ts("m11122233345699");
        let it = normal_form_split(&hand[..14]);
        let a: Vec<Split> = it.clone().collect();
        let b: Vec<Split> = it.collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_not_normal_form() {
        assert!(!is_normal_form(&[]));
        assert_eq!(normal_form_split(&[]).count(), 0);
        let hand = ts("m1357p2468s1357z12");
        assert!(!is_normal_form(&hand));
        assert_eq!(normal_form_split(&hand).count(), 0);
        // 字牌の順子は不可
        let hand = ts("z12355");
        assert!(!is_normal_form(&hand));
        assert_eq!(normal_form_split(&hand).count(), 0);
    }

    #[test]
    fn test_small_hands() {
        assert!(is_normal_form(&ts("z11")));
        assert!(!is_normal_form(&ts("z1")));
        assert!(is_normal_form(&ts("p78999")));
        assert_eq!(normal_form_split(&ts("p78999")).count(), 1);
        assert!(is_normal_form(&ts("z55566")));
        assert!(!is_normal_form(&ts("z55567")));
        assert!(is_normal_form(&ts("m12311")));
    }

    #[test]
    fn test_red_five() {
        let hand = ts("m406p123s789z11122");
        assert!(is_normal_form(&hand));
        assert_eq!(normal_form_split(&hand).count(), 1);
    }
}
