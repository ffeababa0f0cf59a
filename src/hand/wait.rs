use crate::model::*;

// [和了牌判定]
// 和了牌のリストを表示順で返却
// 聴牌していない場合は空のリストを返却

// 待ちの形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Partial {
    None,
    Single(Tile),   // 単騎
    Same(Tile),     // 対子 (シャンポン)
    Adjacent(Tile), // 両面・辺張 (小さい方の牌)
    Gap(Tile),      // 嵌張 (小さい方の牌)
}

// 通常形
// 手牌から面子と雀頭を取り除き,残った1枚または2枚の形から和了牌を求める
// 4枚使いの牌も和了牌に含む (手牌に和了牌を加えた形が通常形であることと同値)
pub fn normal_form_wait_list(hand: &[Tile]) -> Vec<Tile> {
    if hand.len() % 3 != 1 || hand.len() > HAND {
        return vec![];
    }
    let mut waits = vec![];
    wait_rec(tiles_to_tile_table(hand), false, Partial::None, &mut waits);
    finish(waits)
}

fn wait_rec(tt: TileTable, has_pair: bool, partial: Partial, waits: &mut Vec<Tile>) {
    let t = match lowest(&tt) {
        Some(t) => t,
        None => {
            collect_waits(has_pair, partial, waits);
            return;
        }
    };
    let n = table_count(&tt, t);
    let remove = |ts: &[Tile]| -> TileTable {
        let mut tt = tt;
        for &x in ts {
            table_dec(&mut tt, x, 1);
        }
        tt
    };
    let next1 = t.offset(1).filter(|&x| table_count(&tt, x) > 0);
    let next2 = t.offset(2).filter(|&x| table_count(&tt, x) > 0);

    // 面子
    if let (Some(t1), Some(t2)) = (next1, next2) {
        wait_rec(remove(&[t, t1, t2]), has_pair, partial, waits);
    }
    if n >= 3 {
        wait_rec(remove(&[t, t, t]), has_pair, partial, waits);
    }
    // 雀頭
    if n >= 2 && !has_pair {
        wait_rec(remove(&[t, t]), true, partial, waits);
    }

    // 待ちの形は1つだけ
    if partial != Partial::None {
        return;
    }
    wait_rec(remove(&[t]), has_pair, Partial::Single(t), waits);
    if n >= 2 {
        wait_rec(remove(&[t, t]), has_pair, Partial::Same(t), waits);
    }
    if let Some(t1) = next1 {
        wait_rec(remove(&[t, t1]), has_pair, Partial::Adjacent(t), waits);
    }
    if let Some(t2) = next2 {
        wait_rec(remove(&[t, t2]), has_pair, Partial::Gap(t), waits);
    }
}

fn collect_waits(has_pair: bool, partial: Partial, waits: &mut Vec<Tile>) {
    match (has_pair, partial) {
        (false, Partial::Single(t)) => waits.push(t),
        (true, Partial::Same(t)) => waits.push(t),
        (true, Partial::Adjacent(t)) => {
            // 12 -> 3, 89 -> 7 (辺張)
            waits.extend(t.offset(-1));
            waits.extend(t.offset(2));
        }
        (true, Partial::Gap(t)) => waits.extend(t.offset(1)),
        _ => {}
    }
}

fn lowest(tt: &TileTable) -> Option<Tile> {
    all_kinds().find(|&t| table_count(tt, t) > 0)
}

fn finish(mut waits: Vec<Tile>) -> Vec<Tile> {
    sort_tiles(&mut waits);
    waits.dedup();
    waits
}

// 七対子
// 6種の対子と1枚の単騎 (同種4枚は2対子として扱わない)
pub fn seven_pair_wait_list(hand: &[Tile]) -> Vec<Tile> {
    if hand.len() != HAND {
        return vec![];
    }
    let tt = tiles_to_tile_table(hand);
    let mut pairs = 0;
    let mut single = None;
    for t in all_kinds() {
        match table_count(&tt, t) {
            0 => {}
            1 => single = Some(t),
            2 => pairs += 1,
            _ => return vec![],
        }
    }
    match single {
        Some(t) if pairs == 6 => vec![t],
        _ => vec![],
    }
}

pub fn is_seven_pair_form(hand: &[Tile]) -> bool {
    if hand.len() != HAND + 1 {
        return false;
    }
    let tt = tiles_to_tile_table(hand);
    all_kinds().filter(|&t| table_count(&tt, t) == 2).count() == 7
}

// 国士無双
// 13種すべてが揃っている場合は13面待ち
pub fn guoshi_wait_list(hand: &[Tile]) -> Vec<Tile> {
    if hand.len() != HAND || hand.iter().any(|t| !t.is_end()) {
        return vec![];
    }
    let tt = tiles_to_tile_table(hand);
    let missing: Vec<Tile> = ORPHANS
        .iter()
        .copied()
        .filter(|&t| table_count(&tt, t) == 0)
        .collect();
    match missing.len() {
        0 => ORPHANS.to_vec(),
        1 if ORPHANS.iter().all(|&t| table_count(&tt, t) <= 2) => missing,
        _ => vec![],
    }
}

pub fn is_guoshi_form(hand: &[Tile]) -> bool {
    if hand.len() != HAND + 1 || hand.iter().any(|t| !t.is_end()) {
        return false;
    }
    let tt = tiles_to_tile_table(hand);
    ORPHANS.iter().all(|&t| table_count(&tt, t) >= 1)
}

// 和了牌 (通常形, 七対子, 国士無双の和集合)
// 七対子と国士無双は副露がない場合(手牌13枚)のみ
pub fn wait_list(hand: &[Tile]) -> Vec<Tile> {
    let mut waits = normal_form_wait_list(hand);
    waits.extend(seven_pair_wait_list(hand));
    waits.extend(guoshi_wait_list(hand));
    finish(waits)
}

#[inline]
pub fn is_tenpai(hand: &[Tile]) -> bool {
    !wait_list(hand).is_empty()
}

// 和了形 (通常形, 七対子, 国士無双)
pub fn is_winning_form(hand: &[Tile]) -> bool {
    super::split::is_normal_form(hand) || is_seven_pair_form(hand) || is_guoshi_form(hand)
}

// [聴牌打牌]
// 打牌後に聴牌となる牌とその和了牌のリスト
// 赤5と通常の5は別の打牌として扱う
pub fn tenpai_discards(hand: &[Tile]) -> Vec<(Tile, Vec<Tile>)> {
    let mut res: Vec<(Tile, Vec<Tile>)> = vec![];
    for (i, &d) in hand.iter().enumerate() {
        if res.iter().any(|(t, _)| t.is_identical(&d)) {
            continue;
        }
        let mut h = hand.to_vec();
        h.remove(i);
        let waits = wait_list(&h);
        if !waits.is_empty() {
            res.push((d, waits));
        }
    }
    res
}
