use crate::hand::*;
use crate::model::*;

// [可能なアクションの判定]
// 手番や供託, 牌山の残り枚数など卓全体の条件は呼び出し側で確認する

// 手牌に含まれる牌のうちtと同種のもの (赤5と通常の5は別に扱う)
fn variants(hand: &[Tile], t: Tile) -> Vec<Tile> {
    let mut res: Vec<Tile> = vec![];
    for h in hand {
        if *h == t && !res.iter().any(|r| r.is_identical(h)) {
            res.push(*h);
        }
    }
    res
}

// 暗槓可能な牌
// リーチ中はツモ牌による暗槓のみで,かつ待ちが変化しない場合に限る
pub fn concealed_kan_candidates(rec: &SeatRecord, drawn: Tile, is_riichi: bool) -> Vec<Tile> {
    let tt = rec.tile_table();
    if is_riichi {
        if table_count(&tt, drawn) != 4 {
            return vec![];
        }

        let mut before = rec.hand.clone();
        if let Some(i) = before.iter().position(|t| t.is_identical(&drawn)) {
            before.remove(i);
        }
        let after: Vec<Tile> = rec.hand.iter().copied().filter(|t| *t != drawn).collect();
        let waits = wait_list(&before);
        if waits.is_empty() || waits != normal_form_wait_list(&after) {
            return vec![];
        }
        return vec![drawn.to_normal()];
    }

    all_kinds().filter(|&t| table_count(&tt, t) == 4).collect()
}

// 加槓可能な牌
pub fn added_kan_candidates(rec: &SeatRecord) -> Vec<Tile> {
    rec.melds
        .iter()
        .filter(|m| m.meld_type() == MeldType::Pon && rec.has(m.head()))
        .map(|m| m.head())
        .collect()
}

// チーに使用する手牌2枚の組み合わせ (赤5の有無は別の組み合わせ)
pub fn chi_candidates(rec: &SeatRecord, discard: Tile) -> Vec<[Tile; 2]> {
    if !discard.is_number() {
        return vec![];
    }

    let mut res = vec![];
    for (a, b) in [(-2, -1), (-1, 1), (1, 2)] {
        let (ta, tb) = match (discard.offset(a), discard.offset(b)) {
            (Some(ta), Some(tb)) => (ta, tb),
            _ => continue,
        };
        for va in variants(&rec.hand, ta) {
            for vb in variants(&rec.hand, tb) {
                res.push([va, vb]);
            }
        }
    }
    res
}

// ポンに使用する手牌2枚の組み合わせ
pub fn pon_candidates(rec: &SeatRecord, discard: Tile) -> Vec<[Tile; 2]> {
    let vs = variants(&rec.hand, discard);
    let n = rec.count(discard);
    let mut res = vec![];
    if n < 2 {
        return res;
    }

    // 赤5を含む場合と含まない場合
    let normal = discard.to_normal();
    let n_red = rec.hand.iter().filter(|h| **h == discard && h.is_red()).count();
    if n - n_red >= 2 {
        res.push([normal, normal]);
    }
    for v in vs.iter().filter(|v| v.is_red()) {
        if n - n_red >= 1 {
            res.push([*v, normal]);
        } else if n_red >= 2 {
            res.push([*v, *v]);
        }
    }
    res
}

// 大明槓に使用する手牌3枚
pub fn open_kan_candidate(rec: &SeatRecord, discard: Tile) -> Option<[Tile; 3]> {
    if rec.count(discard) != 3 {
        return None;
    }
    let mut ts = rec.hand.iter().copied().filter(|h| *h == discard);
    Some([ts.next()?, ts.next()?, ts.next()?])
}

// 鳴いた直後に捨てることができない牌 (喰い替え)
// ポンは鳴いた牌と同種, チーは鳴いた牌と同種および両面の反対側
pub fn prohibited_discards(meld: &Meld) -> Vec<Tile> {
    let called = match meld.called_tile() {
        Some(t) => t.to_normal(),
        None => return vec![],
    };

    match meld.meld_type() {
        MeldType::Pon => vec![called],
        MeldType::Chi => {
            let mut res = vec![called];
            let head = meld.head();
            if called == head {
                // 345の3を鳴いた場合 -> 6
                res.extend(called.offset(3));
            } else if called == meld.tiles()[2] {
                // 345の5を鳴いた場合 -> 2
                res.extend(called.offset(-3));
            }
            res
        }
        _ => vec![],
    }
}

// 鳴いた後に喰い替えにならない打牌が残るか
pub fn has_discard_after_call(
    rec: &SeatRecord,
    meld_type: MeldType,
    consumed: &[Tile],
    called: Tile,
) -> bool {
    let mut hand = rec.hand.clone();
    let mut tiles = vec![called];
    for c in consumed {
        match hand.iter().position(|h| h.is_identical(c)) {
            Some(i) => tiles.push(hand.remove(i)),
            None => return false,
        }
    }
    // 喰い替えの判定には鳴いた牌の位置のみを使用するので座席は仮の値
    let meld = match Meld::new(1, meld_type, tiles, Some(called), 0) {
        Ok(m) => m,
        Err(_) => return true,
    };
    let prohibited = prohibited_discards(&meld);
    hand.iter().any(|h| !prohibited.contains(h))
}

// 九種九牌の条件を満たす手牌 (么九牌が9種以上)
pub fn can_declare_nine_kinds(rec: &SeatRecord) -> bool {
    let tt = rec.tile_table();
    ORPHANS.iter().filter(|&&t| table_count(&tt, t) > 0).count() >= 9
}

// リーチ宣言が可能な打牌 (聴牌となる打牌)
// 門前であることと持ち点は呼び出し側で確認する
pub fn riichi_discards(rec: &SeatRecord) -> Vec<Tile> {
    tenpai_discards(&rec.hand).into_iter().map(|(t, _)| t).collect()
}
