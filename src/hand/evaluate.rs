use super::wait::is_winning_form;
use super::yaku::{YakuContext, YakuId};
use crate::model::*;

// 和了形であるか (通常形, 七対子, 国士無双)
pub fn is_winning_shape(view: &View<'_>) -> bool {
    let hand = view.winning_hand();
    let n_melds = view.melds(view.seat()).len();
    hand.len() + n_melds * 3 == HAND + 1 && is_winning_form(&hand)
}

// 成立している役の一覧
// 和了形であることは呼び出し側で確認すること
pub fn evaluate_yaku(view: &View<'_>) -> Vec<YakuId> {
    YakuContext::new(view).calc_yaku()
}

// 和了可能な場合 (和了形かつ1つ以上の役) は役の一覧を返却
pub fn evaluate_win(view: &View<'_>) -> Option<Vec<YakuId>> {
    if !is_winning_shape(view) {
        return None;
    }
    let yaku = evaluate_yaku(view);
    if yaku.is_empty() {
        None
    } else {
        Some(yaku)
    }
}

// [ドラ]

// 表示牌に対応するドラの枚数 (手牌と副露)
pub fn count_dora(hand: &[Tile], melds: &[Meld], indicators: &[Tile]) -> usize {
    let doras: Vec<Tile> = indicators.iter().map(|t| t.dora_successor()).collect();
    all_tiles(hand, melds)
        .map(|t| doras.iter().filter(|d| **d == t).count())
        .sum()
}

// 赤ドラの枚数
pub fn count_red(hand: &[Tile], melds: &[Meld]) -> usize {
    all_tiles(hand, melds).filter(|t| t.is_red()).count()
}

fn all_tiles<'a>(hand: &'a [Tile], melds: &'a [Meld]) -> impl Iterator<Item = Tile> + 'a {
    hand.iter()
        .chain(melds.iter().flat_map(|m| m.tiles().iter()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Vec<Tile> {
        tiles_from_string(s).unwrap()
    }

    fn seats_with_hand(hand: &str) -> [SeatRecord; SEAT] {
        let mut seats: [SeatRecord; SEAT] = Default::default();
        for (s, rec) in seats.iter_mut().enumerate() {
            rec.wind = s as Rank;
        }
        for t in ts(hand) {
            seats[0].add_tile(t);
        }
        seats
    }

    #[test]
    fn test_evaluate_win() {
        let round = RoundState {
            wall_count: 10,
            ..Default::default()
        };
        let seats = seats_with_hand("m123234p456s5578");
        let s9 = Tile::from_symbol("s9").unwrap();
        let v = View::new(0, 1, ActionKind::Discard, s9, &seats, &round);
        assert!(is_winning_shape(&v));
        assert_eq!(evaluate_win(&v), Some(vec![YakuId::Pinfu]));

        let p1 = Tile::from_symbol("p1").unwrap();
        let v = View::new(0, 1, ActionKind::Discard, p1, &seats, &round);
        assert!(!is_winning_shape(&v));
        assert_eq!(evaluate_win(&v), None);
    }

    #[test]
    fn test_no_yaku() {
        let round = RoundState {
            wall_count: 10,
            ..Default::default()
        };
        // 和了形だが役なし
        let mut seats = seats_with_hand("m123p456s789z3");
        seats[0]
            .melds
            .push(Meld::new(0, MeldType::Ankan, ts("m9999"), None, 0).unwrap());
        let z3 = Tile::from_symbol("z3").unwrap();
        let v = View::new(0, 1, ActionKind::Discard, z3, &seats, &round);
        assert!(is_winning_shape(&v));
        assert_eq!(evaluate_win(&v), None);
    }

    #[test]
    fn test_dora_count() {
        let hand = ts("m4056p99z11");
        let z7 = Tile::from_symbol("z7").unwrap();
        let melds = vec![Meld::new(0, MeldType::Pon, ts("z777"), Some(z7), 1).unwrap()];
        assert_eq!(count_dora(&hand, &melds, &ts("m4")), 2);
        assert_eq!(count_dora(&hand, &melds, &ts("p8z4z6")), 2 + 2 + 3);
        assert_eq!(count_red(&hand, &melds), 1);
    }
}
