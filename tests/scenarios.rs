use mahjong_rules::hand::*;
use mahjong_rules::model::*;

fn ts(s: &str) -> Vec<Tile> {
    tiles_from_string(s).unwrap()
}

#[test]
fn full_set_has_136_tiles() {
    let tiles = full_set(1);
    assert_eq!(tiles.len(), 136);
    let tt = tiles_to_tile_table(&tiles);
    assert!(all_kinds().all(|t| table_count(&tt, t) == 4));
    assert_eq!(all_kinds().count(), 34);
    assert_eq!(tiles.iter().filter(|t| t.is_red()).count(), 3);
    for c in [Category::Man, Category::Pin, Category::Suo] {
        let fives: Vec<&Tile> = tiles
            .iter()
            .filter(|t| t.category() == c && t.rank() == 5)
            .collect();
        assert_eq!(fives.len(), 4);
        assert_eq!(fives.iter().filter(|t| t.is_red()).count(), 1);
    }
}

#[test]
fn run_and_pair_hand_is_normal_form_with_pinfu() {
    let hand = ts("m123234p456s55789");
    assert!(is_normal_form(&hand));
    let split = normal_form_split(&hand).next().unwrap();
    assert_eq!(split.iter().filter(|g| g.0 == GroupType::Run).count(), 4);

    // s9のロンで和了
    let mut seats: [SeatRecord; SEAT] = Default::default();
    for (s, rec) in seats.iter_mut().enumerate() {
        rec.wind = s as Rank;
    }
    for t in ts("m123234p456s5578") {
        seats[1].add_tile(t);
    }
    let round = RoundState {
        wall_count: 30,
        ..Default::default()
    };
    let s9 = Tile::from_symbol("s9").unwrap();
    let view = View::new(1, 0, ActionKind::Discard, s9, &seats, &round);
    let yaku = evaluate_win(&view).unwrap();
    assert!(yaku.contains(&YakuId::Pinfu));
}

#[test]
fn seven_pair_wait_is_the_single() {
    let hand = ts("m1133p2255s7799z1");
    assert_eq!(seven_pair_wait_list(&hand), ts("z1"));
    assert_eq!(wait_list(&hand), ts("z1"));

    let mut win = hand.clone();
    win.push(Tile::from_symbol("z1").unwrap());
    assert!(is_seven_pair_form(&win));
    assert!(!is_normal_form(&win));
}

#[test]
fn meld_construction_errors() {
    let m3 = Tile::from_symbol("m3").unwrap();
    // 連続しないチー
    assert!(Meld::new(1, MeldType::Chi, ts("m135"), Some(m3), 0).is_err());
    // 上家以外からのチー
    assert!(Meld::new(1, MeldType::Chi, ts("m123"), Some(m3), 2).is_err());
    // 加槓はポンからのみ生成
    assert!(Meld::new(1, MeldType::Kakan, ts("m3333"), Some(m3), 0).is_err());
    let pon = Meld::new(1, MeldType::Pon, ts("m333"), Some(m3), 3).unwrap();
    let kakan = pon.promote(m3).unwrap();
    assert_eq!(kakan.meld_type(), MeldType::Kakan);
    assert_eq!(kakan.tiles().len(), 4);
    assert!(pon.promote(Tile::from_symbol("m4").unwrap()).is_err());
}
